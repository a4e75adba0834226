//! QR code rendering pipeline
//!
//! This module turns text content into a black/white raster image:
//! content → module matrix ([`BitMatrix`]) → RGB pixel fill → JPEG bytes.

mod encoder;
mod raster;

pub use encoder::{MatrixEncoder, QrMatrixEncoder};
pub use raster::{rasterize, write_jpeg};

use serde::{Deserialize, Serialize};

/// Default output width and height in pixels.
pub const DEFAULT_SIZE: u32 = 150;

/// Default quiet zone width in modules.
pub const DEFAULT_QUIET_ZONE: u32 = 4;

/// Default JPEG quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// A boolean module grid; `true` marks a dark module.
///
/// Dimensions are authoritative: an encoder may return a matrix larger than
/// the requested pixel size when quiet-zone padding or module scaling
/// requires it, and consumers must size their pixel buffers from the matrix,
/// not from the original request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl BitMatrix {
    /// Create an all-light matrix of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width as usize) * (height as usize)],
        }
    }

    /// Matrix width in modules.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Matrix height in modules.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the module at `(x, y)` is dark.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> bool {
        assert!(
            x < self.width && y < self.height,
            "module ({x}, {y}) out of bounds for {}x{} matrix",
            self.width,
            self.height
        );
        self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Mark the module at `(x, y)` as dark.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32) {
        assert!(
            x < self.width && y < self.height,
            "module ({x}, {y}) out of bounds for {}x{} matrix",
            self.width,
            self.height
        );
        self.bits[y as usize * self.width as usize + x as usize] = true;
    }

    /// Number of dark modules in the matrix.
    pub fn dark_count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }
}

/// QR error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EcLevel {
    /// Recovers ~7% of damaged data; the writer default.
    #[default]
    Low,
    /// Recovers ~15% of damaged data.
    Medium,
    /// Recovers ~25% of damaged data.
    Quartile,
    /// Recovers ~30% of damaged data.
    High,
}

/// Immutable rendering configuration.
///
/// Assembled once, usually through [`QrImageBuilder`](crate::QrImageBuilder),
/// then handed to the pure rendering functions. Cloneable and safe to share;
/// every produce call re-renders from these values alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Text payload to encode.
    pub content: String,
    /// Requested output width in pixels.
    pub width: u32,
    /// Requested output height in pixels.
    pub height: u32,
    /// Error correction level.
    pub ec_level: EcLevel,
    /// Quiet zone width in modules.
    pub quiet_zone: u32,
    /// JPEG quality (1-100).
    pub jpeg_quality: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            content: String::new(),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            ec_level: EcLevel::default(),
            quiet_zone: DEFAULT_QUIET_ZONE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}
