//! qrsmith - fluent QR code image builder
//!
//! This library turns a text string into a QR code rendered as a black/white
//! raster image and delivers it as a JPEG byte stream written to a
//! caller-supplied sink, or as a base64-encoded string.
//!
//! # Features
//!
//! - **Fluent builder**: configure size and content, then produce output
//! - **ZXing-compatible sizing**: output grows past the requested dimensions
//!   when the symbol plus quiet zone does not fit
//! - **Pluggable encoding**: the raster transform is independent of the QR
//!   encoder behind the [`MatrixEncoder`] trait
//!
//! # Example
//!
//! ```
//! use qrsmith::QrImageBuilder;
//!
//! fn main() -> qrsmith::Result<()> {
//!     let base64 = QrImageBuilder::new()
//!         .with_size(300, 300)
//!         .with_content("https://example.com")
//!         .to_base64()?;
//!
//!     assert!(!base64.is_empty());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod error;
pub mod logging;
pub mod qr;

// Re-exports for convenience
pub use error::{Error, Result};
pub use qr::{BitMatrix, EcLevel, MatrixEncoder, QrMatrixEncoder, RenderOptions, rasterize};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::RgbImage;
use std::io::Write;

/// Fluent builder producing QR code JPEG output.
///
/// Setters consume and return the builder, so a configured builder is an
/// immutable value. The produce operations take `&self` and re-render from
/// scratch on every call; identical configuration yields byte-identical
/// output, across calls and across instances.
#[derive(Debug, Clone, Default)]
pub struct QrImageBuilder {
    options: RenderOptions,
}

impl QrImageBuilder {
    /// Create a builder with the default 150×150 size and no content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from pre-assembled render options.
    pub fn from_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Set the target output size in pixels.
    ///
    /// The actual output may be larger when the symbol plus quiet zone does
    /// not fit the requested dimensions; the rendered image is authoritative.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.options.width = width;
        self.options.height = height;
        self
    }

    /// Set the text payload to encode.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.options.content = content.into();
        self
    }

    /// Set the QR error correction level.
    pub fn with_error_correction(mut self, level: EcLevel) -> Self {
        self.options.ec_level = level;
        self
    }

    /// Set the JPEG quality (1-100).
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.options.jpeg_quality = quality;
        self
    }

    /// The render options this builder has accumulated.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the configured content into a black/white RGB image.
    ///
    /// Fails with [`Error::QrEncode`] when no content has been set or the
    /// content cannot be represented as a QR symbol.
    pub fn render(&self) -> Result<RgbImage> {
        render(&self.options, &QrMatrixEncoder::new())
    }

    /// Render, JPEG-encode into the given sink, and flush it.
    ///
    /// The sink is taken by value and dropped on every exit path, so it is
    /// released whether encoding succeeds or fails.
    pub fn drain_to<W: Write>(&self, mut sink: W) -> Result<()> {
        let image = self.render()?;
        qr::write_jpeg(&image, self.options.jpeg_quality, &mut sink)?;
        sink.flush()?;
        Ok(())
    }

    /// Render and return the JPEG bytes base64-encoded.
    pub fn to_base64(&self) -> Result<String> {
        let mut bytes = Vec::new();
        self.drain_to(&mut bytes)?;
        Ok(STANDARD.encode(&bytes))
    }
}

/// Render options into a black/white RGB image using the given encoder.
///
/// Pure with respect to its inputs: identical options and a deterministic
/// encoder yield a pixel-identical image. The image dimensions come from the
/// matrix the encoder returns, not from the requested size.
pub fn render<E: MatrixEncoder>(options: &RenderOptions, encoder: &E) -> Result<RgbImage> {
    let matrix = encoder.encode(options)?;
    Ok(rasterize(&matrix))
}
