//! QR module matrix encoder

use crate::error::{Error, Result};
use crate::qr::{BitMatrix, EcLevel, RenderOptions};
use qrcode::QrCode;

/// Produces a module matrix from render options.
///
/// The raster transform only ever sees a [`BitMatrix`], so tests can drive
/// it with a fake encoder returning fixed matrices.
pub trait MatrixEncoder {
    /// Encode `options.content` into a module matrix at least
    /// `options.width` × `options.height` modules large.
    fn encode(&self, options: &RenderOptions) -> Result<BitMatrix>;
}

/// [`MatrixEncoder`] backed by the `qrcode` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrMatrixEncoder;

impl QrMatrixEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }
}

impl MatrixEncoder for QrMatrixEncoder {
    fn encode(&self, options: &RenderOptions) -> Result<BitMatrix> {
        if options.content.is_empty() {
            return Err(Error::QrEncode("content must not be empty".to_string()));
        }

        let code =
            QrCode::with_error_correction_level(options.content.as_bytes(), ec_level(options.ec_level))
                .map_err(|e| Error::QrEncode(format!("Failed to create QR code: {e}")))?;

        let modules = code.width() as u32;
        Ok(fit_to_size(&code.to_colors(), modules, options))
    }
}

fn ec_level(level: EcLevel) -> qrcode::EcLevel {
    match level {
        EcLevel::Low => qrcode::EcLevel::L,
        EcLevel::Medium => qrcode::EcLevel::M,
        EcLevel::Quartile => qrcode::EcLevel::Q,
        EcLevel::High => qrcode::EcLevel::H,
    }
}

/// Scale the module grid up to the requested pixel size and center it inside
/// the quiet zone.
///
/// Output dimensions equal the requested ones unless the symbol plus quiet
/// zone does not fit, in which case they grow to the minimum that does. The
/// module scale is the largest integer multiple that keeps the padded symbol
/// inside the output.
fn fit_to_size(colors: &[qrcode::Color], modules: u32, options: &RenderOptions) -> BitMatrix {
    let total = modules + 2 * options.quiet_zone;
    let out_width = options.width.max(total);
    let out_height = options.height.max(total);
    let multiple = (out_width / total).min(out_height / total);
    let left = (out_width - modules * multiple) / 2;
    let top = (out_height - modules * multiple) / 2;

    let mut matrix = BitMatrix::new(out_width, out_height);
    for (y, row) in colors.chunks(modules as usize).enumerate() {
        for (x, color) in row.iter().enumerate() {
            if *color == qrcode::Color::Dark {
                let px0 = left + x as u32 * multiple;
                let py0 = top + y as u32 * multiple;
                for py in py0..py0 + multiple {
                    for px in px0..px0 + multiple {
                        matrix.set(px, py);
                    }
                }
            }
        }
    }

    tracing::debug!(
        modules,
        out_width,
        out_height,
        multiple,
        "encoded QR module matrix"
    );

    matrix
}
