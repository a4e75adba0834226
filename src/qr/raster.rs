//! Bit-matrix rasterization and JPEG encoding

use crate::error::Result;
use crate::qr::BitMatrix;
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use std::io::Write;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Fill an RGB pixel buffer from a module matrix.
///
/// Dark modules become pure black, light modules pure white. The image takes
/// its dimensions from the matrix and uses standard row-major orientation,
/// so matrix `(x, y)` lands at image `(x, y)`.
pub fn rasterize(matrix: &BitMatrix) -> RgbImage {
    let mut image = RgbImage::from_pixel(matrix.width(), matrix.height(), WHITE);
    for y in 0..matrix.height() {
        for x in 0..matrix.width() {
            if matrix.get(x, y) {
                image.put_pixel(x, y, BLACK);
            }
        }
    }

    tracing::trace!(
        width = image.width(),
        height = image.height(),
        "rasterized module matrix"
    );

    image
}

/// Encode an RGB image as JPEG into the given writer.
pub fn write_jpeg<W: Write>(image: &RgbImage, quality: u8, sink: &mut W) -> Result<()> {
    let mut encoder = JpegEncoder::new_with_quality(sink, quality);
    encoder.encode(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(())
}
