//! End-to-end rendering tests

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use qrsmith::{EcLevel, MatrixEncoder, QrImageBuilder, QrMatrixEncoder, RenderOptions};

#[test]
fn renders_square_image_with_both_tones() {
    let image = QrImageBuilder::new()
        .with_content("HELLO")
        .render()
        .unwrap();

    assert_eq!(image.width(), image.height());
    assert!(image.width() >= 150);

    let mut dark = 0usize;
    let mut light = 0usize;
    for pixel in image.pixels() {
        match pixel.0 {
            [0, 0, 0] => dark += 1,
            [255, 255, 255] => light += 1,
            other => panic!("pixel is neither pure black nor pure white: {other:?}"),
        }
    }
    assert!(dark > 0);
    assert!(light > 0);
}

#[test]
fn image_dimensions_follow_the_encoder_matrix() {
    let options = RenderOptions {
        content: "HELLO".to_string(),
        width: 10,
        height: 10,
        ..RenderOptions::default()
    };

    let matrix = QrMatrixEncoder::new().encode(&options).unwrap();
    let image = qrsmith::render(&options, &QrMatrixEncoder::new()).unwrap();

    // The 10x10 request is below the symbol minimum, so both grow together.
    assert!(matrix.width() > 10);
    assert_eq!(image.width(), matrix.width());
    assert_eq!(image.height(), matrix.height());
}

#[test]
fn base64_decodes_to_the_drained_jpeg_bytes() {
    let builder = QrImageBuilder::new().with_size(200, 200).with_content("HELLO");

    let mut drained = Vec::new();
    builder.drain_to(&mut drained).unwrap();

    let decoded = STANDARD.decode(builder.to_base64().unwrap()).unwrap();
    assert_eq!(decoded, drained);
    assert_eq!(&drained[..3], &[0xFF, 0xD8, 0xFF]); // JPEG SOI marker
}

#[test]
fn identical_builders_produce_identical_bytes() {
    let make = || {
        QrImageBuilder::new()
            .with_size(180, 180)
            .with_content("same configuration")
    };

    let mut first = Vec::new();
    make().drain_to(&mut first).unwrap();

    let mut second = Vec::new();
    make().drain_to(&mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_content_is_a_defined_error() {
    let err = QrImageBuilder::new().to_base64().unwrap_err();
    assert!(matches!(err, qrsmith::Error::QrEncode(_)));
}

#[test]
fn failing_sink_propagates_the_io_error() {
    struct BrokenSink;

    impl std::io::Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = QrImageBuilder::new()
        .with_content("HELLO")
        .drain_to(BrokenSink)
        .unwrap_err();
    assert!(matches!(
        err,
        qrsmith::Error::Io(_) | qrsmith::Error::Image(_)
    ));
}

#[test]
fn jpeg_round_trips_through_a_decoder() {
    let builder = QrImageBuilder::new()
        .with_size(300, 300)
        .with_content("round trip payload")
        .with_error_correction(EcLevel::Medium);

    let mut bytes = Vec::new();
    builder.drain_to(&mut bytes).unwrap();

    let image = image::load_from_memory(&bytes).unwrap();
    let mut prepared = rqrr::PreparedImage::prepare(image.to_luma8());
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1);

    let (_meta, content) = grids[0].decode().unwrap();
    assert_eq!(content, "round trip payload");
}
