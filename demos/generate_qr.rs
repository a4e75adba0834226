//! Generate a QR code JPEG and save it to a file
//!
//! Usage: cargo run --example generate_qr

use qrsmith::QrImageBuilder;
use std::fs::File;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    qrsmith::logging::init("info")?;

    let builder = QrImageBuilder::new()
        .with_size(300, 300)
        .with_content("Hello from qrsmith!");

    // Save to file
    let file = File::create("qr_output.jpg")?;
    builder.drain_to(file)?;
    println!("✓ QR code generated and saved to qr_output.jpg");

    // Same image as a base64 string
    let base64 = builder.to_base64()?;
    println!("✓ base64 form: {} chars", base64.len());

    Ok(())
}
