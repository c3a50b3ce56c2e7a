//! Decode and encode helpers over the typed boundary

use crate::{CodecError, EncodedImage};
use image::{GrayImage, ImageFormat, RgbImage};
use std::io::Cursor;
use tracing::debug;

/// Decode an encoded image into an 8-bit RGB pixel buffer
pub fn decode_rgb(image: &EncodedImage) -> Result<RgbImage, CodecError> {
    let decoded = image::load_from_memory_with_format(image.as_bytes(), image.format())
        .map_err(CodecError::Decode)?;
    let rgb = decoded.to_rgb8();
    debug!("Decoded {}x{} image", rgb.width(), rgb.height());
    Ok(rgb)
}

/// Encode an 8-bit grayscale pixel buffer as a PNG file
pub fn encode_gray_png(gray: &GrayImage) -> Result<EncodedImage, CodecError> {
    let mut bytes = Vec::new();
    gray.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(CodecError::Encode)?;
    debug!("Encoded {}x{} grayscale PNG", gray.width(), gray.height());
    EncodedImage::new(bytes)
}
