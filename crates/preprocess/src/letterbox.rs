//! Letterbox fitting of a source image onto the model input canvas

use crate::PreprocessError;
use image::{imageops, RgbImage};
use tracing::debug;

/// Compute the scaled size that fits `(width, height)` inside the target
/// while preserving aspect ratio. Sources already inside the target keep
/// their original size; only oversized sources are scaled down.
pub fn fitted_size(
    width: u32,
    height: u32,
    target_width: u32,
    target_height: u32,
) -> (u32, u32) {
    if width <= target_width && height <= target_height {
        return (width, height);
    }
    let scale = (target_width as f32 / width as f32).min(target_height as f32 / height as f32);
    let fit_w = ((width as f32 * scale).round() as u32).max(1);
    let fit_h = ((height as f32 * scale).round() as u32).max(1);
    (fit_w.min(target_width), fit_h.min(target_height))
}

/// Fit the source onto a black target canvas, centered.
///
/// Oversized sources are downscaled preserving aspect ratio before
/// placement; smaller sources are only padded.
pub fn letterbox(
    src: &RgbImage,
    target_width: u32,
    target_height: u32,
) -> Result<RgbImage, PreprocessError> {
    if target_width == 0 || target_height == 0 {
        return Err(PreprocessError::InvalidTargetSize {
            width: target_width,
            height: target_height,
        });
    }
    if src.width() == 0 || src.height() == 0 {
        return Err(PreprocessError::EmptySource {
            width: src.width(),
            height: src.height(),
        });
    }

    let (fit_w, fit_h) = fitted_size(src.width(), src.height(), target_width, target_height);

    let scaled;
    let placed: &RgbImage = if (fit_w, fit_h) == (src.width(), src.height()) {
        src
    } else {
        debug!(
            "Downscaling {}x{} source to {}x{}",
            src.width(),
            src.height(),
            fit_w,
            fit_h
        );
        scaled = imageops::resize(src, fit_w, fit_h, imageops::FilterType::Triangle);
        &scaled
    };

    let offset_x = (target_width - fit_w) / 2;
    let offset_y = (target_height - fit_h) / 2;

    let mut canvas = RgbImage::new(target_width, target_height);
    imageops::replace(&mut canvas, placed, i64::from(offset_x), i64::from(offset_y));

    debug!(
        "Letterboxed {}x{} source into {}x{} canvas at offset ({}, {})",
        src.width(),
        src.height(),
        target_width,
        target_height,
        offset_x,
        offset_y
    );

    Ok(canvas)
}
