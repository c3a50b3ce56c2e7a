//! Raw depth plane produced by the model

use crate::PreprocessError;
use image::{GrayImage, Luma};
use tracing::debug;

/// Single-channel float plane holding per-pixel depth predictions.
#[derive(Debug, Clone)]
pub struct DepthMap {
    data: Vec<f32>,
    width: u32,
    height: u32,
}

impl DepthMap {
    /// Create a depth map from row-major values
    pub fn new(data: Vec<f32>, width: u32, height: u32) -> Result<Self, PreprocessError> {
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(PreprocessError::PlaneSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Plane width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Plane height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major values
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Value at (x, y)
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Min-max normalize the plane into an 8-bit grayscale image.
    ///
    /// Non-finite values are ignored when computing the range. A flat (or
    /// fully non-finite) plane maps to an all-zero image rather than
    /// dividing by a zero range.
    pub fn to_gray(&self) -> GrayImage {
        let mut min_val = f32::INFINITY;
        let mut max_val = f32::NEG_INFINITY;
        for &value in &self.data {
            if value.is_finite() {
                min_val = min_val.min(value);
                max_val = max_val.max(value);
            }
        }

        let range = max_val - min_val;
        let mut img = GrayImage::new(self.width, self.height);
        if !range.is_finite() || range <= 0.0 {
            debug!("Flat depth plane, emitting all-zero image");
            return img;
        }

        for (i, &value) in self.data.iter().enumerate() {
            let scaled = if value.is_finite() {
                ((value - min_val) / range * 255.0) as u8
            } else {
                0
            };
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            img.put_pixel(x, y, Luma([scaled]));
        }
        img
    }
}
