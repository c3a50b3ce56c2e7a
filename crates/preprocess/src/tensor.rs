//! NCHW float tensor construction

use image::RgbImage;
use ndarray::Array4;
use tracing::debug;

/// Build a `(1, 3, H, W)` float tensor from an RGB image, scaling each
/// channel into `[0, 1]`.
pub fn to_nchw_tensor(img: &RgbImage) -> Array4<f32> {
    let (width, height) = (img.width() as usize, img.height() as usize);
    let mut tensor = Array4::<f32>::zeros((1, 3, height, width));
    for (x, y, pixel) in img.enumerate_pixels() {
        tensor[[0, 0, y as usize, x as usize]] = pixel[0] as f32 / 255.0;
        tensor[[0, 1, y as usize, x as usize]] = pixel[1] as f32 / 255.0;
        tensor[[0, 2, y as usize, x as usize]] = pixel[2] as f32 / 255.0;
    }
    debug!("Built input tensor (1, 3, {}, {})", height, width);
    tensor
}
