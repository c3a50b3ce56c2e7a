//! Image preprocessing and depth-map post-processing
//!
//! Bridges the pixel world and the tensor world:
//! - letterbox a decoded image into the model's square input
//! - build the normalized NCHW float tensor the model consumes
//! - convert the raw depth plane the model produces into a grayscale image

pub mod config;
pub mod depth;
pub mod letterbox;
pub mod tensor;

pub use config::PreprocessConfig;
pub use depth::DepthMap;
pub use letterbox::letterbox;
pub use tensor::to_nchw_tensor;

use thiserror::Error;

/// Errors during pixel/tensor preprocessing
#[derive(Debug, Error)]
pub enum PreprocessError {
    /// Target canvas has a zero dimension
    #[error("invalid target size {width}x{height}")]
    InvalidTargetSize { width: u32, height: u32 },

    /// Depth plane length does not match its declared dimensions
    #[error("depth plane size mismatch: expected {expected} values, got {actual}")]
    PlaneSizeMismatch { expected: usize, actual: usize },

    /// Source image has a zero dimension
    #[error("source image is empty ({width}x{height})")]
    EmptySource { width: u32, height: u32 },
}
