//! Depth Inference Bridge
//!
//! The single boundary of the system: a synchronous, stateless call that
//! takes an encoded source image plus a serialized model artifact and
//! returns an encoded grayscale depth image. Every failure surfaces as one
//! of four terminal kinds so the caller can distinguish a bad image from a
//! bad model from a runtime fault.

pub mod bridge;
pub mod smoke;

pub use bridge::{InferenceBackend, InferenceBridge};
pub use image_codec::{EncodedImage, EncodedModel};
pub use smoke::{add, hello, square};

use image_codec::CodecError;
use inference_engine::InferenceError;
use preprocess::PreprocessError;
use thiserror::Error;

/// Terminal error kinds of the inference boundary
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Input bytes could not be parsed as an image
    #[error("Image decode failed: {0}")]
    Decode(String),

    /// Model bytes could not be parsed or initialized by the engine
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    /// Failure while running the model, including shape mismatches and
    /// resource exhaustion
    #[error("Model execution failed: {0}")]
    Execution(String),

    /// Result image could not be serialized
    #[error("Result encode failed: {0}")]
    Encode(String),
}

impl BridgeError {
    /// Stable kind tag for logging and caller-side dispatch
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeError::Decode(_) => "decode",
            BridgeError::ModelLoad(_) => "model_load",
            BridgeError::Execution(_) => "execution",
            BridgeError::Encode(_) => "encode",
        }
    }
}

impl From<CodecError> for BridgeError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::EmptyImage | CodecError::Decode(_) => BridgeError::Decode(err.to_string()),
            CodecError::EmptyModel => BridgeError::ModelLoad(err.to_string()),
            CodecError::Encode(_) => BridgeError::Encode(err.to_string()),
        }
    }
}

impl From<InferenceError> for BridgeError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::ModelLoad(_) => BridgeError::ModelLoad(err.to_string()),
            InferenceError::Execution(_)
            | InferenceError::InvalidInputShape { .. }
            | InferenceError::MissingOutput(_) => BridgeError::Execution(err.to_string()),
        }
    }
}

impl From<PreprocessError> for BridgeError {
    fn from(err: PreprocessError) -> Self {
        BridgeError::Execution(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_image_maps_to_decode_kind() {
        let err = BridgeError::from(EncodedImage::new(Vec::new()).unwrap_err());
        assert!(matches!(err, BridgeError::Decode(_)));
        assert_eq!(err.as_str(), "decode");
    }

    #[test]
    fn empty_model_maps_to_model_load_kind() {
        let err = BridgeError::from(EncodedModel::new(Vec::new()).unwrap_err());
        assert!(matches!(err, BridgeError::ModelLoad(_)));
        assert_eq!(err.as_str(), "model_load");
    }

    #[test]
    fn encode_failure_maps_to_encode_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "sink closed");
        let err = BridgeError::from(CodecError::Encode(image::ImageError::IoError(io)));
        assert!(matches!(err, BridgeError::Encode(_)));
        assert_eq!(err.as_str(), "encode");
    }

    #[test]
    fn shape_mismatch_maps_to_execution_kind() {
        let err = BridgeError::from(InferenceError::InvalidInputShape {
            expected: "(1, 3, H, W)".to_string(),
            actual: "[2, 3, 4, 4]".to_string(),
        });
        assert!(matches!(err, BridgeError::Execution(_)));
        assert_eq!(err.as_str(), "execution");
    }
}
