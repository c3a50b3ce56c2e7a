//! ONNX Depth Inference Engine
//!
//! Builds an ONNX Runtime session from an in-memory model artifact and runs
//! single-image depth estimation over it.

mod config;
mod engine;

pub use config::EngineConfig;
pub use engine::DepthEngine;

use thiserror::Error;

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoad(String),
    #[error("Inference failed: {0}")]
    Execution(String),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: String, actual: String },
    #[error("Output tensor {0:?} missing from session outputs")]
    MissingOutput(String),
}
