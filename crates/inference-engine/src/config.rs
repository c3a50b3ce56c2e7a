//! Engine configuration

use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Name of the model's image input tensor
    pub input_name: String,

    /// Name of the model's depth output tensor
    pub output_name: String,

    /// Intra-op thread count for the session
    pub intra_threads: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        // Tensor names of the Depth Anything V2 ONNX export
        Self {
            input_name: "pixel_values".to_string(),
            output_name: "predicted_depth".to_string(),
            intra_threads: 4,
        }
    }
}
