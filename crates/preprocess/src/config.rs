//! Preprocessing configuration

use serde::{Deserialize, Serialize};

/// Preprocessing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Model input canvas width (pixels)
    pub target_width: u32,

    /// Model input canvas height (pixels)
    pub target_height: u32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        // Depth Anything V2 input resolution
        Self {
            target_width: 518,
            target_height: 518,
        }
    }
}
