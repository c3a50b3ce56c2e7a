//! Depth engine implementation

use crate::{EngineConfig, InferenceError};
use image_codec::EncodedModel;
use ndarray::Array4;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use preprocess::DepthMap;
use tracing::{debug, info};

/// ONNX depth-estimation engine.
///
/// Holds the built session, so callers that keep an engine alive amortize
/// the model parse cost across calls. The engine reads nothing from disk or
/// network; the model artifact is consumed entirely from memory.
pub struct DepthEngine {
    session: Session,
    config: EngineConfig,
}

impl DepthEngine {
    /// Build a session from an in-memory model artifact
    pub fn load(model: &EncodedModel, config: EngineConfig) -> Result<Self, InferenceError> {
        info!("Building session from {} byte model artifact", model.len());

        let session = Session::builder()
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?
            .with_intra_threads(config.intra_threads)
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?
            .commit_from_memory(model.as_bytes())
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?;

        info!("Session ready, feeding input {:?}", config.input_name);
        Ok(Self { session, config })
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the model over a normalized NCHW input tensor and extract the
    /// predicted depth plane.
    pub fn run(&mut self, tensor: Array4<f32>) -> Result<DepthMap, InferenceError> {
        validate_input_shape(tensor.shape())?;
        let start = std::time::Instant::now();

        let input =
            Tensor::from_array(tensor).map_err(|e| InferenceError::Execution(e.to_string()))?;
        let outputs = self
            .session
            .run(ort::inputs![self.config.input_name.as_str() => input])
            .map_err(|e| InferenceError::Execution(e.to_string()))?;

        let value = outputs
            .get(self.config.output_name.as_str())
            .ok_or_else(|| InferenceError::MissingOutput(self.config.output_name.clone()))?;

        let prediction = value
            .try_extract_array::<f32>()
            .map_err(|e| InferenceError::Execution(e.to_string()))?;

        let (height, width) = plane_dims(prediction.shape())?;
        let data: Vec<f32> = prediction.iter().copied().collect();

        debug!(
            "Inference completed in {}ms, depth plane {}x{}",
            start.elapsed().as_millis(),
            width,
            height
        );

        DepthMap::new(data, width, height).map_err(|e| InferenceError::Execution(e.to_string()))
    }
}

/// Input must be a single-image NCHW tensor with three channels.
fn validate_input_shape(shape: &[usize]) -> Result<(), InferenceError> {
    let valid = shape.len() == 4 && shape[0] == 1 && shape[1] == 3 && shape[2] > 0 && shape[3] > 0;
    if !valid {
        return Err(InferenceError::InvalidInputShape {
            expected: "(1, 3, H, W)".to_string(),
            actual: format!("{shape:?}"),
        });
    }
    Ok(())
}

/// Interpret the output shape as a single depth plane: the last two axes are
/// (H, W) and every leading axis must be 1.
fn plane_dims(shape: &[usize]) -> Result<(u32, u32), InferenceError> {
    if shape.len() < 2 || shape[..shape.len() - 2].iter().any(|&d| d != 1) {
        return Err(InferenceError::Execution(format!(
            "unexpected output shape {shape:?}, want a single (H, W) plane"
        )));
    }
    let height = shape[shape.len() - 2];
    let width = shape[shape.len() - 1];
    Ok((height as u32, width as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_model_fails_to_load() {
        let model = EncodedModel::new(vec![0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        let result = DepthEngine::load(&model, EngineConfig::default());
        assert!(matches!(result, Err(InferenceError::ModelLoad(_))));
    }

    #[test]
    fn accepts_single_rgb_nchw_input() {
        assert!(validate_input_shape(&[1, 3, 518, 518]).is_ok());
        assert!(validate_input_shape(&[1, 3, 64, 128]).is_ok());
    }

    #[test]
    fn rejects_batched_or_non_rgb_input() {
        assert!(matches!(
            validate_input_shape(&[2, 3, 518, 518]),
            Err(InferenceError::InvalidInputShape { .. })
        ));
        assert!(matches!(
            validate_input_shape(&[1, 1, 518, 518]),
            Err(InferenceError::InvalidInputShape { .. })
        ));
        assert!(matches!(
            validate_input_shape(&[3, 518, 518]),
            Err(InferenceError::InvalidInputShape { .. })
        ));
        assert!(matches!(
            validate_input_shape(&[1, 3, 0, 518]),
            Err(InferenceError::InvalidInputShape { .. })
        ));
    }

    #[test]
    fn plane_dims_strips_unit_axes() {
        assert_eq!(plane_dims(&[1, 518, 518]).unwrap(), (518, 518));
        assert_eq!(plane_dims(&[1, 1, 240, 320]).unwrap(), (240, 320));
        assert_eq!(plane_dims(&[64, 48]).unwrap(), (64, 48));
    }

    #[test]
    fn plane_dims_rejects_real_batches() {
        assert!(plane_dims(&[2, 518, 518]).is_err());
        assert!(plane_dims(&[518]).is_err());
    }
}
