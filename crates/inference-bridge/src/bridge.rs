//! The inference boundary facade

use crate::BridgeError;
use image_codec::{EncodedImage, EncodedModel};
use inference_engine::{DepthEngine, EngineConfig};
use preprocess::PreprocessConfig;
use tracing::{debug, info};

/// Capability trait for an in-process inference engine: one synchronous
/// call from encoded image plus model artifact to encoded result image.
///
/// [`InferenceBridge`] is the single production implementation; the trait
/// exists so callers can substitute an engine without any dynamic loading.
pub trait InferenceBackend {
    /// Run the model-defined transformation
    fn infer(
        &self,
        image: &EncodedImage,
        model: &EncodedModel,
    ) -> Result<EncodedImage, BridgeError>;
}

/// Synchronous, stateless depth-inference boundary.
///
/// Each call decodes the image, letterboxes it onto the model input canvas,
/// runs the session, and encodes the normalized depth plane as PNG. The
/// call is blocking; keeping it off a latency-critical thread is caller
/// policy. No reference to either input is retained after return, and no
/// partial result is ever produced.
#[derive(Debug, Clone)]
pub struct InferenceBridge {
    preprocess: PreprocessConfig,
    engine: EngineConfig,
}

impl InferenceBridge {
    /// Bridge with the default Depth Anything V2 configuration
    pub fn new() -> Self {
        Self {
            preprocess: PreprocessConfig::default(),
            engine: EngineConfig::default(),
        }
    }

    /// Bridge with explicit preprocessing and engine configuration
    pub fn with_config(preprocess: PreprocessConfig, engine: EngineConfig) -> Self {
        Self { preprocess, engine }
    }

    /// Preprocessing configuration
    pub fn preprocess_config(&self) -> &PreprocessConfig {
        &self.preprocess
    }

    /// Engine configuration
    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine
    }

    /// Run depth inference: encoded image + model artifact in, encoded
    /// grayscale depth image out.
    pub fn infer(
        &self,
        image: &EncodedImage,
        model: &EncodedModel,
    ) -> Result<EncodedImage, BridgeError> {
        info!(
            "Inference started ({} image bytes, {} model bytes)",
            image.len(),
            model.len()
        );

        let rgb = image_codec::decode_rgb(image)?;
        let canvas = preprocess::letterbox(
            &rgb,
            self.preprocess.target_width,
            self.preprocess.target_height,
        )?;
        let tensor = preprocess::to_nchw_tensor(&canvas);

        let mut engine = DepthEngine::load(model, self.engine.clone())?;
        let depth = engine.run(tensor)?;

        debug!(
            "Encoding {}x{} depth plane",
            depth.width(),
            depth.height()
        );
        let encoded = image_codec::encode_gray_png(&depth.to_gray())?;

        info!("Inference completed ({} result bytes)", encoded.len());
        Ok(encoded)
    }
}

impl Default for InferenceBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl InferenceBackend for InferenceBridge {
    fn infer(
        &self,
        image: &EncodedImage,
        model: &EncodedModel,
    ) -> Result<EncodedImage, BridgeError> {
        InferenceBridge::infer(self, image, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn png_fixture(width: u32, height: u32) -> EncodedImage {
        let img = RgbImage::from_pixel(width, height, image::Rgb([10, 120, 250]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        EncodedImage::new(bytes).unwrap()
    }

    #[test]
    fn invalid_model_bytes_fail_with_model_load() {
        let bridge = InferenceBridge::new();
        let image = png_fixture(32, 24);
        let model = EncodedModel::new(vec![0x00, 0x11, 0x22, 0x33]).unwrap();

        let err = bridge.infer(&image, &model).unwrap_err();
        assert!(matches!(err, BridgeError::ModelLoad(_)));
    }

    #[test]
    fn truncated_image_fails_with_decode() {
        let bridge = InferenceBridge::new();
        // PNG signature with nothing behind it decodes to an error, not pixels
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&[0u8; 16]);
        let image = EncodedImage::new(bytes).unwrap();
        let model = EncodedModel::new(vec![1u8; 8]).unwrap();

        let err = bridge.infer(&image, &model).unwrap_err();
        assert!(matches!(err, BridgeError::Decode(_)));
    }

    #[test]
    fn trait_object_dispatch_matches_inherent_call() {
        let bridge = InferenceBridge::new();
        let backend: &dyn InferenceBackend = &bridge;
        let image = png_fixture(8, 8);
        let model = EncodedModel::new(vec![0xFF; 4]).unwrap();

        let via_trait = backend.infer(&image, &model).unwrap_err();
        let via_inherent = bridge.infer(&image, &model).unwrap_err();
        assert_eq!(via_trait.as_str(), via_inherent.as_str());
    }

    #[test]
    fn default_configuration_targets_model_input() {
        let bridge = InferenceBridge::default();
        assert_eq!(bridge.preprocess_config().target_width, 518);
        assert_eq!(bridge.engine_config().input_name, "pixel_values");
    }
}
