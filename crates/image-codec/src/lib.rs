//! Typed byte boundary for encoded images and model artifacts
//!
//! Widens the raw byte-array boundary into tagged value types so format
//! mismatches are caught at construction rather than deep inside the
//! inference pipeline.

pub mod codec;
pub mod encoded;

pub use codec::{decode_rgb, encode_gray_png};
pub use encoded::{EncodedImage, EncodedModel};

use thiserror::Error;

/// Errors raised at the encoded byte boundary
#[derive(Debug, Error)]
pub enum CodecError {
    /// Image byte sequence was empty
    #[error("image byte sequence is empty")]
    EmptyImage,

    /// Model byte sequence was empty
    #[error("model byte sequence is empty")]
    EmptyModel,

    /// Bytes could not be parsed by the image codec
    #[error("image decode failed: {0}")]
    Decode(image::ImageError),

    /// Result image could not be serialized
    #[error("image encode failed: {0}")]
    Encode(image::ImageError),
}
