//! Encoded image and model artifact value types

use crate::CodecError;
use image::ImageFormat;
use tracing::debug;

/// A complete raster image file held in memory.
///
/// Construction checks that the bytes are non-empty and that a standard
/// codec recognizes the container format. Full decodability is verified
/// when the pixels are actually needed, in [`crate::decode_rgb`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    format: ImageFormat,
}

impl EncodedImage {
    /// Wrap encoded image bytes, sniffing the container format
    pub fn new(bytes: Vec<u8>) -> Result<Self, CodecError> {
        if bytes.is_empty() {
            return Err(CodecError::EmptyImage);
        }
        let format = image::guess_format(&bytes).map_err(CodecError::Decode)?;
        debug!("Wrapped {} byte {:?} image", bytes.len(), format);
        Ok(Self { bytes, format })
    }

    /// Sniffed container format
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Borrow the encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encoded length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a constructed value, kept for API completeness
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the wrapper, returning the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// A serialized model artifact held in memory.
///
/// Immutable once constructed; callers may keep it alive across many
/// inference calls to avoid re-reading the artifact from storage. Whether
/// the bytes actually form a loadable model is decided by the execution
/// engine at session build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedModel {
    bytes: Vec<u8>,
}

impl EncodedModel {
    /// Wrap serialized model bytes
    pub fn new(bytes: Vec<u8>) -> Result<Self, CodecError> {
        if bytes.is_empty() {
            return Err(CodecError::EmptyModel);
        }
        debug!("Wrapped {} byte model artifact", bytes.len());
        Ok(Self { bytes })
    }

    /// Borrow the serialized bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Artifact length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a constructed value, kept for API completeness
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
