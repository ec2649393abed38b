//! Transcode service: the single upload-and-re-encode operation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    TranscodeService                      │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │                  transcode()                       │  │
//! │  │  1. Resolve tier → quality   3. Measure sizes      │  │
//! │  │  2. Re-encode (blocking)     4. Return outcome     │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                          │                               │
//! │                          ▼                               │
//! │                  ┌───────────────┐                       │
//! │                  │  ImageCodec   │                       │
//! │                  └───────────────┘                       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The service is stateless. Each call owns its input buffer, runs the codec
//! on tokio's blocking pool, and drops everything once the outcome has been
//! turned into a response.

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use crate::error::TranscodeError;

use super::codec::{ImageCodec, JpegCodec};
use super::data_uri::DataUri;
use super::quality::QualityTier;

// =============================================================================
// Transcode Request
// =============================================================================

/// Raw upload plus the tier it should be compressed at.
#[derive(Debug, Clone)]
pub struct TranscodeRequest {
    /// Uploaded image bytes, in any format the codec can decode
    pub image: Bytes,

    /// Requested compression tier
    pub tier: QualityTier,
}

impl TranscodeRequest {
    /// Create a request at the default tier.
    pub fn new(image: impl Into<Bytes>) -> Self {
        Self {
            image: image.into(),
            tier: QualityTier::default(),
        }
    }

    /// Create a request from an optional form label, falling back leniently.
    pub fn with_label(image: impl Into<Bytes>, label: Option<&str>) -> Self {
        Self {
            image: image.into(),
            tier: QualityTier::from_label(label),
        }
    }
}

// =============================================================================
// Transcode Outcome
// =============================================================================

/// Result of a successful transcode.
#[derive(Debug, Clone)]
pub struct TranscodeOutcome {
    /// Size of the upload in bytes
    pub original_size: usize,

    /// Size of the re-encoded image in bytes
    pub compressed_size: usize,

    /// Codec quality that was applied
    pub quality: u8,

    /// Media type of `data`
    pub media_type: &'static str,

    /// Re-encoded image
    pub data: Bytes,
}

impl TranscodeOutcome {
    /// The compressed image as an inline data URI.
    pub fn data_uri(&self) -> DataUri {
        DataUri::new(self.media_type, self.data.clone())
    }

    /// Bytes saved relative to the original; negative if the output grew.
    pub fn bytes_saved(&self) -> i64 {
        self.original_size as i64 - self.compressed_size as i64
    }
}

// =============================================================================
// Transcode Service
// =============================================================================

/// Re-encodes uploaded images through an [`ImageCodec`].
pub struct TranscodeService<C: ImageCodec = JpegCodec> {
    codec: Arc<C>,
}

impl TranscodeService<JpegCodec> {
    /// Create a service backed by the JPEG codec.
    pub fn new() -> Self {
        Self::with_codec(JpegCodec::new())
    }
}

impl Default for TranscodeService<JpegCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ImageCodec> TranscodeService<C> {
    /// Create a service backed by a custom codec.
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec: Arc::new(codec),
        }
    }

    pub fn codec(&self) -> &Arc<C> {
        &self.codec
    }

    /// Decode the upload and re-encode it at the tier's quality.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The upload is not a decodable image
    /// - Encoding fails
    /// - The blocking codec task panics
    pub async fn transcode(
        &self,
        request: TranscodeRequest,
    ) -> Result<TranscodeOutcome, TranscodeError> {
        let quality = request.tier.quality();
        let original_size = request.image.len();

        debug!(
            original_size = original_size,
            tier = %request.tier,
            quality = quality,
            "Transcoding upload"
        );

        let codec = Arc::clone(&self.codec);
        let image = request.image;
        let data = tokio::task::spawn_blocking(move || codec.transcode(&image, quality))
            .await
            .map_err(|e| TranscodeError::Task(e.to_string()))??;

        Ok(TranscodeOutcome {
            original_size,
            compressed_size: data.len(),
            quality,
            media_type: self.codec.media_type(),
            data,
        })
    }
}

impl<C: ImageCodec> Clone for TranscodeService<C> {
    fn clone(&self) -> Self {
        Self {
            codec: Arc::clone(&self.codec),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
