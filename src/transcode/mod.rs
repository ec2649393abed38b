//! Transcode layer.
//!
//! Maps quality tiers to codec quality, re-encodes uploads and packages the
//! result as an inline data URI.
//!
//! # Components
//!
//! - [`QualityTier`]: Coarse compression level with its fixed quality table
//! - [`ImageCodec`]: Seam for the external image codec
//! - [`JpegCodec`]: Decodes any supported format and re-encodes as JPEG
//! - [`DataUri`]: `data:<media>;base64,<payload>` formatting and parsing
//! - [`TranscodeService`]: Runs one upload through the codec
//!
//! # Example
//!
//! ```no_run
//! use image_squeezer::transcode::{TranscodeRequest, TranscodeService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = TranscodeService::new();
//!     let upload = std::fs::read("photo.png").unwrap();
//!
//!     let outcome = service
//!         .transcode(TranscodeRequest::with_label(upload, Some("high")))
//!         .await
//!         .unwrap();
//!
//!     println!(
//!         "{} -> {} bytes at quality {}",
//!         outcome.original_size, outcome.compressed_size, outcome.quality
//!     );
//! }
//! ```

mod codec;
mod data_uri;
mod quality;
mod service;

pub use codec::{
    clamp_quality, ImageCodec, JpegCodec, JPEG_MEDIA_TYPE, MAX_JPEG_QUALITY, MIN_JPEG_QUALITY,
};
pub use data_uri::DataUri;
pub use quality::{
    resolve_quality, QualityTier, DEFAULT_QUALITY, HIGH_QUALITY, LOW_QUALITY, MEDIUM_QUALITY,
};
pub use service::{TranscodeOutcome, TranscodeRequest, TranscodeService};
