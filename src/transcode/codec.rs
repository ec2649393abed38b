//! Image codec used to re-encode uploads.
//!
//! # Design Decisions
//!
//! - **Fixed target format**: every upload is decoded from whatever format it
//!   arrives in and re-encoded as baseline JPEG. An uploaded PNG comes back as
//!   a JPEG.
//!
//! - **No resizing**: images keep their native dimensions. Only the pixel
//!   layout is adjusted where the JPEG encoder demands it (alpha is dropped,
//!   16-bit and float samples are narrowed to 8-bit).
//!
//! - **Codec as a seam**: the transcode service talks to an [`ImageCodec`],
//!   so tests can substitute a recording codec and assert which quality a
//!   tier resolved to.

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageEncoder, ImageReader};
use std::io::Cursor;

use crate::error::TranscodeError;

/// Media type of everything [`JpegCodec`] produces.
pub const JPEG_MEDIA_TYPE: &str = "image/jpeg";

/// Minimum quality the JPEG encoder accepts.
pub const MIN_JPEG_QUALITY: u8 = 1;

/// Maximum quality the JPEG encoder accepts.
pub const MAX_JPEG_QUALITY: u8 = 100;

// =============================================================================
// Codec Trait
// =============================================================================

/// Decodes arbitrary image bytes and re-encodes them at a given quality.
///
/// Implementations must be pure over their inputs: the service calls them
/// concurrently from the blocking thread pool without any locking.
pub trait ImageCodec: Send + Sync + 'static {
    /// Media type of the encoded output (used for the data URI prefix).
    fn media_type(&self) -> &'static str;

    /// Decode `source` and re-encode it at `quality` (0-100 scale).
    fn transcode(&self, source: &[u8], quality: u8) -> Result<Bytes, TranscodeError>;
}

// =============================================================================
// JPEG Codec
// =============================================================================

/// JPEG re-encoder backed by the `image` crate.
///
/// Input format is sniffed from the content, so the upload's filename and
/// declared content type are irrelevant.
///
/// # Example
///
/// ```ignore
/// use image_squeezer::transcode::{ImageCodec, JpegCodec};
///
/// let codec = JpegCodec::new();
/// let png_bytes: Vec<u8> = /* ... */;
/// let jpeg = codec.transcode(&png_bytes, 70)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct JpegCodec {}

impl JpegCodec {
    pub fn new() -> Self {
        Self {}
    }

    /// Decode `source`, guessing its format from the leading bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::Decode`] if the format is not recognized or
    /// the data is corrupt.
    pub fn decode(&self, source: &[u8]) -> Result<DynamicImage, TranscodeError> {
        let reader = ImageReader::new(Cursor::new(source))
            .with_guessed_format()
            .map_err(|e| TranscodeError::Decode {
                message: e.to_string(),
            })?;

        reader.decode().map_err(|e| TranscodeError::Decode {
            message: e.to_string(),
        })
    }

    /// Encode an already decoded image as JPEG.
    pub fn encode(&self, img: DynamicImage, quality: u8) -> Result<Bytes, TranscodeError> {
        let quality = clamp_quality(quality);
        let img = into_jpeg_layout(img);

        let mut output = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut output, quality);

        encoder
            .write_image(img.as_bytes(), img.width(), img.height(), img.color().into())
            .map_err(|e| TranscodeError::Encode {
                message: e.to_string(),
            })?;

        Ok(Bytes::from(output))
    }
}

impl ImageCodec for JpegCodec {
    fn media_type(&self) -> &'static str {
        JPEG_MEDIA_TYPE
    }

    fn transcode(&self, source: &[u8], quality: u8) -> Result<Bytes, TranscodeError> {
        let img = self.decode(source)?;
        self.encode(img, quality)
    }
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Convert to a pixel layout the JPEG encoder accepts.
///
/// Gray stays gray, everything else becomes 8-bit RGB.
fn into_jpeg_layout(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::L8 | ColorType::Rgb8 => img,
        ColorType::La8 | ColorType::L16 | ColorType::La16 => {
            DynamicImage::ImageLuma8(img.to_luma8())
        }
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

/// Clamp quality to the encoder's accepted range.
///
/// The public scale is 0-100; the encoder treats 0 as invalid.
#[inline]
pub fn clamp_quality(quality: u8) -> u8 {
    quality.clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY)
}

// =============================================================================
// Tests
// =============================================================================
