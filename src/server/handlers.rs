//! HTTP request handlers for the image-squeezer API.
//!
//! # Endpoints
//!
//! - `POST /upload` - Re-encode an uploaded image
//! - `GET /` - Client UI page

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::error::TranscodeError;
use crate::transcode::{
    ImageCodec, JpegCodec, QualityTier, TranscodeOutcome, TranscodeRequest, TranscodeService,
};

use super::routes::UPLOAD_PATH;
use super::ui::generate_ui_html;

/// Multipart field carrying the image file.
pub const IMAGE_FIELD: &str = "image";

/// Multipart field carrying the quality tier label.
pub const COMPRESSION_FIELD: &str = "compression";

/// `message` of every failure response.
pub const FAILURE_MESSAGE: &str = "Compression failed";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state containing the transcode service.
///
/// This is passed to all handlers via Axum's State extractor. It holds no
/// per-request data.
pub struct AppState<C: ImageCodec = JpegCodec> {
    /// The transcode service for processing uploads
    pub transcode_service: Arc<TranscodeService<C>>,
}

impl<C: ImageCodec> AppState<C> {
    pub fn new(transcode_service: TranscodeService<C>) -> Self {
        Self {
            transcode_service: Arc::new(transcode_service),
        }
    }
}

impl<C: ImageCodec> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            transcode_service: Arc::clone(&self.transcode_service),
        }
    }
}

// =============================================================================
// Request Parameters
// =============================================================================

/// Fields extracted from the upload's multipart body.
#[derive(Debug, Clone)]
pub struct UploadForm {
    /// Raw image bytes from the `image` field
    pub image: Bytes,

    /// Client-side filename of the image, if sent
    pub file_name: Option<String>,

    /// Raw `compression` label, if sent
    pub compression: Option<String>,
}

impl UploadForm {
    /// Read the form fields out of a multipart body.
    ///
    /// Unknown fields are skipped. A repeated `compression` field keeps the
    /// last value.
    ///
    /// # Errors
    ///
    /// - [`TranscodeError::MissingImage`] if no `image` field was sent
    /// - [`TranscodeError::DuplicateImage`] if more than one was sent
    /// - [`TranscodeError::Upload`] if the body is malformed or too large
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, TranscodeError> {
        let mut image: Option<Bytes> = None;
        let mut file_name: Option<String> = None;
        let mut compression: Option<String> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| TranscodeError::Upload(e.body_text()))?
        {
            let field_name = field.name().unwrap_or("").to_string();

            match field_name.as_str() {
                IMAGE_FIELD => {
                    if image.is_some() {
                        return Err(TranscodeError::DuplicateImage);
                    }
                    file_name = field.file_name().map(|s| s.to_string());
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| TranscodeError::Upload(e.body_text()))?;
                    image = Some(data);
                }
                COMPRESSION_FIELD => {
                    let label = field
                        .text()
                        .await
                        .map_err(|e| TranscodeError::Upload(e.body_text()))?;
                    compression = Some(label);
                }
                other => {
                    debug!(field = other, "Ignoring unknown form field");
                }
            }
        }

        let image = image.ok_or(TranscodeError::MissingImage)?;

        Ok(Self {
            image,
            file_name,
            compression,
        })
    }

    /// Tier requested by this form, with the lenient fallback applied.
    pub fn tier(&self) -> QualityTier {
        QualityTier::from_label(self.compression.as_deref())
    }

    pub fn into_request(self) -> TranscodeRequest {
        let tier = self.tier();
        TranscodeRequest {
            image: self.image,
            tier,
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON body of a successful upload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscodeResponse {
    /// Upload size in bytes
    pub original_size: usize,

    /// Re-encoded size in bytes
    pub compressed_size: usize,

    /// Re-encoded image as `data:image/jpeg;base64,...`
    pub compressed_image: String,
}

impl From<TranscodeOutcome> for TranscodeResponse {
    fn from(outcome: TranscodeOutcome) -> Self {
        Self {
            original_size: outcome.original_size,
            compressed_size: outcome.compressed_size,
            compressed_image: outcome.data_uri().to_string(),
        }
    }
}

/// JSON error response returned for all error conditions.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Fixed summary, always [`FAILURE_MESSAGE`]
    pub message: String,

    /// Underlying error text for diagnostics
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: error.into(),
        }
    }

    /// The standard failure body for a transcode error.
    pub fn compression_failed(err: &TranscodeError) -> Self {
        Self::new(FAILURE_MESSAGE, err.to_string())
    }
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert TranscodeError to HTTP response.
///
/// Client-input problems and codec failures are deliberately not told apart:
/// every variant becomes a 500 with the same body shape.
impl IntoResponse for TranscodeError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        error!(
            error_kind = self.kind(),
            status = status.as_u16(),
            "{}: {}",
            FAILURE_MESSAGE,
            self
        );

        (status, Json(ErrorResponse::compression_failed(&self))).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle image uploads.
///
/// # Endpoint
///
/// `POST /upload`
///
/// # Form Fields
///
/// - `image`: The image file (required, exactly one)
/// - `compression`: `low`, `medium` or `high` (optional, default `medium`;
///   unknown values are treated as `medium`)
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "originalSize": 1000000,
///   "compressedSize": 182734,
///   "compressedImage": "data:image/jpeg;base64,/9j/4AAQ..."
/// }
/// ```
///
/// # Errors
///
/// `500 Internal Server Error` for any failure, with JSON body:
/// ```json
/// { "message": "Compression failed", "error": "Failed to decode image: ..." }
/// ```
pub async fn upload_handler<C: ImageCodec>(
    State(state): State<AppState<C>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscodeResponse>, TranscodeError> {
    let multipart = multipart.map_err(|e| TranscodeError::Upload(e.body_text()))?;
    let form = UploadForm::from_multipart(multipart).await?;
    let file_name = form.file_name.clone();

    let outcome = state
        .transcode_service
        .transcode(form.into_request())
        .await?;

    info!(
        file_name = ?file_name,
        original_size = outcome.original_size,
        compressed_size = outcome.compressed_size,
        bytes_saved = outcome.bytes_saved(),
        quality = outcome.quality,
        "Compressed image"
    );

    Ok(Json(TranscodeResponse::from(outcome)))
}

/// Handle UI requests - serves the single-page upload client.
///
/// # Endpoint
///
/// `GET /`
pub async fn ui_handler() -> Html<String> {
    Html(generate_ui_html(UPLOAD_PATH, QualityTier::default()))
}

// =============================================================================
// Tests
// =============================================================================
