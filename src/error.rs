use thiserror::Error;

/// Errors that can occur while handling an upload and re-encoding it.
///
/// The taxonomy is intentionally flat at the HTTP boundary: every variant is
/// reported to the client as the same 500 failure shape.
#[derive(Debug, Clone, Error)]
pub enum TranscodeError {
    /// The multipart body had no `image` field
    #[error("No image file provided (expected multipart field 'image')")]
    MissingImage,

    /// The multipart body had more than one `image` field
    #[error("Expected exactly one image file, got more than one 'image' field")]
    DuplicateImage,

    /// The request body could not be read as multipart form data
    #[error("Failed to read upload: {0}")]
    Upload(String),

    /// The uploaded bytes could not be decoded as an image
    #[error("Failed to decode image: {message}")]
    Decode { message: String },

    /// The decoded image could not be re-encoded
    #[error("Failed to encode image: {message}")]
    Encode { message: String },

    /// The blocking codec task panicked or was cancelled
    #[error("Codec task failed: {0}")]
    Task(String),
}

impl TranscodeError {
    /// Short identifier used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            TranscodeError::MissingImage => "missing_image",
            TranscodeError::DuplicateImage => "duplicate_image",
            TranscodeError::Upload(_) => "upload_error",
            TranscodeError::Decode { .. } => "decode_error",
            TranscodeError::Encode { .. } => "encode_error",
            TranscodeError::Task(_) => "task_error",
        }
    }
}

/// Errors from parsing a `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUriError {
    /// String does not start with `data:`
    #[error("Not a data URI: missing 'data:' scheme")]
    MissingScheme,

    /// Only base64 data URIs are supported
    #[error("Data URI is not base64-encoded: missing ';base64,' marker")]
    MissingBase64Marker,

    /// Payload is not valid base64
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),
}
