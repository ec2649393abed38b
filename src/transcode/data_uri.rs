//! Inline `data:` URIs for encoded images.
//!
//! The compressed image is returned to the browser as
//! `data:<media-type>;base64,<payload>`, which can be used directly as an
//! `<img src>` or a download `href`. Payloads use the standard base64
//! alphabet with padding.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose, Engine as _};
use bytes::Bytes;

use crate::error::DataUriError;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A base64 data URI holding binary content and its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    media_type: String,
    data: Bytes,
}

impl DataUri {
    pub fn new(media_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Byte length of the decoded payload.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            SCHEME,
            self.media_type,
            BASE64_MARKER,
            general_purpose::STANDARD.encode(&self.data)
        )
    }
}

impl FromStr for DataUri {
    type Err = DataUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix(SCHEME).ok_or(DataUriError::MissingScheme)?;
        let (media_type, payload) = rest
            .split_once(BASE64_MARKER)
            .ok_or(DataUriError::MissingBase64Marker)?;

        let data = general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| DataUriError::InvalidBase64(e.to_string()))?;

        Ok(DataUri::new(media_type, data))
    }
}
