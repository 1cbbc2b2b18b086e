//! Self-contained image payloads
//!
//! Images travel through the system as base64 text so that a render can be
//! stored on a record as a data URI and handed back to the image service
//! without touching the filesystem.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// MIME type assumed when a payload arrives without a data URI header.
pub const DEFAULT_MIME_TYPE: &str = "image/png";

/// A base64-encoded image with its MIME type.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    mime_type: String,
    base64: String,
}

impl ImageData {
    /// Build from raw image bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            base64: STANDARD.encode(bytes),
        }
    }

    /// Build from an already-encoded base64 payload.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the payload is empty or not valid base64.
    pub fn from_base64(
        mime_type: impl Into<String>,
        payload: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let payload = payload.into().trim().to_string();
        if payload.is_empty() {
            return Err(DomainError::validation("Image payload cannot be empty"));
        }
        STANDARD
            .decode(payload.as_bytes())
            .map_err(|e| DomainError::validation(format!("Image payload is not valid base64: {e}")))?;
        Ok(Self {
            mime_type: mime_type.into(),
            base64: payload,
        })
    }

    /// Parse a `data:<mime>;base64,<payload>` URI.
    ///
    /// Bare base64 is accepted too: the payload is whatever follows the first
    /// comma, or the whole string when there is none.
    pub fn from_data_uri(input: &str) -> Result<Self, DomainError> {
        let input = input.trim();
        match input.split_once(',') {
            Some((header, payload)) => {
                let mime_type = header
                    .strip_prefix("data:")
                    .and_then(|rest| rest.split(';').next())
                    .filter(|mime| !mime.is_empty())
                    .unwrap_or(DEFAULT_MIME_TYPE);
                Self::from_base64(mime_type, payload)
            }
            None => Self::from_base64(DEFAULT_MIME_TYPE, input),
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn base64(&self) -> &str {
        &self.base64
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }

    /// Decode the payload back to raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, DomainError> {
        STANDARD
            .decode(self.base64.as_bytes())
            .map_err(|e| DomainError::validation(format!("Image payload is not valid base64: {e}")))
    }
}

// Payloads are large; keep them out of debug output and logs.
impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("mime_type", &self.mime_type)
            .field("len", &self.base64.len())
            .finish()
    }
}
