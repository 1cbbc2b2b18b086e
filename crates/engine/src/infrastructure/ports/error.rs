//! Error types for port operations.

use super::external::SafetyRating;

/// Shown when a refusal carries no category above the low-severity threshold.
pub const SAFETY_FALLBACK_MESSAGE: &str =
    "The content was flagged by safety filters. Try a more neutral prompt.";

/// Image service failures, already mapped to user-facing messages.
///
/// `Display` is the message shown to the user; `details()` is the optional
/// diagnostic line shown beneath it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageGenError {
    #[error("Rate limit exceeded. Please wait a moment before trying again.")]
    RateLimited,

    #[error("Invalid or missing API Key. Please check your configuration.")]
    InvalidCredential,

    #[error("The request was invalid. This could be due to an unsupported image format or an overly complex prompt.")]
    BadRequest,

    #[error("Access forbidden. This might be due to regional restrictions or API key permissions.")]
    Forbidden,

    #[error("The image service encountered an error. Please try again later.")]
    Upstream { status: u16 },

    /// Any other non-success status, carrying the service's own message.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{}", safety_message(.categories))]
    SafetyBlocked { categories: Vec<String> },

    #[error("The image service did not return any results.")]
    NoCandidates,

    #[error("The image service returned a response without an image. It might have only returned text feedback.")]
    NoImage,

    #[error("The AI was unable to generate an edited image from your prompt.")]
    NoEditedImage,

    #[error("Image service request failed: {0}")]
    Transport(String),

    #[error("Invalid response from image service: {0}")]
    InvalidResponse(String),
}

impl ImageGenError {
    /// Map a non-success HTTP status and the service's message to an error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            429 => Self::RateLimited,
            400 if references_credential(&message) => Self::InvalidCredential,
            400 => Self::BadRequest,
            403 => Self::Forbidden,
            s if s >= 500 => Self::Upstream { status: s },
            s => {
                let message = if message.trim().is_empty() {
                    format!("An unexpected error occurred (status {s}).")
                } else {
                    message
                };
                Self::Http { status: s, message }
            }
        }
    }

    /// HTTP status behind this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited => Some(429),
            Self::InvalidCredential | Self::BadRequest => Some(400),
            Self::Forbidden => Some(403),
            Self::Upstream { status } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Diagnostic line derived from the status code.
    pub fn details(&self) -> Option<String> {
        match self {
            Self::RateLimited => Some("HTTP 429: Too Many Requests".to_string()),
            Self::InvalidCredential | Self::BadRequest => Some("HTTP 400: Bad Request".to_string()),
            Self::Forbidden => Some("HTTP 403: Forbidden".to_string()),
            Self::Upstream { status } => Some(format!("HTTP {status}: Server Error")),
            Self::Http { status, .. } => Some(format!("API Status Code: {status}")),
            Self::Transport(msg) | Self::InvalidResponse(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    /// Reword failures for the edit flow, where a missing image means the
    /// instruction could not be applied.
    pub fn for_edit(self) -> Self {
        match self {
            Self::NoImage => Self::NoEditedImage,
            other => other,
        }
    }

    pub fn is_safety(&self) -> bool {
        matches!(self, Self::SafetyBlocked { .. })
    }

    pub fn safety_categories(&self) -> &[String] {
        match self {
            Self::SafetyBlocked { categories } => categories,
            _ => &[],
        }
    }
}

fn references_credential(message: &str) -> bool {
    message.contains("API_KEY") || message.contains("API key")
}

/// User-facing text for a safety refusal.
pub fn safety_message(categories: &[String]) -> String {
    if categories.is_empty() {
        SAFETY_FALLBACK_MESSAGE.to_string()
    } else {
        format!("Blocked due to potential issues: {}.", categories.join(", "))
    }
}

/// Readable names of the categories that actually triggered a refusal.
///
/// `NEGLIGIBLE` and `LOW` ratings are dropped. `HARM_CATEGORY_SEXUALLY_EXPLICIT`
/// becomes `Sexually explicit`.
pub fn safety_categories(ratings: &[SafetyRating]) -> Vec<String> {
    ratings
        .iter()
        .filter(|r| r.probability != "NEGLIGIBLE" && r.probability != "LOW")
        .map(|r| humanize_category(&r.category))
        .collect()
}

fn humanize_category(category: &str) -> String {
    let name = category
        .strip_prefix("HARM_CATEGORY_")
        .unwrap_or(category)
        .to_lowercase()
        .replace('_', " ");
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}
