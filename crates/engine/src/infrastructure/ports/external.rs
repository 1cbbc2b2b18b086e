//! External service ports: image generation and preference storage.

use async_trait::async_trait;
use merchmagic_domain::ImageData;

use super::error::ImageGenError;

// =============================================================================
// Image Generation
// =============================================================================

/// Square output, matching the product cards.
pub const DEFAULT_ASPECT_RATIO: &str = "1:1";

/// One call to the image service.
///
/// The primary image is always sent first, then the instruction, then the
/// optional reference image (e.g. an uploaded background).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub source: ImageData,
    pub instruction: String,
    pub reference: Option<ImageData>,
    pub aspect_ratio: Option<String>,
}

impl ImageRequest {
    pub fn new(source: ImageData, instruction: impl Into<String>) -> Self {
        Self {
            source,
            instruction: instruction.into(),
            reference: None,
            aspect_ratio: Some(DEFAULT_ASPECT_RATIO.to_string()),
        }
    }

    pub fn with_reference(mut self, reference: ImageData) -> Self {
        self.reference = Some(reference);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageResult {
    pub image: ImageData,
}

/// Per-category severity reported with a safety refusal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyRating {
    pub category: String,
    pub probability: String,
}

impl SafetyRating {
    pub fn new(category: impl Into<String>, probability: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            probability: probability.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenPort: Send + Sync {
    async fn generate(&self, request: ImageRequest) -> Result<ImageResult, ImageGenError>;
}

// =============================================================================
// Preference Storage
// =============================================================================

/// Small string key/value store for user display preferences.
///
/// Write failures are logged by the implementation, never surfaced.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    /// Load a value by key, `None` if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Save a value under the given key
    fn save(&self, key: &str, value: &str);

    /// Remove a value by key
    fn remove(&self, key: &str);
}
