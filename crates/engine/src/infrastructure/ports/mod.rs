//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Image generation (could swap Gemini -> other)
//! - Preference storage (file, in-memory)
//! - Clock (for testing)

mod error;
mod external;
mod testing;

pub use error::{safety_categories, safety_message, ImageGenError, SAFETY_FALLBACK_MESSAGE};
pub use external::{
    ImageGenPort, ImageRequest, ImageResult, PreferenceStore, SafetyRating, DEFAULT_ASPECT_RATIO,
};
pub use testing::ClockPort;

#[cfg(test)]
pub use external::{MockImageGenPort, MockPreferenceStore};
#[cfg(test)]
pub use testing::MockClockPort;
