//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus the
//! local image and archive codecs used by export.

pub mod archive;
pub mod clock;
pub mod config;
pub mod gemini;
pub mod imaging;
pub mod ports;
pub mod preferences;
