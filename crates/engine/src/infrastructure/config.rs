//! Engine configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

/// Number of image requests a batch keeps in flight.
pub const DEFAULT_GENERATION_CONCURRENCY: usize = 2;
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_SERVER_PORT: u16 = 3000;
/// Request body cap. Logos and backgrounds arrive as base64 data URIs.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    /// Always at least 1.
    pub generation_concurrency: usize,
    pub image_timeout: Duration,
    pub server_host: String,
    pub server_port: u16,
    pub max_upload_bytes: usize,
    /// `None` uses the platform config directory.
    pub preferences_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            generation_concurrency: DEFAULT_GENERATION_CONCURRENCY,
            image_timeout: Duration::from_secs(DEFAULT_IMAGE_TIMEOUT_SECS),
            server_host: "0.0.0.0".to_string(),
            server_port: DEFAULT_SERVER_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            preferences_path: None,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as unset. Unparseable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let gemini_api_key = get("GEMINI_API_KEY").or_else(|| get("API_KEY"));
        if gemini_api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set; image requests will be rejected");
        }

        let generation_concurrency = get("GENERATION_CONCURRENCY")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_GENERATION_CONCURRENCY)
            .max(1);

        let image_timeout = get("IMAGE_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.image_timeout);

        let server_port = get("SERVER_PORT")
            .or_else(|| get("PORT"))
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);

        let max_upload_bytes = get("MAX_UPLOAD_BYTES")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            gemini_api_key: gemini_api_key.unwrap_or_default(),
            gemini_base_url: get("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            generation_concurrency,
            image_timeout,
            server_host: get("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            max_upload_bytes,
            preferences_path: get("PREFERENCES_PATH").map(PathBuf::from),
        }
    }
}
