//! Logo slot - holds the uploaded source image for the session.

use merchmagic_domain::ImageData;
use std::sync::RwLock;

#[derive(Default)]
pub struct LogoSlot {
    image: RwLock<Option<ImageData>>,
}

impl LogoSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, image: ImageData) {
        match self.image.write() {
            Ok(mut guard) => *guard = Some(image),
            Err(e) => tracing::error!(error = %e, "Failed to acquire write lock for logo"),
        }
    }

    pub fn get(&self) -> Option<ImageData> {
        self.image.read().ok().and_then(|guard| guard.clone())
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.image.write() {
            *guard = None;
        }
    }

    pub fn is_set(&self) -> bool {
        self.image.read().map(|guard| guard.is_some()).unwrap_or(false)
    }
}
