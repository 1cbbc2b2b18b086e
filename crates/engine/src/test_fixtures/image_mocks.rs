//! Mock image generation for testing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::image_mocks::GatedImageGen;
//!
//! #[tokio::test]
//! async fn holds_requests_until_released() {
//!     let image_gen = Arc::new(GatedImageGen::new());
//!     // ... start work that calls image_gen.generate()
//!     image_gen.release(3);
//! }
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Semaphore;

use merchmagic_domain::ImageData;

use crate::infrastructure::ports::{ImageGenError, ImageGenPort, ImageRequest, ImageResult};

/// A 2x2 opaque PNG with four distinct pixels.
pub fn test_png() -> Vec<u8> {
    let pixels = vec![
        255, 0, 0, 255, //
        0, 255, 0, 255, //
        0, 0, 255, 255, //
        255, 255, 255, 255,
    ];
    let img = image::RgbaImage::from_raw(2, 2, pixels).expect("2x2 RGBA buffer");
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .expect("encode test PNG");
    buf
}

/// Image generator whose calls block until the test releases them.
///
/// Tracks how many calls are in flight so tests can assert the concurrency bound.
/// Requests whose instruction has a scripted failure return that error once released.
pub struct GatedImageGen {
    gate: Semaphore,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    call_count: AtomicUsize,
    failures: Mutex<HashMap<String, ImageGenError>>,
    requests: Mutex<Vec<ImageRequest>>,
}

impl Default for GatedImageGen {
    fn default() -> Self {
        Self::new()
    }
}

impl GatedImageGen {
    pub fn new() -> Self {
        Self {
            gate: Semaphore::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            call_count: AtomicUsize::new(0),
            failures: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail requests with this exact instruction.
    pub fn fail_instruction(&self, instruction: impl Into<String>, error: ImageGenError) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.insert(instruction.into(), error);
        }
    }

    /// Let `n` pending or future calls complete.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ImageGenPort for GatedImageGen {
    async fn generate(&self, request: ImageRequest) -> Result<ImageResult, ImageGenError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let permit = self.gate.acquire().await;
        if let Ok(permit) = permit {
            permit.forget();
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let failure = self
            .failures
            .lock()
            .ok()
            .and_then(|f| f.get(&request.instruction).cloned());
        match failure {
            Some(error) => Err(error),
            None => Ok(ImageResult {
                image: ImageData::from_bytes("image/png", &test_png()),
            }),
        }
    }
}
