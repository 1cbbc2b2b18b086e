//! Shared test helpers.
//!
//! Builds a fully wired `App` over in-memory adapters and a scripted image
//! service, plus helpers for getting records into a given state.

pub mod image_mocks;

use std::sync::Arc;

use merchmagic_domain::{ImageData, MockupId, ProductTemplate, ProductType};

use crate::app::App;
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::ports::ImageGenPort;
use crate::infrastructure::preferences::InMemoryPreferenceStore;

/// Small catalog used by tests that do not care about the real products.
pub fn small_catalog() -> Vec<ProductTemplate> {
    vec![
        ProductTemplate::new(ProductType::Hoodie, "render a hoodie"),
        ProductTemplate::new(ProductType::Cap, "render a cap"),
    ]
}

pub fn logo() -> ImageData {
    ImageData::from_bytes("image/png", &image_mocks::test_png())
}

/// An `App` over in-memory preferences, a fixed clock and the given image service.
pub fn test_app(image_gen: Arc<dyn ImageGenPort>) -> App {
    let clock = chrono::DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
    App::builder(image_gen)
        .clock(Arc::new(FixedClock(clock)))
        .preferences(Arc::new(InMemoryPreferenceStore::new()))
        .concurrency(2)
        .catalog(small_catalog())
        .build()
}

/// Upload a logo and run one full batch to completion.
pub async fn run_batch(app: &App) -> Vec<MockupId> {
    app.entities.logo.set(logo());
    let _ = app.use_cases.suite.generate.execute().await;
    app.entities.mockups.snapshot().ids()
}
