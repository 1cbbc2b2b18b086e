//! MerchMagic domain.
//!
//! Mockup records and their status machine, the product catalog, edit presets,
//! local view transforms, and export naming. No I/O lives here.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Mockup, MockupStatus, MockupSuite, SuiteStats};
pub use error::DomainError;
pub use ids::{BatchId, MockupId};
pub use value_objects::{
    all_presets, archive_entry_name, archive_file_name, find_preset, item_export_file_name,
    product_catalog, EditPreset, FilterOp, FilterPreset, ImageData, PanOffset, PresetGroup,
    ProductTemplate, ProductType, Theme, ViewTransform, CUSTOM_BACKGROUND_INSTRUCTION,
    DEFAULT_MIME_TYPE, THEME_PREFERENCE_KEY,
};
