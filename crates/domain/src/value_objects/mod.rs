//! Value objects - immutable domain types without identity

mod export_naming;
mod image_data;
mod presets;
mod product;
mod theme;
mod view;

pub use export_naming::{
    archive_entry_name, archive_file_name, item_export_file_name, ARCHIVE_PREFIX,
    ITEM_EXPORT_PREFIX,
};
pub use image_data::{ImageData, DEFAULT_MIME_TYPE};
pub use presets::{
    all_presets, find_preset, EditPreset, PresetGroup, BACKGROUND_PRESETS,
    CUSTOM_BACKGROUND_INSTRUCTION, LIGHTING_PRESETS, QUICK_STYLE_PRESETS, ROTATION_PRESETS,
};
pub use product::{product_catalog, ProductTemplate, ProductType};
pub use theme::{Theme, THEME_PREFERENCE_KEY};
pub use view::{
    FilterOp, FilterPreset, PanOffset, ViewTransform, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};
