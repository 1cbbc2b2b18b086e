//! Deterministic file names for exported renders

use chrono::{DateTime, Utc};

use super::product::ProductType;
use crate::ids::MockupId;

pub const ARCHIVE_PREFIX: &str = "merchmagic-suite";
pub const ITEM_EXPORT_PREFIX: &str = "merchmagic";

/// Name of one render inside the batch archive: `<slug>-<id suffix>.png`.
pub fn archive_entry_name(product: ProductType, id: MockupId) -> String {
    format!("{}-{}.png", product.file_slug(), id.short_suffix())
}

/// Name of the batch archive: `merchmagic-suite-<unix millis>.zip`.
pub fn archive_file_name(at: DateTime<Utc>) -> String {
    format!("{}-{}.zip", ARCHIVE_PREFIX, at.timestamp_millis())
}

/// Name of a single exported render: `merchmagic-<slug>-<unix millis>.png`.
pub fn item_export_file_name(product: ProductType, at: DateTime<Utc>) -> String {
    format!(
        "{}-{}-{}.png",
        ITEM_EXPORT_PREFIX,
        product.file_slug(),
        at.timestamp_millis()
    )
}
