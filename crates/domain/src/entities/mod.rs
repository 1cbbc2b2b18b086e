//! Domain entities - Core business objects with identity

mod mockup;
mod suite;

pub use mockup::{Mockup, MockupStatus};
pub use suite::{MockupSuite, SuiteStats};
