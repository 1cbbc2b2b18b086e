//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area of the app.
//! Use cases orchestrate across entity modules and ports.

pub mod editor;
pub mod export;
pub mod preferences;
pub mod suite;

pub use editor::EditorUseCases;
pub use export::ExportUseCases;
pub use preferences::PreferenceUseCases;
pub use suite::SuiteUseCases;
