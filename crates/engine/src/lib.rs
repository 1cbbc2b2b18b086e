//! MerchMagic Engine library.
//!
//! This crate contains all server-side code for the MerchMagic mockup engine.
//!
//! ## Structure
//!
//! - `entities/` - Shared state owned by the app (record table, logo)
//! - `use_cases/` - User story orchestration across entities
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// Shared fixtures for unit and router tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
