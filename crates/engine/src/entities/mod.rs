//! Entity modules - Session state owners.
//!
//! Each module owns one piece of mutable session state and exposes the only
//! interface through which use cases change it.

pub mod logo;
pub mod mockups;

pub use logo::LogoSlot;
pub use mockups::MockupStore;
