//! Platform-independent state for the landing page controllers.
//!
//! Every controller on the page (counters, headline rotator, navbar, parcel map
//! and contact form) keeps its state here, behind small port traits that the
//! browser layer implements over real DOM elements. Nothing in this crate
//! touches the browser, so the behavior is exercised with plain `cargo test`.

pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod model;

pub use catalog::{parcel_by_id, PARCEL_CATALOG};
pub use config::PageConfig;
pub use error::LandingError;
