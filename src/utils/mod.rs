//! Utility functions and data structures.
//!
//! - [`app_data`] - Per-user configuration in the app data directory (XDG-compliant)

pub mod app_data;

pub use app_data::*;
