//! # bookshelf-settings
//!
//! Configuration loading for the bookshelf catalog utility.
//!
//! Settings come from three layers: compiled defaults, an optional
//! `bookshelf.json` in the working directory, and environment variable
//! overrides (highest priority).

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{load_settings, load_settings_from_path, settings_path};
pub use types::{DatabaseSettings, LoggingSettings, Settings};
