//! FlowKit Settings Crate
//!
//! Handles editor configuration and its persistence as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, EditorSettings, LoggingSettings};
pub use error::{SettingsError, SettingsResult};
