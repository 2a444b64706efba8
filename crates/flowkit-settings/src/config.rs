//! Editor configuration.
//!
//! The configuration is grouped into editor, canvas, and logging sections
//! and stored as JSON or TOML depending on the file extension.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Interaction and history settings for the designer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Maximum pointer distance that snaps to a connection point
    pub detection_radius: f64,
    /// Number of undo steps kept before the oldest is dropped
    pub max_history_depth: usize,
    /// Width of shapes placed with a single click
    pub default_shape_width: f64,
    /// Height of shapes placed with a single click
    pub default_shape_height: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            detection_radius: 10.0,
            max_history_depth: 100,
            default_shape_width: 100.0,
            default_shape_height: 50.0,
        }
    }
}

/// Drawing area dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Option<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Some(Format::Json),
        Some("toml") => Some(Format::Toml),
        _ => None,
    }
}

impl Config {
    /// Create default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file in the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flowkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path).ok_or_else(|| {
            SettingsError::LoadError("Config file must be .json or .toml".to_string())
        })?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path) {
            Some(Format::Json) => serde_json::to_string_pretty(self)?,
            Some(Format::Toml) => toml::to_string_pretty(self)?,
            None => {
                return Err(SettingsError::SaveError(
                    "Config file must be .json or .toml".to_string(),
                ))
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the default path, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default() -> SettingsResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate all sections
    pub fn validate(&self) -> SettingsResult<()> {
        let editor = &self.editor;
        if !(editor.detection_radius.is_finite() && editor.detection_radius > 0.0) {
            return Err(SettingsError::invalid(
                "editor.detection_radius",
                "must be a positive number",
            ));
        }
        if editor.max_history_depth == 0 {
            return Err(SettingsError::invalid(
                "editor.max_history_depth",
                "must be at least 1",
            ));
        }
        if !(editor.default_shape_width > 0.0 && editor.default_shape_height > 0.0) {
            return Err(SettingsError::invalid(
                "editor.default_shape_width",
                "default shape extent must be positive",
            ));
        }
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(SettingsError::invalid(
                "canvas.width",
                "canvas dimensions must be positive",
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::invalid("logging.level", "cannot be empty"));
        }
        Ok(())
    }
}
