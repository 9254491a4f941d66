//! Configuration types.
//!
//! Configuration lives in a single `config.toml` under the platform config
//! directory. A missing file falls back to defaults; a malformed one is an
//! error the caller decides how to surface.

use crate::error::ConfigError;
use crate::metrics::WindowMetrics;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Panel configuration loaded from config.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Placeholder text shown while the term is empty.
    pub placeholder: String,

    /// Window sizing metrics.
    pub window: WindowMetrics,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            placeholder: "Search...".to_string(),
            window: WindowMetrics::default(),
        }
    }
}

impl PanelConfig {
    /// Load configuration from the default path, or defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Err(ConfigError::NoConfigDir),
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("glint"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> std::io::Result<()> {
    if let Some(dir) = config_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PanelConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.placeholder, "Search...");
        assert_eq!(config.window.max_visible_rows, 5);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "placeholder = \"Run...\"").unwrap();
        writeln!(file, "[window]").unwrap();
        writeln!(file, "width = 720.0").unwrap();

        let config = PanelConfig::load_from(&path).unwrap();
        assert_eq!(config.placeholder, "Run...");
        assert_eq!(config.window.width, 720.0);
        assert_eq!(config.window.input_height, 64.0);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "placeholder = [oops").unwrap();

        match PanelConfig::load_from(&path) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
