use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Location of the persisted shortcut list
    #[serde(default = "default_shortcuts_path")]
    pub shortcuts_path: PathBuf,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// Log file, truncated on start. `None` logs to stderr.
    #[serde(default = "default_log_file")]
    pub file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive, e.g. "info" or "deck_shortcuts_lib=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shortcuts_path: default_shortcuts_path(),
            log: LogSettings::default(),
        }
    }
}

fn default_shortcuts_path() -> PathBuf {
    Settings::config_dir().join("shortcuts.json")
}

fn default_log_file() -> Option<PathBuf> {
    Some(std::env::temp_dir().join("shortcuts.log"))
}

fn default_log_level() -> String {
    "info".into()
}

impl Settings {
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".deck-shortcuts")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Read `~/.deck-shortcuts/config.json`, writing defaults on first run.
    /// A broken file falls back to defaults.
    pub fn load_or_default() -> Self {
        let path = Self::config_path();
        if path.exists() {
            return Self::load_from(&path).unwrap_or_default();
        }

        let settings = Self::default();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(
            &path,
            serde_json::to_string_pretty(&settings).unwrap_or_default(),
        );
        settings
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
