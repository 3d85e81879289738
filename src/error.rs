use std::path::PathBuf;
use thiserror::Error;

/// Failures touching the backing JSON file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("read error at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("write error at {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid shortcut: {0}")]
    InvalidShortcut(String),
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("shortcut {name:?} has an empty path")]
    EmptyPath { name: String },

    #[error("failed to launch {name:?} ({path}): {source}")]
    Spawn {
        name: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("shortcut not found: {0}")]
    UnknownShortcut(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read error at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum DiagnosticsError {
    #[error("invalid log level {level:?}: {reason}")]
    Level { level: String, reason: String },

    #[error("cannot open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
