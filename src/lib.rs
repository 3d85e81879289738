mod api;
mod config;
mod diagnostics;
mod error;
mod launcher;
mod model;
mod persist;
mod shortcuts;
#[cfg(feature = "tauri-plugin")]
mod commands;

pub use api::Registry;
pub use config::{LogSettings, Settings};
pub use diagnostics::Diagnostics;
pub use error::{ConfigError, DiagnosticsError, LaunchError, StoreError};
pub use launcher::{LaunchGateway, LaunchReceipt, ProcessHost, SystemHost};
pub use model::Shortcut;
pub use shortcuts::{ShortcutStore, read_shortcuts};

#[cfg(feature = "tauri-plugin")]
pub use commands::init as tauri_plugin;
