//! Front-end facing surface: one store plus one launch gateway.

use crate::config::Settings;
use crate::diagnostics::Diagnostics;
use crate::error::{LaunchError, StoreError};
use crate::launcher::{LaunchGateway, LaunchReceipt};
use crate::model::Shortcut;
use crate::shortcuts::ShortcutStore;

pub struct Registry {
    store: ShortcutStore,
    gateway: LaunchGateway,
}

impl Registry {
    pub fn new(store: ShortcutStore, gateway: LaunchGateway) -> Self {
        Self { store, gateway }
    }

    /// Load the configured shortcut file and launch through the OS.
    pub fn open(settings: &Settings, diagnostics: Diagnostics) -> Self {
        let store = ShortcutStore::open(&settings.shortcuts_path, diagnostics.clone());
        let gateway = LaunchGateway::system(diagnostics);
        Self::new(store, gateway)
    }

    pub fn store(&self) -> &ShortcutStore {
        &self.store
    }

    pub fn get_shortcuts(&self) -> Vec<Shortcut> {
        self.store.get_all()
    }

    /// Merge `new_list` into the stored shortcuts and return the result.
    pub fn set_shortcuts(&self, new_list: Vec<Shortcut>) -> Result<Vec<Shortcut>, StoreError> {
        self.store.merge(new_list)
    }

    pub fn launch_app(&self, name: &str, path: &str) -> Result<LaunchReceipt, LaunchError> {
        self.gateway.launch_path(name, path)
    }

    pub fn launch_shortcut(&self, id: &str) -> Result<LaunchReceipt, LaunchError> {
        let shortcut = self
            .store
            .get(id)
            .ok_or_else(|| LaunchError::UnknownShortcut(id.to_string()))?;
        self.gateway.launch(&shortcut)
    }
}
