use crate::diagnostics::Diagnostics;
use crate::error::StoreError;
use crate::model::Shortcut;
use crate::persist;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::{debug, error, info, warn};

/// Load the shortcut file at `path`.
///
/// Never fails: a missing file is the first-run state, an unreadable or
/// malformed file yields an empty list, and individual bad records are
/// skipped. The first occurrence of an id wins. Bypasses the store's I/O
/// lock, so only the store itself calls it on its backing file.
pub(crate) fn load_shortcuts(path: &Path) -> Vec<Shortcut> {
    match persist::read_records(path) {
        Ok(Some(records)) => collect_records(records),
        Ok(None) => {
            debug!("No shortcuts file at {}", path.display());
            Vec::new()
        }
        Err(e) => {
            error!("Exception while parsing shortcuts: {e}");
            Vec::new()
        }
    }
}

/// Read a shortcut file for import, reporting a missing or malformed file.
///
/// Invalid records are still skipped one by one, as in [`load_shortcuts`].
pub fn read_shortcuts(path: &Path) -> Result<Vec<Shortcut>, StoreError> {
    match persist::read_records(path)? {
        Some(records) => Ok(collect_records(records)),
        None => Err(StoreError::Read {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }),
    }
}

fn collect_records(records: Vec<serde_json::Value>) -> Vec<Shortcut> {
    let mut seen = HashSet::new();
    let mut shortcuts = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let shortcut: Shortcut = match serde_json::from_value(record) {
            Ok(shortcut) => shortcut,
            Err(e) => {
                warn!("Skipping shortcut record {index}: {e}");
                continue;
            }
        };
        if !seen.insert(shortcut.id.clone()) {
            info!("Skipping duplicate shortcut id {}", shortcut.id);
            continue;
        }
        debug!("Loaded shortcut {}", shortcut.name);
        shortcuts.push(shortcut);
    }
    shortcuts
}

/// Write `shortcuts` to `path`, replacing the previous file. Like
/// [`load_shortcuts`] this skips the store's I/O lock.
pub(crate) fn save_shortcuts(path: &Path, shortcuts: &[Shortcut]) -> Result<(), StoreError> {
    persist::write_json(path, shortcuts)?;
    debug!("Saved {} shortcuts to {}", shortcuts.len(), path.display());
    Ok(())
}

/// In-memory shortcut list backed by a JSON file.
///
/// File access is serialized through `io_lock`. Readers get the last
/// published `Arc`, which is only ever swapped for a fully built list.
pub struct ShortcutStore {
    backing_path: PathBuf,
    shortcuts: RwLock<Arc<Vec<Shortcut>>>,
    io_lock: Mutex<()>,
    diagnostics: Diagnostics,
}

impl ShortcutStore {
    pub fn open(backing_path: impl Into<PathBuf>, diagnostics: Diagnostics) -> Self {
        let store = Self {
            backing_path: backing_path.into(),
            shortcuts: RwLock::new(Arc::new(Vec::new())),
            io_lock: Mutex::new(()),
            diagnostics,
        };
        store.reload();
        store
    }

    pub fn backing_path(&self) -> &Path {
        &self.backing_path
    }

    /// Re-read the backing file and publish its contents.
    pub fn reload(&self) -> Vec<Shortcut> {
        self.diagnostics.scope(|| {
            let _io = self.lock_io();
            debug!("Analyzing shortcuts file {}", self.backing_path.display());
            let loaded = load_shortcuts(&self.backing_path);
            info!("Loaded {} shortcuts", loaded.len());
            self.publish(loaded.clone());
            loaded
        })
    }

    /// Current list in insertion order.
    pub fn get_all(&self) -> Vec<Shortcut> {
        self.snapshot().as_ref().clone()
    }

    pub fn snapshot(&self) -> Arc<Vec<Shortcut>> {
        let current = self.shortcuts.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    pub fn get(&self, id: &str) -> Option<Shortcut> {
        self.snapshot().iter().find(|s| s.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Append every candidate whose id is not yet known, then persist.
    ///
    /// A candidate with a blank id fails the whole call before anything is
    /// applied. Existing entries are never overwritten. The merged list becomes
    /// visible only after it was written; on a write error the in-memory list
    /// stays as it was.
    pub fn merge(
        &self,
        candidates: impl IntoIterator<Item = Shortcut>,
    ) -> Result<Vec<Shortcut>, StoreError> {
        self.merge_counted(candidates).map(|(merged, _)| merged)
    }

    /// Merge a single shortcut. Returns `true` if it was new.
    pub fn add(&self, shortcut: Shortcut) -> Result<bool, StoreError> {
        self.merge_counted([shortcut]).map(|(_, added)| added > 0)
    }

    /// Persist the current list.
    pub fn save(&self) -> Result<(), StoreError> {
        self.diagnostics.scope(|| {
            let _io = self.lock_io();
            save_shortcuts(&self.backing_path, &self.snapshot()).inspect_err(|e| {
                error!("Failed to save shortcuts: {e}");
            })
        })
    }

    fn merge_counted(
        &self,
        candidates: impl IntoIterator<Item = Shortcut>,
    ) -> Result<(Vec<Shortcut>, usize), StoreError> {
        self.diagnostics.scope(|| {
            let candidates: Vec<Shortcut> =
                candidates.into_iter().map(Shortcut::normalize).collect();
            if let Some(reason) = candidates.iter().find_map(|c| c.check().err()) {
                warn!("Rejecting shortcuts: {reason}");
                return Err(StoreError::InvalidShortcut(reason));
            }

            let _io = self.lock_io();
            let current = self.snapshot();
            let mut seen: HashSet<String> = current.iter().map(|s| s.id.clone()).collect();
            let mut merged = current.as_ref().clone();
            let mut added = 0;

            for candidate in candidates {
                if seen.contains(&candidate.id) {
                    debug!("Keeping existing shortcut {}", candidate.id);
                    continue;
                }
                info!("Adding shortcut {}", candidate.name);
                seen.insert(candidate.id.clone());
                merged.push(candidate);
                added += 1;
            }

            if let Err(e) = save_shortcuts(&self.backing_path, &merged) {
                error!("Failed to save shortcuts: {e}");
                return Err(e);
            }
            self.publish(merged.clone());
            Ok((merged, added))
        })
    }

    fn publish(&self, shortcuts: Vec<Shortcut>) {
        let mut current = self.shortcuts.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(shortcuts);
    }

    fn lock_io(&self) -> MutexGuard<'_, ()> {
        self.io_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
