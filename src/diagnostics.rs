//! Injected logging collaborator.
//!
//! Components never rely on a process-global subscriber. Each one holds a
//! [`Diagnostics`] handle and runs its work inside [`Diagnostics::scope`], so
//! the `tracing` events it emits land in whatever sink the owner wired up.

use crate::config::LogSettings;
use crate::error::DiagnosticsError;
use std::fs::File;
use std::sync::Arc;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct Diagnostics {
    dispatch: Dispatch,
    file: Option<Arc<File>>,
}

impl Diagnostics {
    /// Build the sink described by `settings`. A configured log file is
    /// truncated on open.
    pub fn init(settings: &LogSettings) -> Result<Self, DiagnosticsError> {
        let filter = EnvFilter::try_new(&settings.level).map_err(|e| DiagnosticsError::Level {
            level: settings.level.clone(),
            reason: e.to_string(),
        })?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false);

        match &settings.file {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| DiagnosticsError::Open {
                        path: path.clone(),
                        source: e,
                    })?;
                }
                let file = File::create(path).map_err(|e| DiagnosticsError::Open {
                    path: path.clone(),
                    source: e,
                })?;
                let file = Arc::new(file);
                let subscriber = builder
                    .with_ansi(false)
                    .with_writer(Arc::clone(&file))
                    .finish();
                Ok(Self {
                    dispatch: Dispatch::new(subscriber),
                    file: Some(file),
                })
            }
            None => {
                let subscriber = builder.with_writer(std::io::stderr).finish();
                Ok(Self {
                    dispatch: Dispatch::new(subscriber),
                    file: None,
                })
            }
        }
    }

    /// Wrap an already built subscriber.
    pub fn from_dispatch(dispatch: Dispatch) -> Self {
        Self {
            dispatch,
            file: None,
        }
    }

    /// Discard every event.
    pub fn disabled() -> Self {
        Self::from_dispatch(Dispatch::none())
    }

    /// Run `f` with this sink as the current default.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Flush the log file to disk. Handles cloned from this one keep
    /// logging until they are dropped.
    pub fn shutdown(self) -> std::io::Result<()> {
        match self.file {
            Some(file) => file.sync_all(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("file", &self.file.is_some())
            .finish()
    }
}
