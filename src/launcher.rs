use crate::diagnostics::Diagnostics;
use crate::error::LaunchError;
use crate::model::Shortcut;
use std::process::{Command, Stdio};
use tracing::{error, info};

/// Host capability that starts a process for a path.
pub trait ProcessHost: Send + Sync {
    /// Start `path` and return the new process id.
    fn spawn(&self, path: &str) -> std::io::Result<u32>;
}

/// Starts the executable directly, detached from our stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl ProcessHost for SystemHost {
    fn spawn(&self, path: &str) -> std::io::Result<u32> {
        let mut child = Command::new(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        let pid = child.id();

        // Reap in the background so the launched app never lingers as a zombie.
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(pid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchReceipt {
    pub pid: u32,
}

/// Hands shortcuts to the host process launcher
pub struct LaunchGateway {
    host: Box<dyn ProcessHost>,
    diagnostics: Diagnostics,
}

impl LaunchGateway {
    pub fn new(host: impl ProcessHost + 'static, diagnostics: Diagnostics) -> Self {
        Self {
            host: Box::new(host),
            diagnostics,
        }
    }

    pub fn system(diagnostics: Diagnostics) -> Self {
        Self::new(SystemHost, diagnostics)
    }

    pub fn launch(&self, shortcut: &Shortcut) -> Result<LaunchReceipt, LaunchError> {
        self.launch_path(&shortcut.name, &shortcut.path)
    }

    /// Launch `path`; `name` only labels the log lines.
    pub fn launch_path(&self, name: &str, path: &str) -> Result<LaunchReceipt, LaunchError> {
        self.diagnostics.scope(|| {
            info!("Launching {name}");
            if path.trim().is_empty() {
                error!("Cannot launch {name}: empty path");
                return Err(LaunchError::EmptyPath {
                    name: name.to_string(),
                });
            }

            match self.host.spawn(path) {
                Ok(pid) => {
                    info!("Launched {name} ({path}) as pid {pid}");
                    Ok(LaunchReceipt { pid })
                }
                Err(e) => {
                    error!("Failed to launch {name} ({path}): {e}");
                    Err(LaunchError::Spawn {
                        name: name.to_string(),
                        path: path.to_string(),
                        source: e,
                    })
                }
            }
        })
    }
}
