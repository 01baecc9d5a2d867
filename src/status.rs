use crate::events::{EventBus, TrayEvent};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

const WATCH_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Readiness {
    #[serde(default)]
    pub has_initial_transaction: bool,
}

/// File-backed readiness flag. The installer flow writes `status.json`
/// once the node has been funded.
pub struct StatusStore {
    path: PathBuf,
}

impl StatusStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn readiness(&self) -> Readiness {
        match self.load() {
            Ok(readiness) => readiness,
            Err(e) => {
                log::warn!("Failed to read status file {:?}: {}", self.path, e);
                Readiness::default()
            }
        }
    }

    fn load(&self) -> Result<Readiness> {
        if !self.path.exists() {
            return Ok(Readiness::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let readiness = serde_json::from_str(&content)?;
        Ok(readiness)
    }

    pub fn set_initial_transaction(&self, value: bool) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let readiness = Readiness { has_initial_transaction: value };
        let content = serde_json::to_string_pretty(&readiness)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write status file {:?}", self.path))?;
        log::info!("Readiness updated: hasInitialTransaction = {}", value);
        Ok(())
    }

    fn modified(&self) -> Option<SystemTime> {
        std::fs::metadata(&self.path).and_then(|m| m.modified()).ok()
    }

    /// Publishes `StateChanged` whenever the readiness flag flips on disk.
    pub fn watch(self: Arc<Self>, events: Arc<EventBus>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut last_modified = self.modified();
            let mut last = self.readiness();
            let mut ticker = tokio::time::interval(WATCH_INTERVAL);

            loop {
                ticker.tick().await;
                let modified = self.modified();
                if modified == last_modified {
                    continue;
                }
                last_modified = modified;

                let current = self.readiness();
                if current != last {
                    log::info!("Readiness changed: {:?} -> {:?}", last, current);
                    last = current;
                    events.send(TrayEvent::StateChanged);
                }
            }
        })
    }
}
