#[cfg(target_os = "linux")]
mod linux;

#[cfg(not(target_os = "linux"))]
mod standard;

#[cfg(target_os = "macos")]
mod macos;

use super::TrayApp;
use crate::services::Collaborators;
use anyhow::Result;
use std::time::Duration;
use tokio::runtime::Runtime;
use tray_icon::{Icon, TrayIcon};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the UI event loop on the calling thread until quit is requested.
///
/// The runtime is dropped when the loop ends, which kills a Bee child that
/// is still running. On tao platforms the loop never returns to the caller.
#[cfg(target_os = "linux")]
pub fn run<C: Collaborators>(app: TrayApp<C, TrayIcon>, icon: Icon, runtime: Runtime) -> Result<()> {
    linux::run(app, icon, runtime)
}

#[cfg(not(target_os = "linux"))]
pub fn run<C: Collaborators>(app: TrayApp<C, TrayIcon>, icon: Icon, runtime: Runtime) -> Result<()> {
    standard::run(app, icon, runtime)
}
