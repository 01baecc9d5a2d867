use crate::config::BeeConfig;
use crate::events::{EventBus, TrayEvent};
use anyhow::{Context, Result};
use std::future::Future;
use std::process::{ExitStatus, Stdio};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::{oneshot, watch};

struct RunningChild {
    #[cfg_attr(not(unix), allow(dead_code))]
    pid: Option<u32>,
    kill_tx: Option<oneshot::Sender<()>>,
    terminating: bool,
}

/// Supervises the Bee child process. The running flag lives in a `watch`
/// channel so callers can await the transition back to stopped.
pub struct BeeManager {
    config: BeeConfig,
    events: Arc<EventBus>,
    running: watch::Sender<bool>,
    child: Mutex<Option<RunningChild>>,
}

impl BeeManager {
    pub fn new(config: BeeConfig, events: Arc<EventBus>) -> Arc<Self> {
        let (running, _) = watch::channel(false);
        Arc::new(Self {
            config,
            events,
            running,
            child: Mutex::new(None),
        })
    }

    pub fn is_running(&self) -> bool {
        *self.running.borrow()
    }

    fn slot(&self) -> Result<MutexGuard<'_, Option<RunningChild>>> {
        self.child
            .lock()
            .map_err(|_| anyhow::anyhow!("Bee process state lock poisoned"))
    }

    /// Spawns Bee. Must be called from within the tokio runtime.
    pub fn start(self: &Arc<Self>) -> Result<()> {
        let mut slot = self.slot()?;
        if slot.is_some() {
            log::warn!("Bee is already running, ignoring start request");
            return Ok(());
        }

        let mut command = Command::new(&self.config.binary);
        command
            .args(&self.config.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.config.working_dir {
            command.current_dir(dir);
        }

        log::info!("Starting bee: {:?} {:?}", self.config.binary, self.config.args);
        let mut child = command
            .spawn()
            .with_context(|| format!("Failed to spawn {:?}", self.config.binary))?;

        if let Some(stdout) = child.stdout.take() {
            tokio::spawn(forward_output(stdout, log::Level::Debug));
        }
        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(forward_output(stderr, log::Level::Warn));
        }

        let (kill_tx, kill_rx) = oneshot::channel();
        *slot = Some(RunningChild {
            pid: child.id(),
            kill_tx: Some(kill_tx),
            terminating: false,
        });
        // The flag changes under the slot lock so the two never disagree.
        self.running.send_replace(true);
        drop(slot);

        self.events.send(TrayEvent::StateChanged);

        let manager = Arc::clone(self);
        tokio::spawn(async move { manager.supervise(child, kill_rx).await });
        Ok(())
    }

    async fn supervise(self: Arc<Self>, mut child: Child, kill_rx: oneshot::Receiver<()>) {
        let status = tokio::select! {
            status = child.wait() => status,
            Ok(()) = kill_rx => {
                if let Err(e) = child.kill().await {
                    log::warn!("Failed to kill bee: {}", e);
                }
                child.wait().await
            }
        };
        log_exit(status);

        match self.slot() {
            Ok(mut slot) => {
                *slot = None;
                self.running.send_replace(false);
            }
            Err(e) => {
                log::error!("{}", e);
                self.running.send_replace(false);
            }
        }
        self.events.send(TrayEvent::StateChanged);
    }

    /// Asks Bee to shut down. The first request is graceful where the
    /// platform allows it; a repeated request kills the process.
    pub fn stop(&self) -> Result<()> {
        let mut slot = self.slot()?;
        let Some(running) = slot.as_mut() else {
            log::debug!("Bee is not running, nothing to stop");
            return Ok(());
        };

        if running.terminating {
            log::info!("Bee still shutting down, killing it");
            if let Some(tx) = running.kill_tx.take() {
                let _ = tx.send(());
            }
            return Ok(());
        }

        log::info!("Stopping bee");
        running.terminating = true;
        terminate(running)
    }

    /// Resolves once Bee is no longer running.
    pub fn wait_for_stop(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.running.subscribe();
        async move {
            let _ = rx.wait_for(|running| !*running).await;
        }
    }
}

#[cfg(unix)]
fn terminate(running: &mut RunningChild) -> Result<()> {
    let Some(pid) = running.pid else {
        return Ok(());
    };
    let Ok(pid) = libc::pid_t::try_from(pid) else {
        anyhow::bail!("Bee pid {} out of range", pid);
    };

    // SAFETY: kill(2) has no memory-safety preconditions.
    let rc = unsafe { libc::kill(pid, libc::SIGTERM) };
    if rc != 0 {
        return Err(std::io::Error::last_os_error()).context("Failed to send SIGTERM to bee");
    }
    Ok(())
}

#[cfg(not(unix))]
fn terminate(running: &mut RunningChild) -> Result<()> {
    if let Some(tx) = running.kill_tx.take() {
        let _ = tx.send(());
    }
    Ok(())
}

fn log_exit(status: std::io::Result<ExitStatus>) {
    match status {
        Ok(status) if status.success() => log::info!("Bee exited"),
        Ok(status) => log::warn!("Bee exited with {}", status),
        Err(e) => log::error!("Failed to wait for bee: {}", e),
    }
}

async fn forward_output<R: AsyncRead + Unpin>(stream: R, level: log::Level) {
    let mut lines = BufReader::new(stream).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        log::log!(target: "bee", level, "{}", line);
    }
}
