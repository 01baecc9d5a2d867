use anyhow::Result;
use bee_tray::menu::{MenuModel, TrayState};
use bee_tray::services::Collaborators;
use bee_tray::status::Readiness;
use bee_tray::tray::TrayHandle;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Records every collaborator call. `wait_for_stop` stays pending until
/// `release_stop` is called.
pub struct FakeCollaborators {
    calls: Arc<Mutex<Vec<&'static str>>>,
    ready: AtomicBool,
    running: AtomicBool,
    fail_start: AtomicBool,
    fail_stop: AtomicBool,
    stop_released: watch::Sender<bool>,
}

impl FakeCollaborators {
    pub fn new(has_initial_transaction: bool, is_running: bool) -> Arc<Self> {
        let (stop_released, _) = watch::channel(false);
        Arc::new(Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            ready: AtomicBool::new(has_initial_transaction),
            running: AtomicBool::new(is_running),
            fail_start: AtomicBool::new(false),
            fail_stop: AtomicBool::new(false),
            stop_released,
        })
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_ready(&self, value: bool) {
        self.ready.store(value, Ordering::SeqCst);
    }

    pub fn set_running(&self, value: bool) {
        self.running.store(value, Ordering::SeqCst);
    }

    pub fn fail_start(&self) {
        self.fail_start.store(true, Ordering::SeqCst);
    }

    pub fn fail_stop(&self) {
        self.fail_stop.store(true, Ordering::SeqCst);
    }

    pub fn release_stop(&self) {
        self.stop_released.send_replace(true);
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Collaborators for FakeCollaborators {
    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn readiness(&self) -> Readiness {
        Readiness { has_initial_transaction: self.ready.load(Ordering::SeqCst) }
    }

    fn start_bee(&self) -> Result<()> {
        self.record("start");
        if self.fail_start.load(Ordering::SeqCst) {
            anyhow::bail!("bee binary missing");
        }
        Ok(())
    }

    fn stop_bee(&self) -> Result<()> {
        self.record("stop");
        if self.fail_stop.load(Ordering::SeqCst) {
            anyhow::bail!("no such process");
        }
        Ok(())
    }

    fn wait_for_stop(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.stop_released.subscribe();
        let calls = Arc::clone(&self.calls);
        async move {
            let _ = rx.wait_for(|released| *released).await;
            calls.lock().unwrap().push("stop_completed");
        }
    }

    fn open_dashboard(&self) -> Result<()> {
        self.record("open_dashboard");
        Ok(())
    }

    fn open_installer(&self) -> Result<()> {
        self.record("open_installer");
        Ok(())
    }
}

pub type Installs = Rc<RefCell<Vec<(MenuModel, TrayState)>>>;

pub struct RecordingHandle {
    pub installs: Installs,
}

impl TrayHandle for RecordingHandle {
    fn install(&mut self, model: &MenuModel, state: TrayState) -> Result<()> {
        self.installs.borrow_mut().push((model.clone(), state));
        Ok(())
    }
}
