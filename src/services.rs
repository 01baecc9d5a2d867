use crate::bee::BeeManager;
use crate::browser::Browser;
use crate::config::Config;
use crate::events::EventBus;
use crate::menu::SystemState;
use crate::status::{Readiness, StatusStore};
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;

/// Everything the tray reads from or calls into. The menu core only sees
/// this trait, so tests can substitute a recording fake.
pub trait Collaborators: Send + Sync + 'static {
    fn is_running(&self) -> bool;
    fn readiness(&self) -> Readiness;
    fn start_bee(&self) -> Result<()>;
    fn stop_bee(&self) -> Result<()>;
    fn wait_for_stop(&self) -> impl Future<Output = ()> + Send + 'static;
    fn open_dashboard(&self) -> Result<()>;
    fn open_installer(&self) -> Result<()>;

    fn snapshot(&self) -> SystemState {
        SystemState {
            has_initial_transaction: self.readiness().has_initial_transaction,
            is_running: self.is_running(),
        }
    }
}

pub struct Services {
    pub bee: Arc<BeeManager>,
    pub status: Arc<StatusStore>,
    pub browser: Browser,
}

impl Services {
    pub fn new(config: &Config, status: StatusStore, events: Arc<EventBus>) -> Self {
        Self {
            bee: BeeManager::new(config.bee.clone(), events),
            status: Arc::new(status),
            browser: Browser::new(config.urls.clone()),
        }
    }
}

impl Collaborators for Services {
    fn is_running(&self) -> bool {
        self.bee.is_running()
    }

    fn readiness(&self) -> Readiness {
        self.status.readiness()
    }

    fn start_bee(&self) -> Result<()> {
        self.bee.start()
    }

    fn stop_bee(&self) -> Result<()> {
        self.bee.stop()
    }

    fn wait_for_stop(&self) -> impl Future<Output = ()> + Send + 'static {
        self.bee.wait_for_stop()
    }

    fn open_dashboard(&self) -> Result<()> {
        self.browser.open_dashboard()
    }

    fn open_installer(&self) -> Result<()> {
        self.browser.open_installer()
    }
}
