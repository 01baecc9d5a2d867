use crate::config::UrlConfig;
use crate::paths;
use anyhow::Result;

pub struct Browser {
    urls: UrlConfig,
}

impl Browser {
    pub fn new(urls: UrlConfig) -> Self {
        Self { urls }
    }

    pub fn open_dashboard(&self) -> Result<()> {
        log::info!("Opening dashboard at {}", self.urls.dashboard);
        paths::open_url(&self.urls.dashboard)
    }

    pub fn open_installer(&self) -> Result<()> {
        log::info!("Opening installer at {}", self.urls.installer);
        paths::open_url(&self.urls.installer)
    }
}
