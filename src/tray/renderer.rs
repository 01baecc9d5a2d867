use crate::menu::{MenuModel, SystemState, TrayState};
use anyhow::Result;

/// The OS tray icon as seen by the renderer.
pub trait TrayHandle {
    /// Replaces the whole context menu and tooltip.
    fn install(&mut self, model: &MenuModel, state: TrayState) -> Result<()>;
}

/// Owns the single tray handle and keeps its menu in sync with the last
/// observed system state.
pub struct TrayRenderer<H> {
    handle: Option<H>,
    installed: Option<MenuModel>,
}

impl<H: TrayHandle> TrayRenderer<H> {
    pub fn new() -> Self {
        Self {
            handle: None,
            installed: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_initialized(&self) -> bool {
        self.handle.is_some()
    }

    /// Creates the handle on the first call and renders. Later calls do nothing.
    pub fn initialize<F>(&mut self, create: F, state: SystemState) -> Result<()>
    where
        F: FnOnce() -> Result<H>,
    {
        if self.handle.is_some() {
            log::debug!("Tray already initialized");
            return Ok(());
        }

        self.handle = Some(create()?);
        log::info!("Tray icon created");
        self.render(state);
        Ok(())
    }

    pub fn render(&mut self, state: SystemState) {
        let Some(handle) = self.handle.as_mut() else {
            log::debug!("Tray not initialized yet, skipping render");
            return;
        };

        let tray_state = TrayState::from(state);
        let model = MenuModel::for_state(state);
        if let Err(e) = handle.install(&model, tray_state) {
            log::error!("Failed to install tray menu: {:#}", e);
            return;
        }

        log::debug!("Rendered tray menu for {:?}", tray_state);
        self.installed = Some(model);
    }

    #[cfg(test)]
    pub(crate) fn installed(&self) -> Option<&MenuModel> {
        self.installed.as_ref()
    }
}

impl<H: TrayHandle> Default for TrayRenderer<H> {
    fn default() -> Self {
        Self::new()
    }
}
