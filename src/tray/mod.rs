pub mod icon;
pub mod platform;
pub mod renderer;

pub use renderer::{TrayHandle, TrayRenderer};

use crate::events::{EventBus, TrayEvent};
use crate::menu::{builder, EventRouter, HandlerResult, MenuModel, TrayState};
use crate::services::Collaborators;
use anyhow::Result;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

impl TrayHandle for TrayIcon {
    fn install(&mut self, model: &MenuModel, state: TrayState) -> Result<()> {
        let menu = builder::build_menu(model)?;
        self.set_menu(Some(Box::new(menu)));
        self.set_tooltip(Some(state.tooltip()))?;
        Ok(())
    }
}

pub(crate) fn create_tray_icon(icon: Icon) -> Result<TrayIcon> {
    let tray_icon = TrayIconBuilder::new()
        .with_tooltip("Bee")
        .with_icon(icon)
        .build()?;
    Ok(tray_icon)
}

/// Glue between the UI thread and everything else: renders on state
/// changes and hands menu clicks to the runtime.
pub struct TrayApp<C, H> {
    renderer: TrayRenderer<H>,
    router: Arc<EventRouter<C>>,
    collaborators: Arc<C>,
    events: Arc<EventBus>,
    rx: broadcast::Receiver<TrayEvent>,
    runtime: Handle,
}

impl<C: Collaborators, H: TrayHandle> TrayApp<C, H> {
    pub fn new(collaborators: Arc<C>, events: Arc<EventBus>, runtime: Handle) -> Self {
        Self {
            renderer: TrayRenderer::new(),
            router: Arc::new(EventRouter::new(Arc::clone(&collaborators))),
            collaborators,
            rx: events.subscribe(),
            events,
            runtime,
        }
    }

    pub fn initialize<F>(&mut self, create: F) -> Result<()>
    where
        F: FnOnce() -> Result<H>,
    {
        self.renderer.initialize(create, self.collaborators.snapshot())
    }

    pub fn render(&mut self) {
        self.renderer.render(self.collaborators.snapshot());
    }

    /// Starts the handler for a clicked item. Handlers run on the runtime so
    /// a slow one never stalls the UI thread.
    pub fn on_menu_event(&self, event_id: &str) {
        log::debug!("Menu event: {}", event_id);
        let event_id = event_id.to_string();
        let router = Arc::clone(&self.router);
        let events = Arc::clone(&self.events);
        self.runtime.spawn(async move {
            match router.route(&event_id).await {
                Ok(HandlerResult::Continue) => {}
                Ok(HandlerResult::Quit) => {
                    log::info!("Quitting application");
                    events.send(TrayEvent::QuitRequested);
                }
                Err(e) => log::error!("Error handling menu event {}: {:#}", event_id, e),
            }
        });
    }

    /// Drains pending bus events, rendering at most once per call.
    pub fn drain_events(&mut self) -> LoopControl {
        let mut dirty = false;
        loop {
            match self.rx.try_recv() {
                Ok(TrayEvent::StateChanged) => dirty = true,
                Ok(TrayEvent::QuitRequested) => return LoopControl::Exit,
                Err(TryRecvError::Lagged(skipped)) => {
                    log::warn!("Tray missed {} events", skipped);
                    dirty = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }

        if dirty {
            self.render();
        }
        LoopControl::Continue
    }
}
