use super::model::MenuAction;
use crate::services::Collaborators;
use anyhow::Result;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResult {
    Continue,
    Quit,
}

/// Maps menu ids to actions and actions to collaborator calls.
pub struct EventRouter<C> {
    collaborators: Arc<C>,
}

impl<C: Collaborators> EventRouter<C> {
    pub fn new(collaborators: Arc<C>) -> Self {
        Self { collaborators }
    }

    fn resolve(&self, event_id: &str) -> Option<MenuAction> {
        let action = MenuAction::from_id(event_id);
        if action.is_none() {
            log::warn!("No route found for event: {}", event_id);
        }
        action
    }

    pub async fn route(&self, event_id: &str) -> Result<HandlerResult> {
        match self.resolve(event_id) {
            Some(action) => self.dispatch(action).await,
            None => Ok(HandlerResult::Continue),
        }
    }

    pub async fn dispatch(&self, action: MenuAction) -> Result<HandlerResult> {
        log::debug!("Dispatching {:?}", action);
        let collaborators = &self.collaborators;

        match action {
            MenuAction::OpenInstaller => collaborators.open_installer()?,
            MenuAction::StartBee => collaborators.start_bee()?,
            MenuAction::StopBee => collaborators.stop_bee()?,
            MenuAction::OpenWebUi => collaborators.open_dashboard()?,
            MenuAction::Quit => {
                log::info!("Quit requested");
                return Ok(HandlerResult::Quit);
            }
            MenuAction::StopAndQuit => {
                log::info!("Quit requested, stopping bee first");
                // A stop that never went out will never be observed.
                match collaborators.stop_bee() {
                    Ok(()) => collaborators.wait_for_stop().await,
                    Err(e) => log::error!("Failed to stop bee: {:#}", e),
                }
                return Ok(HandlerResult::Quit);
            }
        }

        Ok(HandlerResult::Continue)
    }
}
