use anyhow::{Context, Result};
use bee_tray::config::Config;
use bee_tray::events::{EventBus, TrayEvent};
use bee_tray::menu::{EventRouter, MenuAction};
use bee_tray::paths;
use bee_tray::services::Services;
use bee_tray::status::StatusStore;
use bee_tray::tray::{self, TrayApp};
use std::sync::Arc;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    log::info!("Starting Bee Tray...");

    let config = Config::load()?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    let (app, icon) = {
        let _guard = runtime.enter();

        let events = Arc::new(EventBus::new());
        let status = StatusStore::new(paths::status_path()?);
        let services = Arc::new(Services::new(&config, status, Arc::clone(&events)));

        let _status_watch = Arc::clone(&services.status).watch(Arc::clone(&events));
        spawn_interrupt_handler(Arc::clone(&services), Arc::clone(&events));

        let icon = tray::icon::load_icon(&config.resolve_asset_path(tray::icon::ICON_FILE)?)?;
        (TrayApp::new(services, events, runtime.handle().clone()), icon)
    };

    tray::platform::run(app, icon, runtime)?;

    log::info!("Bee Tray exited");
    Ok(())
}

fn spawn_interrupt_handler(services: Arc<Services>, events: Arc<EventBus>) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to listen for Ctrl-C: {}", e);
            return;
        }

        log::info!("Interrupt received, shutting down");
        let router = EventRouter::new(services);
        if let Err(e) = router.dispatch(MenuAction::StopAndQuit).await {
            log::error!("Shutdown failed: {:#}", e);
        }
        events.send(TrayEvent::QuitRequested);
    });
}
