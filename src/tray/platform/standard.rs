use super::POLL_INTERVAL;
use crate::services::Collaborators;
use crate::tray::{create_tray_icon, LoopControl, TrayApp};
use anyhow::Result;
use std::time::Instant;
use tao::event::{Event, StartCause};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tokio::runtime::Runtime;
use tray_icon::menu::MenuEvent;
use tray_icon::{Icon, TrayIcon};

enum UserEvent {
    Menu(MenuEvent),
}

pub fn run<C: Collaborators>(mut app: TrayApp<C, TrayIcon>, icon: Icon, runtime: Runtime) -> Result<()> {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        let _ = proxy.send_event(UserEvent::Menu(event));
    }));

    let mut icon = Some(icon);
    // `run` never returns, so the runtime has to go down inside the loop.
    let mut runtime = Some(runtime);
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL);

        match event {
            Event::NewEvents(StartCause::Init) => {
                #[cfg(target_os = "macos")]
                super::macos::hide_dock_icon();

                let Some(icon) = icon.take() else { return };
                if let Err(e) = app.initialize(|| create_tray_icon(icon)) {
                    log::error!("Failed to create tray icon: {:#}", e);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }
            Event::UserEvent(UserEvent::Menu(event)) => app.on_menu_event(&event.id.0),
            Event::LoopDestroyed => {
                log::debug!("Shutting down async runtime");
                drop(runtime.take());
                return;
            }
            _ => {}
        }

        if app.drain_events() == LoopControl::Exit {
            log::info!("Quitting application");
            *control_flow = ControlFlow::Exit;
        }
    })
}
