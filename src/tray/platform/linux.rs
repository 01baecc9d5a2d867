use super::POLL_INTERVAL;
use crate::services::Collaborators;
use crate::tray::{create_tray_icon, LoopControl, TrayApp};
use anyhow::Result;
use gtk::{self, glib};
use tokio::runtime::Runtime;
use tray_icon::menu::MenuEvent;
use tray_icon::{Icon, TrayIcon};

pub fn run<C: Collaborators>(mut app: TrayApp<C, TrayIcon>, icon: Icon, runtime: Runtime) -> Result<()> {
    if gtk::init().is_err() {
        anyhow::bail!("Failed to initialize GTK");
    }

    app.initialize(|| create_tray_icon(icon))?;

    let menu_receiver = MenuEvent::receiver();
    glib::timeout_add_local(POLL_INTERVAL, move || {
        while let Ok(event) = menu_receiver.try_recv() {
            app.on_menu_event(&event.id.0);
        }

        match app.drain_events() {
            LoopControl::Continue => glib::ControlFlow::Continue,
            LoopControl::Exit => {
                gtk::main_quit();
                glib::ControlFlow::Break
            }
        }
    });

    gtk::main();
    log::debug!("Shutting down async runtime");
    drop(runtime);
    Ok(())
}
