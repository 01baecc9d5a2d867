use super::model::{MenuEntry, MenuModel};
use anyhow::Result;
use tray_icon::menu::{Menu, MenuItem, PredefinedMenuItem};

/// Turns a menu model into a native menu. Item ids are the action ids, so
/// `MenuEvent`s map straight back through `MenuAction::from_id`.
pub fn build_menu(model: &MenuModel) -> Result<Menu> {
    let menu = Menu::new();

    for entry in model.entries() {
        match entry {
            MenuEntry::Action { label, action } => {
                let item = MenuItem::with_id(action.id(), label, true, None);
                menu.append(&item)?;
            }
            MenuEntry::Separator => {
                menu.append(&PredefinedMenuItem::separator())?;
            }
        }
    }

    Ok(menu)
}
