/// The inputs the menu is derived from, read fresh on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemState {
    pub has_initial_transaction: bool,
    pub is_running: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayState {
    Uninitialized,
    ReadyStopped,
    ReadyRunning,
}

impl From<SystemState> for TrayState {
    fn from(state: SystemState) -> Self {
        match (state.has_initial_transaction, state.is_running) {
            (false, _) => TrayState::Uninitialized,
            (true, false) => TrayState::ReadyStopped,
            (true, true) => TrayState::ReadyRunning,
        }
    }
}

impl TrayState {
    pub fn tooltip(self) -> &'static str {
        match self {
            TrayState::Uninitialized => "Bee: setup required",
            TrayState::ReadyStopped => "Bee: stopped",
            TrayState::ReadyRunning => "Bee: running",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    OpenInstaller,
    StartBee,
    StopBee,
    OpenWebUi,
    /// Exit without touching Bee.
    Quit,
    /// Stop Bee, wait for it to exit, then exit.
    StopAndQuit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::OpenInstaller,
        MenuAction::StartBee,
        MenuAction::StopBee,
        MenuAction::OpenWebUi,
        MenuAction::Quit,
        MenuAction::StopAndQuit,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MenuAction::OpenInstaller => "__open_installer__",
            MenuAction::StartBee => "__start_bee__",
            MenuAction::StopBee => "__stop_bee__",
            MenuAction::OpenWebUi => "__open_web_ui__",
            MenuAction::Quit => "__quit__",
            MenuAction::StopAndQuit => "__stop_and_quit__",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Action { label: &'static str, action: MenuAction },
    Separator,
}

impl MenuEntry {
    fn item(label: &'static str, action: MenuAction) -> Self {
        MenuEntry::Action { label, action }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            MenuEntry::Action { label, .. } => Some(*label),
            MenuEntry::Separator => None,
        }
    }

    pub fn menu_action(&self) -> Option<MenuAction> {
        match self {
            MenuEntry::Action { action, .. } => Some(*action),
            MenuEntry::Separator => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    entries: Vec<MenuEntry>,
}

impl MenuModel {
    pub fn for_state(state: SystemState) -> Self {
        let entries = match TrayState::from(state) {
            TrayState::Uninitialized => vec![
                MenuEntry::item("Open Installer", MenuAction::OpenInstaller),
                MenuEntry::Separator,
                MenuEntry::item("Exit", MenuAction::Quit),
            ],
            TrayState::ReadyStopped => ready_menu(MenuEntry::item("Start Bee", MenuAction::StartBee)),
            TrayState::ReadyRunning => ready_menu(MenuEntry::item("Stop Bee", MenuAction::StopBee)),
        };
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }
}

#[cfg(test)]
impl MenuModel {
    pub(crate) fn labels(&self) -> Vec<Option<&'static str>> {
        self.entries.iter().map(MenuEntry::label).collect()
    }

    pub(crate) fn action_for(&self, label: &str) -> Option<MenuAction> {
        self.entries
            .iter()
            .find(|entry| entry.label() == Some(label))
            .and_then(MenuEntry::menu_action)
    }
}

fn ready_menu(toggle: MenuEntry) -> Vec<MenuEntry> {
    vec![
        toggle,
        MenuEntry::Separator,
        MenuEntry::item("Open Web UI", MenuAction::OpenWebUi),
        MenuEntry::Separator,
        MenuEntry::item("Exit", MenuAction::StopAndQuit),
    ]
}
