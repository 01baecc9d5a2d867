pub mod builder;
pub mod model;
pub mod router;

pub use model::{MenuAction, MenuEntry, MenuModel, SystemState, TrayState};
pub use router::{EventRouter, HandlerResult};
