pub mod bee;
pub mod browser;
pub mod config;
pub mod events;
pub mod menu;
pub mod paths;
pub mod services;
pub mod status;
pub mod tray;
