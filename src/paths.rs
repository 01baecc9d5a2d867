use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "bee-tray";
const CONFIG_ENV: &str = "BEE_TRAY_CONFIG";

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join(APP_DIR))
}

pub fn data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .context("Could not determine data directory")
        .map(|p| p.join(APP_DIR))
}

pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    config_dir().map(|p| p.join("config.toml"))
}

pub fn status_path() -> Result<PathBuf> {
    config_dir().map(|p| p.join("status.json"))
}

pub fn default_assets_dir() -> Result<PathBuf> {
    data_dir().map(|p| p.join("assets"))
}

pub fn open_url(url: &str) -> Result<()> {
    open::that(url).with_context(|| format!("Failed to open {}", url))?;
    Ok(())
}
