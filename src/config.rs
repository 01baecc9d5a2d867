use crate::paths;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bee: BeeConfig,
    #[serde(default)]
    pub urls: UrlConfig,
    #[serde(default)]
    pub assets: AssetConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BeeConfig {
    #[serde(default = "default_binary")]
    pub binary: PathBuf,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl Default for BeeConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            args: default_args(),
            working_dir: None,
        }
    }
}

fn default_binary() -> PathBuf {
    PathBuf::from("bee")
}

fn default_args() -> Vec<String> {
    vec!["start".to_string()]
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrlConfig {
    #[serde(default = "default_dashboard_url")]
    pub dashboard: String,
    #[serde(default = "default_installer_url")]
    pub installer: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            dashboard: default_dashboard_url(),
            installer: default_installer_url(),
        }
    }
}

fn default_dashboard_url() -> String {
    "http://localhost:3054/dashboard".to_string()
}

fn default_installer_url() -> String {
    "http://localhost:3054/installer".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssetConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Loads the config from the default location, falling back to defaults
    /// when no file exists yet.
    pub fn load() -> Result<Self> {
        let path = paths::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn resolve_asset_path(&self, name: &str) -> Result<PathBuf> {
        let dir = match &self.assets.dir {
            Some(dir) => dir.clone(),
            None => paths::default_assets_dir()?,
        };
        Ok(dir.join(name))
    }
}
