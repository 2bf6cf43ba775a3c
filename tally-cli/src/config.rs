use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tally_core::DEFAULT_STORE_FILE;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub store: StoreSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreSection {
    /// Expense file; relative paths resolve against the working directory
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

pub fn config_path(home: &Path) -> PathBuf {
    home.join("config.toml")
}

/// Read the config at `path`, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

/// Choose and load the config: an explicit path first, then the one under
/// `home`. Without either the defaults apply.
pub fn select_config(explicit: Option<PathBuf>, home: Option<PathBuf>) -> Result<Config> {
    match (explicit, home) {
        (Some(p), _) => load_config(&p),
        (None, Some(home)) => load_config(&config_path(&home)),
        (None, None) => {
            log::debug!("no config location (HOME unset), using defaults");
            Ok(Config::default())
        }
    }
}

/// Pick the store file: explicit override first, then config.
pub fn resolve_store_path(override_path: Option<PathBuf>, cfg: &Config) -> PathBuf {
    override_path.unwrap_or_else(|| cfg.store.path.clone())
}
