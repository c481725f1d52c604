use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::clone::DEFAULT_DEPTH;
use crate::process::CLONE_TIMEOUT;

/// Global configuration loaded from `~/.config/git-grab/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrabConfig {
    /// Seconds to wait for a single clone before reporting a timeout.
    pub clone_timeout_secs: u64,
    /// Clone depth; 1 = latest commit only, 0 = full history.
    pub depth: u32,
    /// Print transfer progress to stderr while cloning.
    pub show_progress: bool,
    /// Also append logs to `~/.local/state/git-grab/git-grab.log`.
    pub log_to_file: bool,
}

impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            clone_timeout_secs: CLONE_TIMEOUT.as_secs(),
            depth: DEFAULT_DEPTH,
            show_progress: true,
            log_to_file: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("git-grab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Result of [`load_or_init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: GrabConfig,
    /// Set when no file existed and the defaults were just written here.
    /// Loading runs before logging is up, so the caller reports it.
    pub created: Option<PathBuf>,
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LoadedConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<LoadedConfig> {
    if !path.exists() {
        let default_cfg = GrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        return Ok(LoadedConfig {
            config: default_cfg,
            created: Some(path.to_path_buf()),
        });
    }

    let data = fs::read_to_string(path)?;
    let cfg: GrabConfig = toml::from_str(&data)?;
    Ok(LoadedConfig {
        config: cfg,
        created: None,
    })
}
