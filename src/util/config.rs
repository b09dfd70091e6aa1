//! Configuration file support.
//!
//! Capstan reads two configuration file locations:
//! - Global: `~/.capstan/config.toml` - user-wide defaults
//! - Project: `.capstan/config.toml` - project-specific overrides
//!
//! Project config takes precedence over global config. A missing file means
//! defaults; a file that exists but does not parse is a hard error, so a
//! typo never silently reverts the hook to its defaults.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::util::diagnostic::HookError;

/// Capstan configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hook settings
    pub hook: HookConfig,
}

/// Settings for the pre-build hook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Explicit wrapper directory, tried before the ancestor search.
    ///
    /// The directory must still ship both compiler wrappers; otherwise the
    /// normal search runs.
    pub tools_bin: Option<PathBuf>,

    /// Job count used for the parallelism default (1 when unset).
    pub jobs: Option<usize>,

    /// Disable the hook entirely.
    pub disabled: bool,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HookError::ConfigInvalid {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        let config = toml::from_str(&contents).map_err(|e| HookError::ConfigInvalid {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        Ok(config)
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.hook.tools_bin.is_some() {
            self.hook.tools_bin = other.hook.tools_bin;
        }
        if other.hook.jobs.is_some() {
            self.hook.jobs = other.hook.jobs;
        }
        if other.hook.disabled {
            self.hook.disabled = true;
        }
    }
}

/// Load merged configuration from the global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (`.capstan/config.toml`)
/// 2. Global config (`~/.capstan/config.toml`)
/// 3. Defaults
pub fn load_merged(global_path: Option<&Path>, project_path: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        if global_path.exists() {
            config.merge(Config::load(global_path)?);
        }
    }

    if project_path.exists() {
        config.merge(Config::load(project_path)?);
    }

    Ok(config)
}

/// Get the global capstan config directory (`~/.capstan`).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".capstan"))
}

/// Get the global config path (`~/.capstan/config.toml`).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (`.capstan/config.toml`).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".capstan").join("config.toml")
}
