use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use taskps_core::ConfigFile;
use taskps_core::config::CONFIG_FILE_NAME;

pub const CONFIG_ENV_VAR: &str = "TASKPS_CONFIG";

/// Places a config file may come from, highest priority first
#[derive(Debug, Clone, Default)]
pub struct ConfigSearch {
    /// `--config` on the command line
    pub explicit: Option<PathBuf>,
    /// `TASKPS_CONFIG`
    pub env: Option<PathBuf>,
    /// Directory to start the upward search from
    pub cwd: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl ConfigSearch {
    /// Search using the process environment
    pub fn from_env(explicit: Option<&Path>) -> Self {
        Self {
            explicit: explicit.map(Path::to_path_buf),
            env: std::env::var_os(CONFIG_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            cwd: std::env::current_dir().ok(),
            home: std::env::var_os("HOME").map(PathBuf::from),
        }
    }

    /// Path of the config file to use, if any.
    ///
    /// Explicit and environment paths are returned even when missing so that
    /// loading reports the mistake instead of silently using defaults.
    pub fn locate(&self) -> Option<PathBuf> {
        if let Some(path) = self.explicit.as_ref().or(self.env.as_ref()) {
            return Some(path.clone());
        }

        if let Some(found) = self.cwd.as_deref().and_then(ConfigFile::find_config_file) {
            return Some(found);
        }

        self.home
            .as_ref()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
    }
}

/// Load the config file found by `search`, or defaults when there is none
pub fn load_config(search: &ConfigSearch) -> Result<(Option<PathBuf>, ConfigFile)> {
    let Some(path) = search.locate() else {
        debug!("No config file found, using defaults");
        return Ok((None, ConfigFile::default()));
    };

    debug!("Loading config from {}", path.display());
    let config = ConfigFile::load_from_file(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    Ok((Some(path), config))
}
