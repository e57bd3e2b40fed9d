use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".taskps.json";

/// Persisted user settings.
///
/// Only the task format is consulted; other keys in the file are ignored so
/// the file can be shared with other tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// Custom format for task listings, empty for the built-in table
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tasks_format: String,
}

impl ConfigFile {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::Config(format!("Failed to parse config {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for [`CONFIG_FILE_NAME`]
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }
}
