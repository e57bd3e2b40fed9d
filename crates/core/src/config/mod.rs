//! Configuration management for taskps

mod settings;

// Re-export main types
pub use settings::{CONFIG_FILE_NAME, ConfigFile};
