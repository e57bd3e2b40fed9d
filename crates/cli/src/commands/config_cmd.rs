use anyhow::Result;
use std::path::Path;

use taskps_core::{default_format, new_task_format};

use crate::config::{ConfigSearch, load_config};

pub fn config_command(config: Option<&Path>) -> Result<()> {
    let (path, config) = load_config(&ConfigSearch::from_env(config))?;

    match path {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: none (using defaults)"),
    }

    let format = default_format(&config, false);
    println!("Default format: {format}");
    if format != new_task_format(format, false).as_str() {
        println!("Expands to: {}", new_task_format(format, false).as_str().escape_debug());
    }
    Ok(())
}
