use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{config_command, ps_command};

#[derive(Parser, Debug)]
#[command(name = "taskps")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug       Enable debug logging\n    TASKPS_CONFIG=PATH   Use this config file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tasks of one or more services
    Ps(PsArgs),
    /// Show which configuration file is used and the effective default format
    Config {
        /// Use this config file instead of searching for one
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PsArgs {
    /// JSON snapshot with tasks, services and nodes ("-" reads stdin)
    pub snapshot: String,

    /// Format output: "table", "raw", "json" or a custom template
    #[arg(long)]
    pub format: Option<String>,

    /// Only display task IDs
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not truncate IDs, images and errors
    #[arg(long)]
    pub no_trunc: bool,

    /// Do not map IDs to names
    #[arg(long)]
    pub no_resolve: bool,

    /// Filter tasks (service=<name|id>, node=<name|id>, desired-state=<state>)
    #[arg(short = 'f', long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Use this config file instead of searching for one
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        tracing::debug!("Executing {:?}", self);
        match self {
            Commands::Ps(args) => ps_command(&args),
            Commands::Config { config } => config_command(config.as_deref()),
        }
    }
}
