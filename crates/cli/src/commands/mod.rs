pub mod config_cmd;
pub mod ps;

pub use config_cmd::config_command;
pub use ps::ps_command;
