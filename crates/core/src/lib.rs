//! taskps-core - Ordered, name-resolved listings of service tasks
//!
//! This crate provides functionality to:
//! - Order tasks by service, slot, node and recency
//! - Resolve service and node IDs into display names
//! - Name tasks and nest restarted generations under the current one
//! - Render the rows as aligned tables, JSON or custom templates
pub mod config;
pub mod error;
pub mod format;
pub mod interfaces;
pub mod naming;
pub mod ordering;
pub mod print;
pub mod rows;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::ConfigFile;
pub use format::{Format, FormatWriter, new_task_format};
pub use interfaces::{Directory, RenderContext, RenderSink, ResolveContext, Resolver};
pub use print::{default_format, print};
pub use rows::TaskRows;
pub use services::{IdResolver, MemoryDirectory};
