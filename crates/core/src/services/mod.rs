//! Service implementations for the pipeline interfaces
//!
//! This module provides the stock resolver and an in-memory directory that
//! hosts can use directly or wrap around their own backends.

pub mod id_resolver;
pub mod memory_directory;

pub use id_resolver::IdResolver;
pub use memory_directory::MemoryDirectory;
