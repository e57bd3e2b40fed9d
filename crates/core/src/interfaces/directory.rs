//! Entity lookup interface
//!
//! A directory is the backend a resolver consults; it knows services and
//! nodes but nothing about display conventions or caching.

use crate::error::Result;
use crate::types::{Node, Service};

/// Trait for looking up services and nodes by ID
pub trait Directory: Send + Sync {
    /// Find a service, `Ok(None)` if it does not exist (any more)
    fn service(&self, id: &str) -> Result<Option<Service>>;

    /// Find a node, `Ok(None)` if it does not exist (any more)
    fn node(&self, id: &str) -> Result<Option<Node>>;
}
