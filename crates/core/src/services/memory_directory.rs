//! In-memory directory of services and nodes

use std::collections::HashMap;

use crate::error::Result;
use crate::interfaces::Directory;
use crate::types::{Node, Service};

/// Directory backed by maps built from a fixed list of entities
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    services: HashMap<String, Service>,
    nodes: HashMap<String, Node>,
}

impl MemoryDirectory {
    pub fn new(services: Vec<Service>, nodes: Vec<Node>) -> Self {
        Self {
            services: services.into_iter().map(|s| (s.id.clone(), s)).collect(),
            nodes: nodes.into_iter().map(|n| (n.id.clone(), n)).collect(),
        }
    }
}

impl Directory for MemoryDirectory {
    fn service(&self, id: &str) -> Result<Option<Service>> {
        Ok(self.services.get(id).cloned())
    }

    fn node(&self, id: &str) -> Result<Option<Node>> {
        Ok(self.nodes.get(id).cloned())
    }
}
