use serde::{Deserialize, Serialize};
use std::fmt;

/// Which ID space an identifier belongs to.
///
/// Service and node IDs may collide; the kind keeps a resolver from
/// answering a node lookup with a service name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Service,
    Node,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Service => f.write_str("service"),
            EntityKind::Node => f.write_str("node"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Service {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Node {
    pub id: String,
    /// Name assigned by the operator, may be empty
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hostname: String,
}

impl Node {
    /// Operator-assigned name, falling back to the hostname
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.hostname
        } else {
            &self.name
        }
    }
}
