//! Offline task snapshots
//!
//! The CLI does not talk to a cluster; it reads what a fetch layer dumped:
//! tasks plus the services and nodes needed to name them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use taskps_core::{MemoryDirectory, Node, Service, Task};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Snapshot {
    /// Read a snapshot from a file, or from stdin when `source` is `-`
    pub fn load(source: &str) -> Result<Self> {
        let contents = if source == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read snapshot from stdin")?;
            buf
        } else {
            std::fs::read_to_string(Path::new(source))
                .with_context(|| format!("Failed to read snapshot {source}"))?
        };
        Self::parse(&contents).with_context(|| format!("Invalid snapshot {source}"))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Split into the task list and a directory for name lookups
    pub fn into_parts(self) -> (Vec<Task>, MemoryDirectory) {
        (self.tasks, MemoryDirectory::new(self.services, self.nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskps_core::Directory;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = Snapshot::parse(
            r#"{
                "tasks": [
                    { "id": "t1", "service_id": "s1", "slot": 1, "node_id": "n1",
                      "meta": { "created_at": "2024-01-01T00:00:00Z" },
                      "desired_state": "running",
                      "status": { "state": "Running", "timestamp": "2024-01-01T00:00:05Z" } }
                ],
                "services": [ { "id": "s1", "name": "web" } ],
                "nodes": [ { "id": "n1", "hostname": "host-1" } ]
            }"#,
        )
        .unwrap();

        let (tasks, directory) = snapshot.into_parts();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].slot, 1);
        assert_eq!(directory.service("s1").unwrap().unwrap().name, "web");
        assert_eq!(directory.node("n1").unwrap().unwrap().display_name(), "host-1");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let snapshot = Snapshot::parse("{}").unwrap();
        assert!(snapshot.tasks.is_empty());
        assert!(snapshot.nodes.is_empty());
    }

    #[test]
    fn test_invalid_snapshot_is_an_error() {
        assert!(Snapshot::parse(r#"{ "tasks": 3 }"#).is_err());
    }
}
