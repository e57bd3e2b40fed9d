//! Per-task display rows handed to the render sink

use std::collections::HashMap;

use crate::naming::NamedTask;

/// Display name and node label for every task of one render call, keyed by
/// task ID
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRows {
    names: HashMap<String, String>,
    nodes: HashMap<String, String>,
}

impl TaskRows {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: HashMap::with_capacity(capacity),
            nodes: HashMap::with_capacity(capacity),
        }
    }

    /// Build the rows for named tasks.
    ///
    /// Tables get the nested form of each name; every other format gets the
    /// canonical name so nesting markers never reach machine-readable output.
    pub fn assemble(named: &[NamedTask<'_>], table: bool) -> Self {
        let mut rows = Self::with_capacity(named.len());
        for entry in named {
            let name = if table {
                &entry.display.indented
            } else {
                &entry.display.name
            };
            rows.insert(&entry.task.id, name.clone(), entry.node.clone());
        }
        rows
    }

    pub fn insert(&mut self, task_id: &str, name: String, node: String) {
        self.names.insert(task_id.to_string(), name);
        self.nodes.insert(task_id.to_string(), node);
    }

    pub fn name(&self, task_id: &str) -> Option<&str> {
        self.names.get(task_id).map(String::as_str)
    }

    pub fn node(&self, task_id: &str) -> Option<&str> {
        self.nodes.get(task_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
