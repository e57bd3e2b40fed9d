use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::impl_case_insensitive_deserialize;

/// One scheduled instance of a service's workload, pinned to a slot or a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Task {
    pub id: String,
    pub service_id: String,
    /// Replica slot; `0` for tasks of global services
    #[serde(default)]
    pub slot: u64,
    #[serde(default)]
    pub node_id: String,
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub spec: TaskSpec,
    #[serde(default)]
    pub desired_state: TaskState,
    #[serde(default)]
    pub status: TaskStatus,
}

/// Object bookkeeping; `created_at` is the clock used to order restarts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Meta {
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TaskSpec {
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TaskStatus {
    #[serde(default)]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub state: TaskState,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortConfig>,
}

/// A port published by a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PortConfig {
    pub published_port: u32,
    pub target_port: u32,
    #[serde(default = "default_protocol")]
    pub protocol: String,
}

fn default_protocol() -> String {
    "tcp".to_string()
}

/// Lifecycle state of a task, both desired and observed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    #[default]
    New,
    Pending,
    Assigned,
    Accepted,
    Preparing,
    Ready,
    Starting,
    Running,
    Complete,
    Shutdown,
    Failed,
    Rejected,
    Remove,
    Orphaned,
}

impl_case_insensitive_deserialize!(
    TaskState,
    New => "new",
    Pending => "pending",
    Assigned => "assigned",
    Accepted => "accepted",
    Preparing => "preparing",
    Ready => "ready",
    Starting => "starting",
    Running => "running",
    Complete => "complete",
    Shutdown => "shutdown",
    Failed => "failed",
    Rejected => "rejected",
    Remove => "remove",
    Orphaned => "orphaned"
);

impl TaskState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::New => "new",
            TaskState::Pending => "pending",
            TaskState::Assigned => "assigned",
            TaskState::Accepted => "accepted",
            TaskState::Preparing => "preparing",
            TaskState::Ready => "ready",
            TaskState::Starting => "starting",
            TaskState::Running => "running",
            TaskState::Complete => "complete",
            TaskState::Shutdown => "shutdown",
            TaskState::Failed => "failed",
            TaskState::Rejected => "rejected",
            TaskState::Remove => "remove",
            TaskState::Orphaned => "orphaned",
        }
    }

    /// State name with its first letter capitalised, as shown in listings
    pub fn pretty(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Task {
    /// Create a task with only its identity and owning service set
    pub fn new(id: impl Into<String>, service_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            service_id: service_id.into(),
            slot: 0,
            node_id: String::new(),
            meta: Meta::default(),
            spec: TaskSpec::default(),
            desired_state: TaskState::default(),
            status: TaskStatus::default(),
        }
    }

    pub fn with_slot(mut self, slot: u64) -> Self {
        self.slot = slot;
        self
    }

    pub fn on_node(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = node_id.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.meta.created_at = created_at;
        self
    }

    /// Creation time used as the last ordering key
    pub fn creation_time(&self) -> DateTime<Utc> {
        self.meta.created_at
    }
}
