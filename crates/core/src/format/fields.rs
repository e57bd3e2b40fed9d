//! Per-task values exposed to format templates

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{PortConfig, Task};

const TRUNCATED_ID_LENGTH: usize = 12;
const MAX_ERROR_LENGTH: usize = 30;

/// A column a template can reference as `{{.Name}}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Image,
    Node,
    DesiredState,
    CurrentState,
    Error,
    Ports,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ID" => Some(Field::Id),
            "Name" => Some(Field::Name),
            "Image" => Some(Field::Image),
            "Node" => Some(Field::Node),
            "DesiredState" => Some(Field::DesiredState),
            "CurrentState" => Some(Field::CurrentState),
            "Error" => Some(Field::Error),
            "Ports" => Some(Field::Ports),
            _ => None,
        }
    }

    /// Column title in table output
    pub fn header(&self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Name => "NAME",
            Field::Image => "IMAGE",
            Field::Node => "NODE",
            Field::DesiredState => "DESIRED STATE",
            Field::CurrentState => "CURRENT STATE",
            Field::Error => "ERROR",
            Field::Ports => "PORTS",
        }
    }
}

/// Display values of one task.
///
/// Serialises to the object printed by `{{json .}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskFields {
    #[serde(rename = "CurrentState")]
    pub current_state: String,
    #[serde(rename = "DesiredState")]
    pub desired_state: String,
    #[serde(rename = "Error")]
    pub error: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Node")]
    pub node: String,
    #[serde(rename = "Ports")]
    pub ports: String,
}

impl TaskFields {
    pub fn new(task: &Task, name: &str, node: &str, trunc: bool, now: DateTime<Utc>) -> Self {
        Self {
            current_state: current_state(task, now),
            desired_state: task.desired_state.pretty(),
            error: error_text(&task.status.err, trunc),
            id: if trunc {
                truncate_id(&task.id)
            } else {
                task.id.clone()
            },
            image: if trunc {
                strip_digest(&task.spec.image).to_string()
            } else {
                task.spec.image.clone()
            },
            name: name.to_string(),
            node: node.to_string(),
            ports: format_ports(&task.status.ports),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Image => &self.image,
            Field::Node => &self.node,
            Field::DesiredState => &self.desired_state,
            Field::CurrentState => &self.current_state,
            Field::Error => &self.error,
            Field::Ports => &self.ports,
        }
    }
}

fn truncate_id(id: &str) -> String {
    id.chars().take(TRUNCATED_ID_LENGTH).collect()
}

fn strip_digest(image: &str) -> &str {
    match image.split_once('@') {
        Some((name, _digest)) => name,
        None => image,
    }
}

fn current_state(task: &Task, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(task.status.timestamp);
    format!(
        "{} {} ago",
        task.status.state.pretty(),
        human_duration(age).to_lowercase()
    )
}

fn error_text(err: &str, trunc: bool) -> String {
    if err.is_empty() {
        return String::new();
    }
    if trunc && err.chars().count() > MAX_ERROR_LENGTH {
        let head: String = err.chars().take(MAX_ERROR_LENGTH - 1).collect();
        return format!("\"{head}…\"");
    }
    format!("\"{err}\"")
}

fn format_ports(ports: &[PortConfig]) -> String {
    ports
        .iter()
        .map(|p| format!("*:{}->{}/{}", p.published_port, p.target_port, p.protocol))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Approximate, human friendly length of a duration
pub fn human_duration(duration: chrono::Duration) -> String {
    let seconds = duration.num_seconds();
    if seconds < 1 {
        return "Less than a second".to_string();
    }
    if seconds == 1 {
        return "1 second".to_string();
    }
    if seconds < 60 {
        return format!("{seconds} seconds");
    }

    let minutes = duration.num_minutes();
    if minutes == 1 {
        return "About a minute".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} minutes");
    }

    // Hours round to nearest
    let hours = (seconds + 1800) / 3600;
    if hours == 1 {
        "About an hour".to_string()
    } else if hours < 48 {
        format!("{hours} hours")
    } else if hours < 24 * 7 * 2 {
        format!("{} days", hours / 24)
    } else if hours < 24 * 30 * 2 {
        format!("{} weeks", hours / 24 / 7)
    } else if hours < 24 * 365 * 2 {
        format!("{} months", hours / 24 / 30)
    } else {
        format!("{} years", hours / 24 / 365)
    }
}
