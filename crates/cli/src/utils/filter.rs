use anyhow::{Result, bail};

use taskps_core::{EntityKind, ResolveContext, Resolver, Task, TaskState};

/// A `--filter key=value` selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    /// Service ID or name
    Service(String),
    /// Node ID or name
    Node(String),
    DesiredState(TaskState),
}

impl TaskFilter {
    pub fn parse(arg: &str) -> Result<Self> {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("Bad format of filter (expected key=value): {arg}");
        };
        if value.is_empty() {
            bail!("Empty value for filter '{key}'");
        }

        match key {
            "service" => Ok(TaskFilter::Service(value.to_string())),
            "node" => Ok(TaskFilter::Node(value.to_string())),
            "desired-state" => {
                let state: TaskState = serde_json::from_value(value.into())
                    .map_err(|e| anyhow::anyhow!("Invalid desired-state filter: {e}"))?;
                Ok(TaskFilter::DesiredState(state))
            }
            other => bail!("Invalid filter '{other}'"),
        }
    }

    /// Whether `task` passes this filter; IDs are compared before names
    pub fn matches<R>(&self, ctx: &ResolveContext, task: &Task, resolver: &R) -> Result<bool>
    where
        R: Resolver + ?Sized,
    {
        let matched = match self {
            TaskFilter::Service(value) => {
                task.service_id == *value
                    || resolver.resolve(ctx, EntityKind::Service, &task.service_id)? == *value
            }
            TaskFilter::Node(value) => {
                task.node_id == *value
                    || resolver.resolve(ctx, EntityKind::Node, &task.node_id)? == *value
            }
            TaskFilter::DesiredState(state) => task.desired_state == *state,
        };
        Ok(matched)
    }
}

/// Keep the tasks that pass every filter, preserving their order
pub fn apply_filters<R>(
    ctx: &ResolveContext,
    tasks: Vec<Task>,
    filters: &[TaskFilter],
    resolver: &R,
) -> Result<Vec<Task>>
where
    R: Resolver + ?Sized,
{
    if filters.is_empty() {
        return Ok(tasks);
    }

    let mut kept = Vec::with_capacity(tasks.len());
    for task in tasks {
        let mut keep = true;
        for filter in filters {
            if !filter.matches(ctx, &task, resolver)? {
                keep = false;
                break;
            }
        }
        if keep {
            kept.push(task);
        }
    }
    Ok(kept)
}
