//! Display names for sorted tasks
//!
//! A task is named after its service and either its slot or, for global
//! services, the raw node ID. When two adjacent tasks end up with the same
//! name the later one is an older generation of the same unit and is shown
//! nested under it in tables.

use crate::error::Result;
use crate::interfaces::{ResolveContext, Resolver};
use crate::types::{EntityKind, Task};

/// Prefix marking a task as an earlier generation of the row above it
pub const INDENT_MARKER: &str = " \\_ ";

/// Canonical and table-indented name of one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName {
    pub name: String,
    pub indented: String,
}

impl DisplayName {
    /// Derive the name of `task`, nesting it if `previous` has the same name
    pub fn derive(service_name: &str, task: &Task, previous: Option<&str>) -> Self {
        let name = canonical_name(service_name, task);
        let indented = if previous == Some(name.as_str()) {
            format!("{INDENT_MARKER}{name}")
        } else {
            name.clone()
        };
        Self { name, indented }
    }

    pub fn is_nested(&self) -> bool {
        self.name != self.indented
    }
}

/// `<service>.<slot>`, or `<service>.<node id>` for slotless tasks.
///
/// The raw node ID is used rather than the node's name so tasks of a global
/// service stay distinct even when two nodes share a display name.
pub fn canonical_name(service_name: &str, task: &Task) -> String {
    if task.slot != 0 {
        format!("{}.{}", service_name, task.slot)
    } else {
        format!("{}.{}", service_name, task.node_id)
    }
}

/// A sorted task with everything resolved for display
#[derive(Debug, Clone)]
pub struct NamedTask<'a> {
    pub task: &'a Task,
    pub display: DisplayName,
    pub node: String,
}

/// Resolve and name every task in order.
///
/// Stops at the first resolver error and returns it as is; tasks after the
/// failing one are never resolved.
pub fn derive_names<'a, R>(
    ctx: &ResolveContext,
    tasks: &[&'a Task],
    resolver: &R,
) -> Result<Vec<NamedTask<'a>>>
where
    R: Resolver + ?Sized,
{
    let (named, _) = tasks.iter().try_fold(
        (Vec::with_capacity(tasks.len()), None::<String>),
        |(mut named, previous), &task| {
            let service_name = resolver.resolve(ctx, EntityKind::Service, &task.service_id)?;
            let node = resolver.resolve(ctx, EntityKind::Node, &task.node_id)?;

            let name = DisplayName::derive(&service_name, task, previous.as_deref());
            tracing::trace!(
                "Task {} named {:?} (nested: {})",
                task.id,
                name.name,
                name.is_nested()
            );

            let previous = Some(name.name.clone());
            named.push(NamedTask {
                task,
                display: name,
                node,
            });
            Ok::<_, crate::Error>((named, previous))
        },
    )?;
    Ok(named)
}
