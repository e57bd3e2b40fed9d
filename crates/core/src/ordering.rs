//! Canonical task order
//!
//! Tasks are grouped by service, then ordered by slot, then by node (which only
//! matters for global services where every task has slot 0). Tasks that share
//! all three keys are different generations of the same logical unit, so the
//! newest comes first.

use std::cmp::Ordering;

use crate::types::Task;

/// Compare two tasks by (service, slot, node, newest first)
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.service_id
        .cmp(&b.service_id)
        .then_with(|| a.slot.cmp(&b.slot))
        .then_with(|| a.node_id.cmp(&b.node_id))
        .then_with(|| b.creation_time().cmp(&a.creation_time()))
}

/// Return the tasks in canonical order without touching the input.
///
/// The sort is stable: tasks equal under every key keep their input order.
pub fn sort_tasks(tasks: &[Task]) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by(|a, b| compare_tasks(a, b));
    tracing::debug!("Sorted {} tasks", sorted.len());
    sorted
}
