pub mod entity;
pub mod task;

pub use entity::{EntityKind, Node, Service};
pub use task::{Meta, PortConfig, Task, TaskSpec, TaskState, TaskStatus};
