//! Core interfaces for the task listing pipeline
//!
//! The pipeline only needs two capabilities from the outside world: a way to
//! turn opaque IDs into names, and a sink that writes the finished rows. Both
//! are traits so hosts can plug in their own lookups and output formats.

pub mod directory;
pub mod render_sink;
pub mod resolver;

pub use directory::Directory;
pub use render_sink::{RenderContext, RenderSink};
pub use resolver::{ResolveContext, Resolver};
