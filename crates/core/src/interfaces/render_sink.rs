//! Rendering interface

use chrono::{DateTime, Utc};
use std::io::Write;

use crate::error::Result;
use crate::format::Format;
use crate::rows::TaskRows;
use crate::types::Task;

/// Everything a sink needs to know about where and how to write
pub struct RenderContext<'a> {
    pub output: &'a mut dyn Write,
    pub format: Format,
    /// Shorten IDs, image digests and errors
    pub trunc: bool,
    /// Reference time for "N minutes ago" style columns
    pub now: DateTime<Utc>,
}

impl<'a> RenderContext<'a> {
    pub fn new(output: &'a mut dyn Write, format: Format, trunc: bool) -> Self {
        Self {
            output,
            format,
            trunc,
            now: Utc::now(),
        }
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

/// Trait for writing ordered tasks and their assembled rows
pub trait RenderSink {
    /// Write `tasks` in the given order; `rows` holds the name and node
    /// label for every task ID.
    fn write(&self, ctx: &mut RenderContext<'_>, tasks: &[&Task], rows: &TaskRows) -> Result<()>;
}
