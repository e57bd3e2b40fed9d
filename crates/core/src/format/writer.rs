//! Default render sink: aligned tables and per-task templates

use super::fields::TaskFields;
use super::template::Template;
use crate::error::Result;
use crate::interfaces::{RenderContext, RenderSink};
use crate::rows::TaskRows;
use crate::types::Task;

const DEFAULT_MIN_WIDTH: usize = 20;
const DEFAULT_PADDING: usize = 3;

/// Writes tasks using the template in the render context.
///
/// Table formats get a header line and tab-separated cells aligned into
/// columns; other formats print each rendered task on its own line.
#[derive(Debug, Clone, Copy)]
pub struct FormatWriter {
    min_width: usize,
    padding: usize,
}

impl Default for FormatWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatWriter {
    pub fn new() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            padding: DEFAULT_PADDING,
        }
    }

    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Align tab-separated lines into columns.
    ///
    /// Each entry may span several lines; a newline ends the current cell.
    /// The last cell of a line is never padded.
    fn align(&self, entries: &[String]) -> String {
        let rows: Vec<Vec<&str>> = entries
            .iter()
            .flat_map(|entry| entry.split('\n'))
            .map(|line| line.split('\t').collect())
            .collect();

        let mut widths: Vec<usize> = Vec::new();
        for cells in &rows {
            let Some((_, padded)) = cells.split_last() else { continue };
            for (i, cell) in padded.iter().enumerate() {
                let width = (cell.chars().count() + self.padding).max(self.min_width);
                match widths.get_mut(i) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }

        let mut out = String::new();
        for cells in &rows {
            let Some((last, padded)) = cells.split_last() else { continue };
            for (i, cell) in padded.iter().enumerate() {
                out.push_str(cell);
                let fill = widths[i] - cell.chars().count();
                out.extend(std::iter::repeat_n(' ', fill));
            }
            out.push_str(last);
            out.push('\n');
        }
        out
    }
}

impl RenderSink for FormatWriter {
    fn write(&self, ctx: &mut RenderContext<'_>, tasks: &[&Task], rows: &TaskRows) -> Result<()> {
        let template = Template::parse(ctx.format.template_text())?;
        let table = ctx.format.is_table();
        tracing::debug!(
            "Writing {} tasks as {}",
            tasks.len(),
            if table { "table" } else { "template" }
        );

        let mut rendered = Vec::with_capacity(tasks.len() + 1);
        if table {
            rendered.push(template.header());
        }
        for task in tasks {
            let name = rows.name(&task.id).unwrap_or_default();
            let node = rows.node(&task.id).unwrap_or(task.node_id.as_str());
            let fields = TaskFields::new(task, name, node, ctx.trunc, ctx.now);
            rendered.push(template.execute(&fields)?);
        }

        if table {
            ctx.output.write_all(self.align(&rendered).as_bytes())?;
        } else {
            for line in &rendered {
                writeln!(ctx.output, "{line}")?;
            }
        }
        ctx.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Format, new_task_format};

    fn render(format: Format, tasks: &[&Task], rows: &TaskRows) -> String {
        let mut out: Vec<u8> = Vec::new();
        let mut ctx = RenderContext::new(&mut out, format, true);
        FormatWriter::new().write(&mut ctx, tasks, rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_align_pads_all_but_last_cell() {
        let writer = FormatWriter::new().with_min_width(4).with_padding(2);
        let lines = vec!["ID\tNAME\tNODE".to_string(), "abcdef\tx\ty".to_string()];

        assert_eq!(writer.align(&lines), "ID      NAME  NODE\nabcdef  x     y\n");
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let task = Task::new("t1", "svc").with_slot(1);
        let mut rows = TaskRows::default();
        rows.insert("t1", "web.1".to_string(), "worker-1".to_string());

        let out = render(Format::new("table {{.Name}}\\t{{.Node}}"), &[&task], &rows);

        let expected = format!("{:<20}NODE\n{:<20}worker-1\n", "NAME", "web.1");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_newline_in_table_template_ends_the_cell() {
        let task = Task::new("t1", "svc").with_slot(1);
        let mut rows = TaskRows::default();
        rows.insert("t1", "web.1".to_string(), "n".to_string());

        let out = render(Format::new("table {{.Name}}\\n{{.Node}}\\t{{.ID}}"), &[&task], &rows);

        let expected = format!("NAME\n{:<20}ID\nweb.1\n{:<20}t1\n", "NODE", "n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_template_prints_one_line_per_task() {
        let a = Task::new("t1", "svc").with_slot(1);
        let b = Task::new("t2", "svc").with_slot(2);
        let mut rows = TaskRows::default();
        rows.insert("t1", "web.1".to_string(), "n1".to_string());
        rows.insert("t2", "web.2".to_string(), "n2".to_string());

        let out = render(Format::new("{{.Name}}@{{.Node}}"), &[&a, &b], &rows);

        assert_eq!(out, "web.1@n1\nweb.2@n2\n");
    }

    #[test]
    fn test_missing_row_falls_back_to_raw_node() {
        let task = Task::new("t1", "svc").on_node("node-raw");
        let out = render(Format::new("{{.Node}}|{{.Name}}"), &[&task], &TaskRows::default());
        assert_eq!(out, "node-raw|\n");
    }

    #[test]
    fn test_quiet_output_lists_ids() {
        let task = Task::new("0123456789abcdef", "svc");
        let out = render(new_task_format("table", true), &[&task], &TaskRows::default());
        assert_eq!(out, "0123456789ab\n");
    }

    #[test]
    fn test_bad_template_fails_before_writing() {
        let task = Task::new("t1", "svc");
        let mut out: Vec<u8> = Vec::new();
        let mut ctx = RenderContext::new(&mut out, Format::new("{{.Nope}}"), false);

        let result = FormatWriter::new().write(&mut ctx, &[&task], &TaskRows::default());

        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
