//! Task listing entry points

use crate::config::ConfigFile;
use crate::error::Result;
use crate::format::TABLE_FORMAT_KEY;
use crate::interfaces::{RenderContext, RenderSink, ResolveContext, Resolver};
use crate::naming::derive_names;
use crate::ordering::sort_tasks;
use crate::rows::TaskRows;
use crate::types::Task;

/// Order, name and render `tasks`.
///
/// The first resolver error is returned unchanged and nothing is written.
/// Errors from the sink are returned unchanged as well. `tasks` is only
/// read; ordering happens on a borrowed view.
pub fn print<R, S>(
    ctx: &ResolveContext,
    render: &mut RenderContext<'_>,
    sink: &S,
    tasks: &[Task],
    resolver: &R,
) -> Result<()>
where
    R: Resolver + ?Sized,
    S: RenderSink + ?Sized,
{
    let sorted = sort_tasks(tasks);
    let named = derive_names(ctx, &sorted, resolver)?;
    let rows = TaskRows::assemble(&named, render.format.is_table());
    tracing::debug!("Assembled {} rows for format {:?}", rows.len(), render.format.as_str());
    sink.write(render, &sorted, &rows)
}

/// Format to use when none was given on the command line: the configured
/// task format, unless it is empty or only IDs are wanted.
pub fn default_format(config: &ConfigFile, quiet: bool) -> &str {
    if !config.tasks_format.is_empty() && !quiet {
        return &config.tasks_format;
    }
    TABLE_FORMAT_KEY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::format::{Format, JSON_FORMAT_KEY, new_task_format};
    use crate::types::EntityKind;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::Mutex;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    /// Resolver that maps `svc-<x>` to `<x>` and fails for one ID
    struct PrefixResolver {
        fail_on: Option<&'static str>,
    }

    impl Resolver for PrefixResolver {
        fn resolve(&self, _ctx: &ResolveContext, _kind: EntityKind, id: &str) -> Result<String> {
            if self.fail_on == Some(id) {
                return Err(Error::Lookup(format!("lookup of {id} timed out")));
            }
            Ok(id.strip_prefix("svc-").unwrap_or(id).to_string())
        }
    }

    /// Sink that keeps what it was given
    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<(Vec<String>, TaskRows)>>,
    }

    impl RenderSink for RecordingSink {
        fn write(
            &self,
            _ctx: &mut RenderContext<'_>,
            tasks: &[&Task],
            rows: &TaskRows,
        ) -> Result<()> {
            let ids = tasks.iter().map(|t| t.id.clone()).collect();
            self.calls.lock().unwrap().push((ids, rows.clone()));
            Ok(())
        }
    }

    fn restarted_tasks() -> Vec<Task> {
        vec![
            Task::new("B", "svc-web").with_slot(1).created_at(at(1)),
            Task::new("A", "svc-web").with_slot(1).created_at(at(2)),
        ]
    }

    fn run(format: Format, tasks: &[Task]) -> (Vec<String>, TaskRows) {
        let sink = RecordingSink::default();
        let mut out: Vec<u8> = Vec::new();
        let mut render = RenderContext::new(&mut out, format, true);
        print(
            &ResolveContext::new(),
            &mut render,
            &sink,
            tasks,
            &PrefixResolver { fail_on: None },
        )
        .unwrap();
        sink.calls.into_inner().unwrap().remove(0)
    }

    #[test]
    fn test_table_rows_nest_restarted_task() {
        let (order, rows) = run(new_task_format(TABLE_FORMAT_KEY, false), &restarted_tasks());

        assert_eq!(order, vec!["A", "B"]);
        assert_eq!(rows.name("A"), Some("web.1"));
        assert_eq!(rows.name("B"), Some(" \\_ web.1"));
    }

    #[test]
    fn test_json_rows_are_never_nested() {
        let (order, rows) = run(new_task_format(JSON_FORMAT_KEY, false), &restarted_tasks());

        assert_eq!(order, vec!["A", "B"]);
        assert_eq!(rows.name("A"), Some("web.1"));
        assert_eq!(rows.name("B"), Some("web.1"));
    }

    #[test]
    fn test_resolver_error_skips_sink() {
        let sink = RecordingSink::default();
        let mut out: Vec<u8> = Vec::new();
        let mut render = RenderContext::new(&mut out, new_task_format("table", false), true);
        let tasks = vec![
            Task::new("a", "svc-api").with_slot(1).on_node("n1"),
            Task::new("b", "svc-web").with_slot(1).on_node("n2"),
        ];

        let err = print(
            &ResolveContext::new(),
            &mut render,
            &sink,
            &tasks,
            &PrefixResolver { fail_on: Some("n2") },
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Lookup error: lookup of n2 timed out");
        assert!(sink.calls.lock().unwrap().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_default_format() {
        let custom = ConfigFile {
            tasks_format: "{{.Name}}".to_string(),
        };
        let empty = ConfigFile::default();

        assert_eq!(default_format(&custom, false), "{{.Name}}");
        assert_eq!(default_format(&custom, true), TABLE_FORMAT_KEY);
        assert_eq!(default_format(&empty, false), TABLE_FORMAT_KEY);
        assert_eq!(default_format(&empty, true), TABLE_FORMAT_KEY);
    }
}
