//! Output formats for task listings
//!
//! A format is a template string. The keys `table`, `raw` and `json` expand
//! to built-in templates; anything else is used as a template verbatim. A
//! template starting with `table` is rendered as aligned columns with a header.

pub mod fields;
pub mod template;
pub mod writer;

pub use fields::{Field, TaskFields, human_duration};
pub use template::Template;
pub use writer::FormatWriter;

pub const TABLE_FORMAT_KEY: &str = "table";
pub const RAW_FORMAT_KEY: &str = "raw";
pub const JSON_FORMAT_KEY: &str = "json";

const DEFAULT_TASK_TABLE_FORMAT: &str = "table {{.ID}}\t{{.Name}}\t{{.Image}}\t{{.Node}}\t{{.DesiredState}}\t{{.CurrentState}}\t{{.Error}}\t{{.Ports}}";
const DEFAULT_QUIET_FORMAT: &str = "{{.ID}}";
const RAW_TASK_FORMAT: &str =
    "id: {{.ID}}\nname: {{.Name}}\nimage: {{.Image}}\nnode: {{.Node}}\nports: {{.Ports}}\n";
const RAW_QUIET_FORMAT: &str = "id: {{.ID}}";
const JSON_TASK_FORMAT: &str = "{{json .}}";

/// A resolved output format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format(String);

impl Format {
    pub fn new(format: impl Into<String>) -> Self {
        Self(format.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether output is a human-oriented table with a header row
    pub fn is_table(&self) -> bool {
        self.0.starts_with(TABLE_FORMAT_KEY)
    }

    /// The template to execute per task, without the `table` directive
    pub fn template_text(&self) -> &str {
        match self.0.strip_prefix(TABLE_FORMAT_KEY) {
            Some(rest) => rest.trim_matches(' '),
            None => &self.0,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Expand a format key into the task template it stands for
pub fn new_task_format(source: &str, quiet: bool) -> Format {
    let format = match source {
        TABLE_FORMAT_KEY if quiet => DEFAULT_QUIET_FORMAT,
        TABLE_FORMAT_KEY => DEFAULT_TASK_TABLE_FORMAT,
        RAW_FORMAT_KEY if quiet => RAW_QUIET_FORMAT,
        RAW_FORMAT_KEY => RAW_TASK_FORMAT,
        JSON_FORMAT_KEY => JSON_TASK_FORMAT,
        custom => custom,
    };
    Format::new(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_key_expands_to_default_columns() {
        let format = new_task_format(TABLE_FORMAT_KEY, false);
        assert!(format.is_table());
        assert!(format.template_text().starts_with("{{.ID}}\t{{.Name}}"));
    }

    #[test]
    fn test_quiet_formats_only_show_ids() {
        let format = new_task_format(TABLE_FORMAT_KEY, true);
        assert_eq!(format.as_str(), "{{.ID}}");
        assert!(!format.is_table());

        assert_eq!(new_task_format(RAW_FORMAT_KEY, true).as_str(), "id: {{.ID}}");
    }

    #[test]
    fn test_json_and_custom_formats_are_not_tables() {
        let json = new_task_format(JSON_FORMAT_KEY, false);
        assert_eq!(json.as_str(), "{{json .}}");
        assert!(!json.is_table());

        let custom = new_task_format("{{.Name}} on {{.Node}}", false);
        assert_eq!(custom.template_text(), "{{.Name}} on {{.Node}}");
        assert!(!custom.is_table());
    }

    #[test]
    fn test_custom_table_format_strips_directive() {
        let format = new_task_format("table   {{.Name}}\\t{{.Node}}", false);
        assert!(format.is_table());
        assert_eq!(format.template_text(), "{{.Name}}\\t{{.Node}}");
    }
}
