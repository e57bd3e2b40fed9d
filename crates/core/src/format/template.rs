//! Minimal task template language
//!
//! Supported actions:
//! - `{{.Field}}` inserts a field value
//! - `{{json .Field}}` inserts a field value as a JSON string
//! - `{{json .}}` inserts all fields as a JSON object
//!
//! The two-character sequences `\t` and `\n` stand for tab and newline.

use regex::Regex;
use std::sync::LazyLock;

use super::fields::{Field, TaskFields};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field { field: Field, json: bool },
    AllJson,
}

/// A parsed template, ready to execute against [`TaskFields`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

const ACTION_PATTERN: &str = r"\{\{\s*(json\s+)?\.([A-Za-z]*)\s*\}\}";

static ACTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ACTION_PATTERN).expect("Template action pattern must compile"));

fn unescape(text: &str) -> String {
    text.replace("\\t", "\t").replace("\\n", "\n")
}

fn text_segment(text: &str) -> Result<Segment> {
    if text.contains("{{") {
        return Err(Error::Template(format!("malformed action in {text:?}")));
    }
    Ok(Segment::Text(text.to_string()))
}

impl Template {
    pub fn parse(source: &str) -> Result<Self> {
        let source = unescape(source);
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in ACTION_REGEX.captures_iter(&source) {
            let Some(action) = caps.get(0) else { continue };
            if action.start() > last {
                segments.push(text_segment(&source[last..action.start()])?);
            }
            last = action.end();

            let json = caps.get(1).is_some();
            let name = caps.get(2).map_or("", |m| m.as_str());
            let segment = match (name, json) {
                ("", true) => Segment::AllJson,
                ("", false) => {
                    return Err(Error::Template(
                        "'{{.}}' is not printable, use '{{json .}}'".to_string(),
                    ));
                }
                (name, json) => {
                    let field = Field::from_name(name).ok_or_else(|| {
                        Error::Template(format!("can't evaluate field {name} in task"))
                    })?;
                    Segment::Field { field, json }
                }
            };
            segments.push(segment);
        }
        if last < source.len() {
            segments.push(text_segment(&source[last..])?);
        }

        Ok(Self { segments })
    }

    /// Render one task
    pub fn execute(&self, fields: &TaskFields) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field { field, json: false } => out.push_str(fields.get(*field)),
                Segment::Field { field, json: true } => {
                    out.push_str(&serde_json::to_string(fields.get(*field))?)
                }
                Segment::AllJson => out.push_str(&serde_json::to_string(fields)?),
            }
        }
        Ok(out)
    }

    /// Render the header line, each field replaced by its column title
    pub fn header(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field { field, .. } => out.push_str(field.header()),
                Segment::AllJson => {}
            }
        }
        out
    }
}
