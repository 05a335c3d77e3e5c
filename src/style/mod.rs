//! Style module — the output vocabulary as a value.
//!
//! A [`Style`] holds one entry per overridable rendering rule. The translator,
//! extractor and assembler are written once against this value; a new output
//! format is a new `Style` constant, not a new code path.

pub mod latex;
pub mod plain;

use crate::error::{Error, Result};
use crate::model::{Level, ListKind};
use crate::refs::RefTarget;

/// Fields of one rendered member block.
#[derive(Debug, Clone, Copy)]
pub struct ApiDoc<'a> {
    pub level: Level,
    pub label: &'a str,
    pub name: &'a str,
    pub brief: &'a str,
    pub prototype: &'a str,
    pub params: &'a str,
    pub ret: &'a str,
    pub details: &'a str,
}

/// Rendering policy for one output format.
#[derive(Clone, Copy)]
pub struct Style {
    pub name: &'static str,
    /// Reserved sequences and their literal-safe replacements
    pub escapes: &'static [(&'static str, &'static str)],
    pub code_span: fn(&str) -> String,
    pub cross_ref: fn(&RefTarget) -> String,
    pub section_ref: fn(&str) -> String,
    pub object_ref: fn(&str) -> String,
    pub auto_ref: fn(&str) -> String,
    pub error_placeholder: &'static str,
    pub list: fn(ListKind, &str) -> String,
    pub list_item: fn(&str) -> String,
    /// `(type, name, description)` of one parameter
    pub param: fn(&str, &str, &str) -> String,
    pub no_params: &'static str,
    pub no_return: &'static str,
    /// Placeholder for missing content
    pub todo: &'static str,
    /// Whole output for a document without members
    pub no_methods: &'static str,
    pub api_doc: fn(&ApiDoc<'_>) -> String,
}

impl Style {
    /// Returns `text` unless it is empty, in which case the placeholder.
    pub fn todo_if_empty(&self, text: &str) -> String {
        if text.is_empty() {
            self.todo.to_string()
        } else {
            text.to_string()
        }
    }
}

/// Look up a style by format name.
pub fn by_name(format: &str) -> Result<&'static Style> {
    match format {
        "latex" | "tex" => Ok(&latex::LATEX),
        "plain" | "text" => Ok(&plain::PLAIN),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}
