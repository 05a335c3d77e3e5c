//! Escaping of characters reserved by the output format.
//!
//! Escaping is not idempotent: `a_b` becomes `a\_b`, and escaping that again
//! yields `a\\_b`. Raw text must be escaped exactly once.

use crate::error::Result;
use regex::{Captures, Regex};

/// Replaces every occurrence of each reserved sequence with its escape.
#[derive(Debug, Clone)]
pub struct Escaper {
    /// `None` when there is nothing to escape
    pattern: Option<Regex>,
    table: &'static [(&'static str, &'static str)],
}

impl Escaper {
    pub fn new(table: &'static [(&'static str, &'static str)]) -> Result<Self> {
        let pattern = if table.is_empty() {
            None
        } else {
            let alternation = table
                .iter()
                .map(|(raw, _)| regex::escape(raw))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&alternation)?)
        };
        Ok(Escaper { pattern, table })
    }

    pub fn escape(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        pattern
            .replace_all(text, |caps: &Captures<'_>| {
                let matched = &caps[0];
                self.table
                    .iter()
                    .find(|(raw, _)| *raw == matched)
                    .map_or(matched, |(_, escaped)| *escaped)
                    .to_string()
            })
            .into_owned()
    }
}
