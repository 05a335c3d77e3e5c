//! Error types for the translation core.

use thiserror::Error;

/// Errors that abort the translation of a document.
///
/// None of these are recovered inside the core: a document either translates
/// completely or the run fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("invalid escape pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("<{parent}> has no <{child}> element")]
    MissingElement { parent: String, child: String },

    #[error("<{element}> has no `{attribute}` attribute")]
    MissingAttribute { element: String, attribute: String },

    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    #[error("parameter `{parameter}` is documented but not declared by `{member}`")]
    UndeclaredParameter { member: String, parameter: String },

    #[error("unknown format: {0}. Use latex or plain")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
