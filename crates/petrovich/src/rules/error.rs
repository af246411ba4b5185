//! Error types for loading rule tables.

use std::path::PathBuf;

use thiserror::Error;

/// A serialized modification that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModificationError {
    /// A `-` appears after the appended text starts.
    #[error("strip markers must precede the suffix in modification '{modification}'")]
    MisplacedStripMarker { modification: String },
}

/// A rule whose shape is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("unknown gender '{value}', expected male, female or androgynous")]
    UnknownGender { value: String },

    /// Rules carry exactly one modification per case.
    #[error("rule has {found} modifications, expected 5 (one per case)")]
    ModCount { found: usize },

    #[error(transparent)]
    Modification(#[from] ModificationError),
}

/// Errors that occur while loading a rule table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the rule file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON or an invalid rule, with location.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}
