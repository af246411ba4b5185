//! Miette diagnostic wrapper for rule file errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for a rule file that failed to load.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid rule file: {message}")]
#[diagnostic(code(petrovich::rules))]
pub struct RulesDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl RulesDiagnostic {
    /// Create a diagnostic pointing at a 1-based line and column of `content`.
    pub fn new(path: &Path, content: &str, line: usize, column: usize, message: &str) -> Self {
        // Sum of (line_length + 1) for lines before the error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        RulesDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: message.to_string(),
            help: help_for(message),
        }
    }
}

fn help_for(message: &str) -> Option<String> {
    if message.contains("modifications") {
        Some("list one modification per case: genitive, dative, accusative, instrumental, prepositional".into())
    } else if message.contains("strip markers") {
        Some("write every '-' before the appended text, e.g. \"--ого\"".into())
    } else if message.contains("gender") {
        Some("use \"male\", \"female\" or \"androgynous\"".into())
    } else {
        None
    }
}
