//! Reading rule tables from JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::error::Category;

use crate::rules::error::LoadError;
use crate::rules::table::RuleTable;

/// Path reported for tables loaded from a string.
const STRING_SOURCE: &str = "<string>";

impl RuleTable {
    /// Load a rule table from a JSON file.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let rules = RuleTable::load("rules/rules.json")?;
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<RuleTable, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let table = parse_table(&content, path)?;
        log::debug!(
            "loaded {} rules from {}",
            table.rule_count(),
            path.display()
        );
        Ok(table)
    }

    /// Parse a rule table from a JSON string.
    ///
    /// Modifications are validated while parsing, so a table that loads
    /// never fails on a malformed edit later.
    ///
    /// ```
    /// use petrovich::RuleTable;
    ///
    /// let rules = RuleTable::from_json_str(r#"{
    ///     "lastname": { "exceptions": [], "suffixes": [] },
    ///     "firstname": { "exceptions": [], "suffixes": [] },
    ///     "middlename": {
    ///         "suffixes": [
    ///             { "gender": "male", "test": ["ич"], "mods": ["а", "у", "а", "ем", "е"] }
    ///         ]
    ///     }
    /// }"#).unwrap();
    /// assert_eq!(rules.rule_count(), 1);
    /// ```
    pub fn from_json_str(content: &str) -> Result<RuleTable, LoadError> {
        parse_table(content, Path::new(STRING_SOURCE))
    }
}

fn parse_table(content: &str, path: &Path) -> Result<RuleTable, LoadError> {
    serde_json::from_str(content).map_err(|e| parse_error(path.to_path_buf(), content, &e))
}

/// Convert a serde_json error, moving its position into the error fields.
///
/// serde_json reports a rejected rule after the list it belongs to, or at
/// the next rule in that list; such errors are moved to the brace that
/// opens the rejected rule.
fn parse_error(path: PathBuf, content: &str, err: &serde_json::Error) -> LoadError {
    let mut message = err.to_string();
    if let Some(index) = message.rfind(" at line ") {
        message.truncate(index);
    }

    let (line, column) = match err.classify() {
        Category::Data => rejected_object_start(content, err.line(), err.column())
            .unwrap_or((err.line(), err.column())),
        _ => (err.line(), err.column()),
    };

    LoadError::Parse {
        path,
        line,
        column,
        message,
    }
}

/// 1-based line and column of the `{` opening the object that closes
/// right before the reported position, if one does.
///
/// `column` counts the bytes consumed on `line`, as serde_json does.
fn rejected_object_start(content: &str, line: usize, column: usize) -> Option<(usize, usize)> {
    let line_start: usize = content
        .split('\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    let end = (line_start + column).min(content.len());
    let before = content.get(..end)?.trim_end();
    let before = before
        .strip_suffix([']', ','])
        .unwrap_or(before)
        .trim_end();
    if !before.ends_with('}') {
        return None;
    }

    let start = object_start(content, before.len() - 1)?;
    let line = content[..start].matches('\n').count() + 1;
    let column = start - content[..start].rfind('\n').map_or(0, |i| i + 1) + 1;
    Some((line, column))
}

/// Byte offset of the `{` matching the `}` at `close`.
fn object_start(content: &str, close: usize) -> Option<usize> {
    let mut opens = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (index, byte) in content.bytes().enumerate().take(close + 1) {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' => opens.push(index),
            b'}' => {
                let start = opens.pop()?;
                if index == close {
                    return Some(start);
                }
            }
            _ => {}
        }
    }

    None
}
