//! CLI command implementations.

mod check;
mod inflect;
mod table;

use std::fs::read_to_string;
use std::path::Path;

use miette::miette;
use petrovich::{Case, LoadError, RuleTable, UnknownCase};

use crate::output::RulesDiagnostic;

pub use check::{run_check, CheckArgs};
pub use inflect::{run_inflect, InflectArgs};
pub use table::{run_table, TableArgs};

/// Environment variable naming the default rule file.
pub const RULES_ENV: &str = "PETROVICH_RULES";

/// Read and parse a rule file, rendering parse failures against its source.
fn load_rules(path: &Path) -> miette::Result<RuleTable> {
    let content = read_to_string(path)
        .map_err(|e| miette!("Cannot read rule file {}: {}", path.display(), e))?;
    parse_rules(path, &content)
}

/// Parse rule file content, converting parse errors into diagnostics.
fn parse_rules(path: &Path, content: &str) -> miette::Result<RuleTable> {
    let rules = match RuleTable::from_json_str(content) {
        Ok(rules) => rules,
        Err(LoadError::Parse {
            line,
            column,
            message,
            ..
        }) => return Err(RulesDiagnostic::new(path, content, line, column, &message).into()),
        Err(other) => return Err(miette!("{}: {}", path.display(), other)),
    };
    log::info!("loaded {} rules from {}", rules.rule_count(), path.display());
    Ok(rules)
}

/// Clap value parser for case names.
fn parse_case(s: &str) -> Result<Case, UnknownCase> {
    s.parse()
}
