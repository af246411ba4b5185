//! Implementation of the `petrovich inflect` command.

use std::path::PathBuf;

use petrovich::{Case, Gender, InflectError, NamePart, RuleTable};
use serde::Serialize;

use super::{load_rules, parse_case, RULES_ENV};

/// Arguments for the inflect command.
#[derive(Debug, clap::Args)]
pub struct InflectArgs {
    /// Rule file (.json)
    #[arg(long, env = RULES_ENV)]
    pub rules: PathBuf,

    /// Target case: gen, dat, acc, ins, prep (or 0-4)
    #[arg(short, long, value_parser = parse_case)]
    pub case: Case,

    /// Decline the surname only and abbreviate the rest to initials
    #[arg(long)]
    pub short: bool,

    /// The name is "Surname Given" rather than "Surname Given Patronymic"
    #[arg(long, conflicts_with = "part")]
    pub pair: bool,

    /// Decline a single name part instead of a full name
    #[arg(long)]
    pub part: Option<NamePart>,

    /// Gender used with --part
    #[arg(long, default_value = "androgynous", requires = "part")]
    pub gender: Gender,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Name to decline
    pub name: String,
}

/// JSON output for inflect results.
#[derive(Serialize)]
pub struct InflectResult {
    pub input: String,
    pub case: Case,
    pub result: String,
}

fn inflect(rules: &RuleTable, args: &InflectArgs) -> Result<String, InflectError> {
    if let Some(part) = args.part {
        rules.inflect_part(part, &args.name, args.case, args.gender)
    } else if args.pair {
        rules.inflect_pair(&args.name, args.case, args.short)
    } else {
        rules.inflect_full(&args.name, args.case, args.short)
    }
}

/// Run the inflect command.
pub fn run_inflect(args: InflectArgs) -> miette::Result<i32> {
    let rules = load_rules(&args.rules)?;
    log::debug!("inflecting '{}' into {}", args.name, args.case);

    match inflect(&rules, &args) {
        Ok(result) => {
            if args.json {
                let output = InflectResult {
                    input: args.name.clone(),
                    case: args.case,
                    result,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("Inflection error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
