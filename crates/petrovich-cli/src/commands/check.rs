//! Implementation of the `petrovich check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde::Serialize;

use super::parse_rules;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Rule files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckResult {
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    rules: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::new();

    for path in &args.files {
        let file = path.display().to_string();
        let content = match read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                if !args.json {
                    eprintln!("{} {}: {}", "error".red().bold(), file, e);
                }
                results.push(CheckResult {
                    file,
                    valid: false,
                    rules: None,
                    error: Some(e.to_string()),
                });
                continue;
            }
        };

        match parse_rules(path, &content) {
            Ok(rules) => {
                if !args.json {
                    println!(
                        "{} {} ({} rules)",
                        "ok".green().bold(),
                        file,
                        rules.rule_count()
                    );
                }
                results.push(CheckResult {
                    file,
                    valid: true,
                    rules: Some(rules.rule_count()),
                    error: None,
                });
            }
            Err(report) => {
                let error = report.to_string();
                if !args.json {
                    eprintln!("{:?}", report);
                }
                results.push(CheckResult {
                    file,
                    valid: false,
                    rules: None,
                    error: Some(error),
                });
            }
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).expect("JSON serialization should not fail")
        );
    }

    if results.iter().all(|r| r.valid) {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
