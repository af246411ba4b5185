//! Implementation of the `petrovich table` command.

use std::path::PathBuf;

use super::{load_rules, RULES_ENV};
use crate::output::table::format_declension_table;

/// Arguments for the table command.
#[derive(Debug, clap::Args)]
pub struct TableArgs {
    /// Rule file (.json)
    #[arg(long, env = RULES_ENV)]
    pub rules: PathBuf,

    /// Decline the surname only and abbreviate the rest to initials
    #[arg(long)]
    pub short: bool,

    /// The name is "Surname Given" rather than "Surname Given Patronymic"
    #[arg(long)]
    pub pair: bool,

    /// Name to decline
    pub name: String,
}

/// Run the table command.
pub fn run_table(args: TableArgs) -> miette::Result<i32> {
    let rules = load_rules(&args.rules)?;

    let forms = if args.pair {
        rules.declension_pair(&args.name, args.short)
    } else {
        rules.declension_full(&args.name, args.short)
    };

    match forms {
        Ok(forms) => {
            println!("{}", format_declension_table(args.name.trim(), &forms));
            Ok(exitcode::OK)
        }
        Err(e) => {
            eprintln!("Inflection error: {}", e);
            Ok(exitcode::DATAERR)
        }
    }
}
