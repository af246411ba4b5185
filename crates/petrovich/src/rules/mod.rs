//! Declension rule tables.
//!
//! A rule table holds, for each name part, an ordered list of exception
//! rules and an ordered list of suffix rules. Tables are usually read from
//! a JSON rule file with [`RuleTable::load`]; every modification is parsed
//! and checked at load time.

pub mod error;
mod loader;
mod table;

pub use error::{LoadError, ModificationError, RuleError};
pub use table::{Rule, RuleGroup, RuleTable};
