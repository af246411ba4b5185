//! Name inflection.
//!
//! The matcher declines a single token with one rule group. The name
//! operations on [`RuleTable`](crate::RuleTable) split full names into
//! parts, infer gender where they can and assemble the result.

mod error;
mod matcher;
mod names;

pub use error::InflectError;
pub use matcher::inflect_token;
