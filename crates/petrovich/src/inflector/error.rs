//! Error types for name inflection.

use thiserror::Error;

/// An error that occurred while declining a name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InflectError {
    /// The input does not split into the expected number of name parts.
    #[error("expected {expected} space-separated name parts, got {found} in '{input}'")]
    Format {
        input: String,
        expected: usize,
        found: usize,
    },

    /// Two separators in a row left a name part empty.
    #[error("name part {position} is empty in '{input}'")]
    EmptyPart { input: String, position: usize },

    /// A modification strips more characters than the token has.
    #[error(
        "modification '{modification}' strips {strip} characters from '{token}', which has {length}"
    )]
    StripUnderflow {
        token: String,
        modification: String,
        strip: usize,
        length: usize,
    },
}
