use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use crate::inflector::InflectError;
use crate::rules::ModificationError;

/// Serialized form of [`Modification::Keep`].
const KEEP_MARKER: &str = ".";
/// One of these at the start of a modification strips one trailing grapheme.
const STRIP_MARKER: char = '-';

/// An edit that turns a nominative ending into the ending of one case.
///
/// Rule files encode modifications as strings: `.` leaves the word alone,
/// otherwise each leading `-` removes one trailing character and the rest
/// is appended. `--ого` applied to `Толстый` gives `Толстого`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Modification {
    /// Leave the token unchanged.
    Keep,
    /// Remove `strip` trailing graphemes, then append `append`.
    Replace { strip: usize, append: String },
}

impl Modification {
    /// Create a replacement edit.
    pub fn replace(strip: usize, append: impl Into<String>) -> Self {
        Modification::Replace {
            strip,
            append: append.into(),
        }
    }

    /// Parse the five serialized modifications of a rule, one per case.
    pub fn parse_all(mods: [&str; 5]) -> Result<[Modification; 5], ModificationError> {
        let [genitive, dative, accusative, instrumental, prepositional] = mods;
        Ok([
            genitive.parse()?,
            dative.parse()?,
            accusative.parse()?,
            instrumental.parse()?,
            prepositional.parse()?,
        ])
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Modification::Keep)
    }

    /// Apply this edit to `token`.
    ///
    /// Stripping works on grapheme clusters, so a letter written with a
    /// combining mark counts once.
    ///
    /// # Errors
    ///
    /// Returns [`InflectError::StripUnderflow`] when the edit strips more
    /// graphemes than the token has.
    ///
    /// ```
    /// use petrovich::Modification;
    ///
    /// let edit: Modification = "--ого".parse().unwrap();
    /// assert_eq!(edit.apply("Толстый").unwrap(), "Толстого");
    /// assert_eq!(Modification::Keep.apply("Дюма").unwrap(), "Дюма");
    /// ```
    pub fn apply(&self, token: &str) -> Result<String, InflectError> {
        let (strip, append) = match self {
            Modification::Keep => return Ok(token.to_string()),
            Modification::Replace { strip, append } => (*strip, append),
        };

        let length = token.graphemes(true).count();
        let Some(keep) = length.checked_sub(strip) else {
            return Err(InflectError::StripUnderflow {
                token: token.to_string(),
                modification: self.to_string(),
                strip,
                length,
            });
        };

        let mut result: String = token.graphemes(true).take(keep).collect();
        result.push_str(append);
        Ok(result)
    }
}

impl FromStr for Modification {
    type Err = ModificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == KEEP_MARKER {
            return Ok(Modification::Keep);
        }
        let append = s.trim_start_matches(STRIP_MARKER);
        if append.contains(STRIP_MARKER) {
            return Err(ModificationError::MisplacedStripMarker {
                modification: s.to_string(),
            });
        }
        // The marker is ASCII, so the byte difference is the marker count.
        let strip = s.len() - append.len();
        Ok(Modification::replace(strip, append))
    }
}

impl Display for Modification {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Modification::Keep => f.write_str(KEEP_MARKER),
            Modification::Replace { strip, append } => {
                for _ in 0..*strip {
                    write!(f, "{STRIP_MARKER}")?;
                }
                f.write_str(append)
            }
        }
    }
}
