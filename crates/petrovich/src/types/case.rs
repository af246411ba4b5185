use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::levenshtein;
use thiserror::Error;

/// A grammatical case a name can be declined into.
///
/// The nominative is the input form and has no variant here. The ordinal
/// of each case (0 to 4) is the position of its modification in a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Родительный.
    Genitive,
    /// Дательный.
    Dative,
    /// Винительный.
    Accusative,
    /// Творительный.
    Instrumental,
    /// Предложный.
    Prepositional,
}

/// Names accepted by [`Case::from_str`], grouped per case.
const CASE_NAMES: [(Case, &[&str]); 5] = [
    (Case::Genitive, &["gen", "genitive", "родительный", "рп"]),
    (Case::Dative, &["dat", "dative", "дательный", "дп"]),
    (Case::Accusative, &["acc", "accusative", "винительный", "вп"]),
    (Case::Instrumental, &["ins", "instrumental", "творительный", "тп"]),
    (Case::Prepositional, &["prep", "prepositional", "предложный", "пп"]),
];

impl Case {
    /// All cases in ordinal order.
    pub const ALL: [Case; 5] = [
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    /// The ordinal of this case, 0 through 4.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a case by ordinal.
    pub fn from_index(index: usize) -> Option<Case> {
        Self::ALL.get(index).copied()
    }

    /// Short key used for display and on the command line.
    pub fn key(self) -> &'static str {
        CASE_NAMES[self.index()].1[0]
    }
}

impl Display for Case {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.key())
    }
}

impl TryFrom<usize> for Case {
    type Error = UnknownCase;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Case::from_index(index).ok_or_else(|| UnknownCase {
            name: index.to_string(),
            suggestions: Vec::new(),
        })
    }
}

impl FromStr for Case {
    type Err = UnknownCase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if let Ok(index) = name.parse::<usize>() {
            return Case::try_from(index);
        }
        for (case, names) in CASE_NAMES {
            if names.contains(&name.as_str()) {
                return Ok(case);
            }
        }
        let available: Vec<String> = CASE_NAMES
            .iter()
            .flat_map(|(_, names)| names.iter().map(|n| (*n).to_string()))
            .collect();
        Err(UnknownCase {
            suggestions: compute_suggestions(&name, &available),
            name: s.to_string(),
        })
    }
}

/// A case name or ordinal that does not name any [`Case`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case '{name}'{}", format_suggestions(suggestions))]
pub struct UnknownCase {
    pub name: String,
    pub suggestions: Vec<String>,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Find up to three entries of `available` within a small edit distance
/// of `key`, closest first.
///
/// Keys of up to three characters allow one edit, longer keys allow two.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() > 3 { 2 } else { 1 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
