use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Grammatical gender of the person a name belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    /// Unknown or either gender. Only rules that apply to any gender match.
    #[default]
    Androgynous,
}

impl Gender {
    /// Infer gender from a patronymic.
    ///
    /// Patronymics ending in `ич` are male and those ending in `на` are
    /// female. Anything else is [`Gender::Androgynous`]; callers that know
    /// better should pass the gender to the per-part operations directly.
    ///
    /// ```
    /// use petrovich::Gender;
    ///
    /// assert_eq!(Gender::from_patronymic("Сергеевич"), Gender::Male);
    /// assert_eq!(Gender::from_patronymic("Сергеевна"), Gender::Female);
    /// assert_eq!(Gender::from_patronymic("Оглы"), Gender::Androgynous);
    /// ```
    pub fn from_patronymic(patronymic: &str) -> Gender {
        let lower = patronymic.trim().to_lowercase();
        if lower.ends_with("ич") {
            Gender::Male
        } else if lower.ends_with("на") {
            Gender::Female
        } else {
            Gender::Androgynous
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Androgynous => "androgynous",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "androgynous" | "a" => Ok(Gender::Androgynous),
            other => Err(format!(
                "unknown gender '{other}', expected male, female or androgynous"
            )),
        }
    }
}

/// The genders a rule applies to.
///
/// Rule files write `androgynous` for rules that apply to everyone; those
/// load as [`RuleGender::Any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleGender {
    Any,
    Only(Gender),
}

impl RuleGender {
    /// Read the gender as written in a rule file.
    ///
    /// Only the exact values `male`, `female` and `androgynous` are
    /// accepted, unlike the lenient [`Gender`] parser used for user input.
    pub fn from_rule_value(value: &str) -> Option<RuleGender> {
        match value {
            "male" => Some(RuleGender::Only(Gender::Male)),
            "female" => Some(RuleGender::Only(Gender::Female)),
            "androgynous" => Some(RuleGender::Any),
            _ => None,
        }
    }

    /// Whether a rule with this gender applies to a name of `gender`.
    pub fn accepts(self, gender: Gender) -> bool {
        match self {
            RuleGender::Any => true,
            RuleGender::Only(only) => only == gender,
        }
    }
}

impl From<Gender> for RuleGender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Androgynous => RuleGender::Any,
            Gender::Male | Gender::Female => RuleGender::Only(gender),
        }
    }
}

impl From<RuleGender> for Gender {
    fn from(gender: RuleGender) -> Self {
        match gender {
            RuleGender::Any => Gender::Androgynous,
            RuleGender::Only(gender) => gender,
        }
    }
}
