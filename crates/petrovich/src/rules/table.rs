//! In-memory rule table.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::rules::error::RuleError;
use crate::types::{Case, Gender, Modification, NamePart, RuleGender, Tag};

/// A single declension rule.
///
/// Exception rules match when a lowercased token equals one of the test
/// strings. Suffix rules match when it ends with one. Either way the
/// modification for the requested case is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRule", into = "RawRule")]
pub struct Rule {
    pub gender: RuleGender,
    /// Lowercase test strings, in table order.
    pub test: Vec<String>,
    /// One modification per case, indexed by [`Case::index`].
    pub mods: [Modification; 5],
    pub tags: Vec<Tag>,
}

impl Rule {
    /// Create a rule. Test strings are lowercased.
    ///
    /// ```
    /// use petrovich::{Gender, Modification, Rule};
    ///
    /// let rule = Rule::new(
    ///     Gender::Male,
    ///     ["ий"],
    ///     Modification::parse_all(["-я", "-ю", "-я", "-ем", "-и"]).unwrap(),
    /// );
    /// assert_eq!(rule.test, vec!["ий"]);
    /// ```
    pub fn new(
        gender: impl Into<RuleGender>,
        test: impl IntoIterator<Item = impl Into<String>>,
        mods: [Modification; 5],
    ) -> Self {
        Self {
            gender: gender.into(),
            test: test.into_iter().map(|t| t.into().to_lowercase()).collect(),
            mods,
            tags: Vec::new(),
        }
    }

    /// Attach informational tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<Tag>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The modification this rule applies for `case`.
    pub fn modification(&self, case: Case) -> &Modification {
        &self.mods[case.index()]
    }

    /// Whether this rule applies to names of `gender`.
    pub fn accepts(&self, gender: Gender) -> bool {
        self.gender.accepts(gender)
    }
}

/// The rule file's representation of a [`Rule`].
#[derive(Serialize, Deserialize)]
struct RawRule {
    gender: String,
    test: Vec<String>,
    mods: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<Tag>,
}

impl TryFrom<RawRule> for Rule {
    type Error = RuleError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        let gender = RuleGender::from_rule_value(&raw.gender).ok_or_else(|| {
            RuleError::UnknownGender {
                value: raw.gender.clone(),
            }
        })?;

        let mods: [&str; 5] = match raw.mods.as_slice() {
            [a, b, c, d, e] => [a.as_str(), b.as_str(), c.as_str(), d.as_str(), e.as_str()],
            other => return Err(RuleError::ModCount { found: other.len() }),
        };

        Ok(Rule::new(gender, raw.test, Modification::parse_all(mods)?).with_tags(raw.tags))
    }
}

impl From<Rule> for RawRule {
    fn from(rule: Rule) -> Self {
        RawRule {
            gender: Gender::from(rule.gender).to_string(),
            test: rule.test,
            mods: rule.mods.iter().map(ToString::to_string).collect(),
            tags: rule.tags,
        }
    }
}

/// The rules for one name part.
///
/// Exceptions are checked before suffixes. Within each list the first
/// matching rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct RuleGroup {
    #[builder(default)]
    #[serde(default)]
    pub exceptions: Vec<Rule>,

    #[builder(default)]
    #[serde(default)]
    pub suffixes: Vec<Rule>,
}

impl RuleGroup {
    /// Total number of exception and suffix rules.
    pub fn len(&self) -> usize {
        self.exceptions.len() + self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exceptions.is_empty() && self.suffixes.is_empty()
    }
}

/// Declension rules for all three name parts.
///
/// A table is plain immutable data once built, so one instance can be
/// shared by reference (or `Arc`) between any number of threads.
///
/// # Example
///
/// ```
/// use petrovich::{Case, Gender, Modification, Rule, RuleGroup, RuleTable};
///
/// let rules = RuleTable::builder()
///     .middlename(
///         RuleGroup::builder()
///             .suffixes(vec![Rule::new(
///                 Gender::Male,
///                 ["ич"],
///                 Modification::parse_all(["а", "у", "а", "ем", "е"]).unwrap(),
///             )])
///             .build(),
///     )
///     .build();
///
/// let declined = rules
///     .inflect_middlename("Петрович", Case::Dative, Gender::Male)
///     .unwrap();
/// assert_eq!(declined, "Петровичу");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct RuleTable {
    #[builder(default)]
    pub lastname: RuleGroup,

    #[builder(default)]
    pub firstname: RuleGroup,

    #[builder(default)]
    pub middlename: RuleGroup,
}

impl RuleTable {
    /// The rule group used to decline `part`.
    pub fn group(&self, part: NamePart) -> &RuleGroup {
        match part {
            NamePart::Lastname => &self.lastname,
            NamePart::Firstname => &self.firstname,
            NamePart::Middlename => &self.middlename,
        }
    }

    /// Total number of rules across all groups.
    pub fn rule_count(&self) -> usize {
        self.lastname.len() + self.firstname.len() + self.middlename.len()
    }
}
