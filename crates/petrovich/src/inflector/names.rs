//! Declension of whole names.

use unicode_segmentation::UnicodeSegmentation;

use crate::inflector::InflectError;
use crate::inflector::matcher::inflect_token;
use crate::rules::RuleTable;
use crate::types::{Case, Gender, NamePart};

impl RuleTable {
    /// Decline a single name part with an explicit gender.
    pub fn inflect_part(
        &self,
        part: NamePart,
        value: &str,
        case: Case,
        gender: Gender,
    ) -> Result<String, InflectError> {
        inflect_token(value, self.group(part), case, gender)
    }

    /// Decline a surname.
    pub fn inflect_lastname(
        &self,
        value: &str,
        case: Case,
        gender: Gender,
    ) -> Result<String, InflectError> {
        self.inflect_part(NamePart::Lastname, value, case, gender)
    }

    /// Decline a given name.
    pub fn inflect_firstname(
        &self,
        value: &str,
        case: Case,
        gender: Gender,
    ) -> Result<String, InflectError> {
        self.inflect_part(NamePart::Firstname, value, case, gender)
    }

    /// Decline a patronymic.
    pub fn inflect_middlename(
        &self,
        value: &str,
        case: Case,
        gender: Gender,
    ) -> Result<String, InflectError> {
        self.inflect_part(NamePart::Middlename, value, case, gender)
    }

    /// Decline a full name written as `Фамилия Имя Отчество`.
    ///
    /// The input is split on single spaces and must have exactly three
    /// parts. Gender comes from the patronymic (see
    /// [`Gender::from_patronymic`]). With `short`, only the surname is
    /// declined and the other two parts are reduced to initials:
    /// `Иванова И.И.`.
    ///
    /// # Errors
    ///
    /// Returns [`InflectError::Format`] for any other number of parts. The
    /// long form declines an empty part left by doubled spaces to itself;
    /// the short form has no initial for it and returns
    /// [`InflectError::EmptyPart`].
    pub fn inflect_full(&self, text: &str, case: Case, short: bool) -> Result<String, InflectError> {
        let tokens: Vec<&str> = text.trim().split(' ').collect();
        let &[lastname, firstname, middlename] = tokens.as_slice() else {
            return Err(reject(text, 3, tokens.len()));
        };

        let gender = Gender::from_patronymic(middlename);
        let lastname = self.inflect_lastname(lastname, case, gender)?;

        if short {
            if let Some(position) = tokens.iter().position(|t| t.is_empty()) {
                log::debug!("rejected short name '{text}': part {position} is empty");
                return Err(InflectError::EmptyPart {
                    input: text.to_string(),
                    position,
                });
            }
            return Ok(format!(
                "{lastname} {}.{}.",
                initial(firstname),
                initial(middlename)
            ));
        }

        let firstname = self.inflect_firstname(firstname, case, gender)?;
        let middlename = self.inflect_middlename(middlename, case, gender)?;
        Ok([lastname, firstname, middlename].join(" "))
    }

    /// Decline a surname and given name written as `Фамилия Имя`.
    ///
    /// Runs of spaces between and around the parts are ignored. There is
    /// no patronymic to infer gender from, so only rules that apply to any
    /// gender are used. With `short` the result is `Фамилия И.`.
    ///
    /// # Errors
    ///
    /// Returns [`InflectError::Format`] unless there are exactly two parts.
    /// Callers that prefer an empty string for rejected input can use
    /// `unwrap_or_default()`.
    pub fn inflect_pair(&self, text: &str, case: Case, short: bool) -> Result<String, InflectError> {
        let tokens: Vec<&str> = text.trim().split(' ').filter(|t| !t.is_empty()).collect();
        let &[lastname, firstname] = tokens.as_slice() else {
            return Err(reject(text, 2, tokens.len()));
        };

        let gender = Gender::Androgynous;
        let lastname = self.inflect_lastname(lastname, case, gender)?;

        if short {
            return Ok(format!("{lastname} {}.", initial(firstname)));
        }

        let firstname = self.inflect_firstname(firstname, case, gender)?;
        Ok(format!("{lastname} {firstname}"))
    }

    /// All five case forms of a full name, in [`Case::ALL`] order.
    pub fn declension_full(&self, text: &str, short: bool) -> Result<[String; 5], InflectError> {
        let [genitive, dative, accusative, instrumental, prepositional] =
            Case::ALL.map(|case| self.inflect_full(text, case, short));
        Ok([genitive?, dative?, accusative?, instrumental?, prepositional?])
    }

    /// All five case forms of a surname and given name.
    pub fn declension_pair(&self, text: &str, short: bool) -> Result<[String; 5], InflectError> {
        let [genitive, dative, accusative, instrumental, prepositional] =
            Case::ALL.map(|case| self.inflect_pair(text, case, short));
        Ok([genitive?, dative?, accusative?, instrumental?, prepositional?])
    }
}

fn reject(text: &str, expected: usize, found: usize) -> InflectError {
    log::debug!("rejected name '{text}': expected {expected} parts, got {found}");
    InflectError::Format {
        input: text.to_string(),
        expected,
        found,
    }
}

/// First grapheme of a name part.
fn initial(token: &str) -> &str {
    token.graphemes(true).next().unwrap_or_default()
}
