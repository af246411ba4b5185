//! Rule matching for a single name token.

use unicode_segmentation::UnicodeSegmentation;

use crate::inflector::InflectError;
use crate::rules::RuleGroup;
use crate::types::{Case, Gender};

/// Separator between the parts of a compound name such as `Салтыков-Щедрин`.
const COMPOUND_SEPARATOR: char = '-';

/// Decline one token with the rules of `group`.
///
/// Matching proceeds in this order:
/// 1. Exceptions, by whole-token comparison. A hit is applied to the token
///    as is, even when it contains a hyphen.
/// 2. Otherwise, each hyphen-separated part is matched against the suffix
///    rules on its own and the parts are joined back together.
///
/// Only rules that accept `gender` take part. A token nothing matches is
/// returned unchanged.
///
/// # Errors
///
/// Returns [`InflectError::StripUnderflow`] if the matched modification
/// removes more characters than the token has.
pub fn inflect_token(
    token: &str,
    group: &RuleGroup,
    case: Case,
    gender: Gender,
) -> Result<String, InflectError> {
    let token = token.trim();

    if let Some(result) = match_exception(token, group, case, gender)? {
        return Ok(result);
    }

    if token.contains(COMPOUND_SEPARATOR) {
        let parts = token
            .split(COMPOUND_SEPARATOR)
            .map(|part| match_suffix(part, group, case, gender))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(parts.join("-"));
    }

    match_suffix(token, group, case, gender)
}

/// Apply the first exception whose test list contains the lowercased token.
fn match_exception(
    token: &str,
    group: &RuleGroup,
    case: Case,
    gender: Gender,
) -> Result<Option<String>, InflectError> {
    let lower = token.to_lowercase();

    for rule in group.exceptions.iter().filter(|rule| rule.accepts(gender)) {
        if rule.test.iter().any(|test| *test == lower) {
            log::trace!("'{token}' matched exception {:?} for {case}", rule.test);
            return rule.modification(case).apply(token).map(Some);
        }
    }

    Ok(None)
}

/// Apply the first suffix rule that ends the token and changes it.
///
/// A pattern must be strictly shorter than the token. A rule that keeps
/// the token for this case does not stop the scan, so a later and more
/// general rule can still apply.
fn match_suffix(
    token: &str,
    group: &RuleGroup,
    case: Case,
    gender: Gender,
) -> Result<String, InflectError> {
    let lower = token.to_lowercase();
    let length = lower.graphemes(true).count();

    for rule in group.suffixes.iter().filter(|rule| rule.accepts(gender)) {
        let modification = rule.modification(case);
        for pattern in &rule.test {
            if pattern.graphemes(true).count() < length
                && lower.ends_with(pattern.as_str())
                && !modification.is_keep()
            {
                log::trace!("'{token}' matched suffix '{pattern}' for {case}");
                return modification.apply(token);
            }
        }
    }

    Ok(token.to_string())
}
