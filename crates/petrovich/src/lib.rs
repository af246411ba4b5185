//! Declension of Russian personal names.
//!
//! Surnames, given names and patronymics are declined into the five
//! oblique cases by a [`RuleTable`]: ordered exception and suffix rules per
//! name part, usually loaded from a JSON rule file.
//!
//! ```
//! use petrovich::{Case, RuleTable};
//!
//! let rules = RuleTable::from_json_str(r#"{
//!     "lastname": { "suffixes": [
//!         { "gender": "male", "test": ["в"], "mods": ["а", "у", "а", "ым", "е"] }
//!     ] },
//!     "firstname": { "suffixes": [
//!         { "gender": "male", "test": ["н"], "mods": ["а", "у", "а", "ом", "е"] }
//!     ] },
//!     "middlename": { "suffixes": [
//!         { "gender": "male", "test": ["ич"], "mods": ["а", "у", "а", "ем", "е"] }
//!     ] }
//! }"#).unwrap();
//!
//! let full = rules.inflect_full("Иванов Иван Иванович", Case::Dative, false).unwrap();
//! assert_eq!(full, "Иванову Ивану Ивановичу");
//!
//! let short = rules.inflect_full("Иванов Иван Иванович", Case::Genitive, true).unwrap();
//! assert_eq!(short, "Иванова И.И.");
//! ```

pub mod inflector;
pub mod rules;
pub mod types;

pub use inflector::{InflectError, inflect_token};
pub use rules::{LoadError, ModificationError, Rule, RuleError, RuleGroup, RuleTable};
pub use types::{
    Case, Gender, Modification, NamePart, RuleGender, Tag, UnknownCase, compute_suggestions,
};
