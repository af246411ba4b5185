mod case;
mod gender;
mod modification;
mod name_part;
mod tag;

pub use case::{Case, UnknownCase, compute_suggestions};
pub use gender::{Gender, RuleGender};
pub use modification::Modification;
pub use name_part::NamePart;
pub use tag::Tag;
