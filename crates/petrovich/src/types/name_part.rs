use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One component of a Russian full name.
///
/// Each part is declined with its own rule group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePart {
    /// Фамилия.
    Lastname,
    /// Имя.
    Firstname,
    /// Отчество.
    Middlename,
}

impl NamePart {
    pub fn as_str(self) -> &'static str {
        match self {
            NamePart::Lastname => "lastname",
            NamePart::Firstname => "firstname",
            NamePart::Middlename => "middlename",
        }
    }
}

impl Display for NamePart {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamePart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lastname" | "surname" | "фамилия" => Ok(NamePart::Lastname),
            "firstname" | "given" | "имя" => Ok(NamePart::Firstname),
            "middlename" | "patronymic" | "отчество" => Ok(NamePart::Middlename),
            other => Err(format!(
                "unknown name part '{other}', expected lastname, firstname or middlename"
            )),
        }
    }
}
