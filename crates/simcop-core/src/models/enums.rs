use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Personnel category a specialty belongs to. Stored as its camelCase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecialtyCategory {
    Officers,
    Ncos,
    ProfessionalSoldiers,
    RegularSoldiers,
    Civilians,
}

#[derive(Debug)]
pub struct EnumParseError {
    enum_name: &'static str,
    value: String,
}

impl EnumParseError {
    fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for EnumParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} value: {}", self.enum_name, self.value)
    }
}

impl std::error::Error for EnumParseError {}

impl SpecialtyCategory {
    pub const ALL: [Self; 5] = [
        Self::Officers,
        Self::Ncos,
        Self::ProfessionalSoldiers,
        Self::RegularSoldiers,
        Self::Civilians,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Officers => "officers",
            Self::Ncos => "ncos",
            Self::ProfessionalSoldiers => "professionalSoldiers",
            Self::RegularSoldiers => "regularSoldiers",
            Self::Civilians => "civilians",
        }
    }
}

impl std::fmt::Display for SpecialtyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecialtyCategory {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| EnumParseError::new("specialty_category", value))
    }
}
