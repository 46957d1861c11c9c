//! Record trait - common interface for all entity types

use serde::{de::DeserializeOwned, Serialize};

use crate::core::fields::FieldSpec;

/// Common trait for all warden record types
pub trait Record: Serialize + DeserializeOwned {
    /// Lowercase entity name for messages (e.g., "prisoner")
    const ENTITY: &'static str;

    /// Declarative field schema, in column order (excluding the id)
    fn schema() -> &'static [FieldSpec];

    /// The record's surrogate id
    fn id(&self) -> i64;

    /// Field values rendered for display, matching `schema()` order
    ///
    /// Dates are in `%Y-%m-%d` form; NULLs render as empty strings.
    fn display_values(&self) -> Vec<String>;
}

/// Gender values recorded on prisoner and staff rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Valid values, as shown in form hints and choice fields
    pub const VALUES: &'static [&'static str] = &["Male", "Female", "Other"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("unknown gender: '{}' (valid: Male, Female, Other)", s)),
        }
    }
}

impl rusqlite::types::ToSql for Gender {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl rusqlite::types::FromSql for Gender {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| rusqlite::types::FromSqlError::Other(e.into()))
    }
}
