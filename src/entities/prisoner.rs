//! Prisoner entity type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{Gender, Record};
use crate::core::fields::{self, FieldKind, FieldSpec};

/// Custody status of a prisoner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrisonerStatus {
    Incarcerated,
    Released,
    Paroled,
}

impl PrisonerStatus {
    /// Valid values, as shown in form hints and choice fields
    pub const VALUES: &'static [&'static str] = &["Incarcerated", "Released", "Paroled"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrisonerStatus::Incarcerated => "Incarcerated",
            PrisonerStatus::Released => "Released",
            PrisonerStatus::Paroled => "Paroled",
        }
    }
}

impl std::fmt::Display for PrisonerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PrisonerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incarcerated" => Ok(PrisonerStatus::Incarcerated),
            "released" => Ok(PrisonerStatus::Released),
            "paroled" => Ok(PrisonerStatus::Paroled),
            _ => Err(format!(
                "unknown status: '{}' (valid: Incarcerated, Released, Paroled)",
                s
            )),
        }
    }
}

impl rusqlite::types::ToSql for PrisonerStatus {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl rusqlite::types::FromSql for PrisonerStatus {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| rusqlite::types::FromSqlError::Other(e.into()))
    }
}

/// A prisoner row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prisoner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub date_of_incarceration: NaiveDate,
    pub date_of_release: Option<NaiveDate>,
    pub crime_committed: String,
    pub status: PrisonerStatus,
    pub cell_id: Option<i64>,
}

/// Field set for creating or updating a prisoner
#[derive(Debug, Clone)]
pub struct PrisonerFields {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub date_of_incarceration: NaiveDate,
    pub date_of_release: Option<NaiveDate>,
    pub crime_committed: String,
    pub status: PrisonerStatus,
    pub cell_id: Option<i64>,
}

static SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("first_name", "First Name", FieldKind::Text),
    FieldSpec::new("last_name", "Last Name", FieldKind::Text),
    FieldSpec::new("gender", "Gender", FieldKind::Choice(Gender::VALUES)),
    FieldSpec::new("date_of_birth", "Date of Birth", FieldKind::Date),
    FieldSpec::new("date_of_incarceration", "Date of Incarceration", FieldKind::Date),
    FieldSpec::new("date_of_release", "Date of Release", FieldKind::OptionalDate),
    FieldSpec::new("crime_committed", "Crime Committed", FieldKind::Multiline),
    FieldSpec::new("status", "Status", FieldKind::Choice(PrisonerStatus::VALUES)),
    FieldSpec::new("cell_id", "Cell ID", FieldKind::OptionalReference),
];

impl Record for Prisoner {
    const ENTITY: &'static str = "prisoner";

    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_values(&self) -> Vec<String> {
        vec![
            self.first_name.clone(),
            self.last_name.clone(),
            self.gender.to_string(),
            fields::format_date(self.date_of_birth),
            fields::format_date(self.date_of_incarceration),
            fields::format_date_opt(self.date_of_release),
            self.crime_committed.clone(),
            self.status.to_string(),
            self.cell_id.map(|id| id.to_string()).unwrap_or_default(),
        ]
    }
}
