//! Staff entity type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{Gender, Record};
use crate::core::fields::{self, FieldKind, FieldSpec};

/// A staff row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub role: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
}

/// Field set for creating or updating a staff member
#[derive(Debug, Clone)]
pub struct StaffFields {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub role: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
}

static SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("first_name", "First Name", FieldKind::Text),
    FieldSpec::new("last_name", "Last Name", FieldKind::Text),
    FieldSpec::new("gender", "Gender", FieldKind::Choice(Gender::VALUES)),
    FieldSpec::new("date_of_birth", "Date of Birth", FieldKind::Date),
    FieldSpec::new("role", "Role", FieldKind::Text),
    FieldSpec::new("salary", "Salary", FieldKind::Decimal),
    FieldSpec::new("hire_date", "Hire Date", FieldKind::Date),
];

impl Record for Staff {
    const ENTITY: &'static str = "staff member";

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
            self.role.clone(),
            format!("{:.2}", self.salary),
            fields::format_date(self.hire_date),
        ]
    }
}
