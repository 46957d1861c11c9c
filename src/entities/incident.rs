//! Incident report entity type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::core::fields::{self, FieldKind, FieldSpec};

/// An incident report row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentReport {
    pub id: i64,
    pub prisoner_id: i64,
    pub staff_id: i64,
    pub incident_date: NaiveDate,
    pub incident_description: String,
}

/// Field set for creating or updating an incident report
#[derive(Debug, Clone)]
pub struct IncidentReportFields {
    pub prisoner_id: i64,
    pub staff_id: i64,
    pub incident_date: NaiveDate,
    pub incident_description: String,
}

static SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("prisoner_id", "Prisoner ID", FieldKind::Reference),
    FieldSpec::new("staff_id", "Staff ID", FieldKind::Reference),
    FieldSpec::new("incident_date", "Incident Date", FieldKind::Date),
    FieldSpec::new("incident_description", "Description", FieldKind::Multiline),
];

impl Record for IncidentReport {
    const ENTITY: &'static str = "incident report";

    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_values(&self) -> Vec<String> {
        vec![
            self.prisoner_id.to_string(),
            self.staff_id.to_string(),
            fields::format_date(self.incident_date),
            self.incident_description.clone(),
        ]
    }
}
