//! Medical record entity type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::core::fields::{self, FieldKind, FieldSpec};

/// A medical record row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: i64,
    pub prisoner_id: i64,
    pub doctor_id: i64,
    pub date_of_examination: NaiveDate,
    pub diagnosis: String,
    pub treatment: String,
}

/// Field set for creating or updating a medical record
#[derive(Debug, Clone)]
pub struct MedicalRecordFields {
    pub prisoner_id: i64,
    pub doctor_id: i64,
    pub date_of_examination: NaiveDate,
    pub diagnosis: String,
    pub treatment: String,
}

static SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("prisoner_id", "Prisoner ID", FieldKind::Reference),
    FieldSpec::new("doctor_id", "Doctor ID", FieldKind::Reference),
    FieldSpec::new("date_of_examination", "Examination Date", FieldKind::Date),
    FieldSpec::new("diagnosis", "Diagnosis", FieldKind::Multiline),
    FieldSpec::new("treatment", "Treatment", FieldKind::Multiline),
];

impl Record for MedicalRecord {
    const ENTITY: &'static str = "medical record";

    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_values(&self) -> Vec<String> {
        vec![
            self.prisoner_id.to_string(),
            self.doctor_id.to_string(),
            fields::format_date(self.date_of_examination),
            self.diagnosis.clone(),
            self.treatment.clone(),
        ]
    }
}
