//! Visitor entity type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::core::fields::{self, FieldKind, FieldSpec};

/// A visitor row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visitor {
    pub id: i64,
    pub prisoner_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub relationship: String,
    pub visit_date: NaiveDate,
    pub visit_time: String,
}

/// Field set for creating or updating a visitor
#[derive(Debug, Clone)]
pub struct VisitorFields {
    pub prisoner_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub relationship: String,
    pub visit_date: NaiveDate,
    pub visit_time: String,
}

static SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("prisoner_id", "Prisoner ID", FieldKind::Reference),
    FieldSpec::new("first_name", "First Name", FieldKind::Text),
    FieldSpec::new("last_name", "Last Name", FieldKind::Text),
    FieldSpec::new("relationship", "Relationship", FieldKind::Text),
    FieldSpec::new("visit_date", "Visit Date", FieldKind::Date),
    FieldSpec::new("visit_time", "Visit Time", FieldKind::Time),
];

impl Record for Visitor {
    const ENTITY: &'static str = "visitor";

    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_values(&self) -> Vec<String> {
        vec![
            self.prisoner_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.relationship.clone(),
            fields::format_date(self.visit_date),
            self.visit_time.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_values_match_schema() {
        let v = Visitor {
            id: 1,
            prisoner_id: 4,
            first_name: "Mary".into(),
            last_name: "Doe".into(),
            relationship: "sister".into(),
            visit_date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            visit_time: "14:30".into(),
        };
        assert_eq!(v.display_values().len(), Visitor::schema().len());
        assert_eq!(v.display_values()[4], "2024-06-02");
    }
}
