//! Cell entity type

use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::core::fields::{FieldKind, FieldSpec};

/// A cell row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub id: i64,
    pub cell_number: String,
    pub capacity: i64,
    pub current_occupancy: i64,
    pub block_number: String,
}

/// Field set for creating or updating a cell
#[derive(Debug, Clone)]
pub struct CellFields {
    pub cell_number: String,
    pub capacity: i64,
    pub current_occupancy: i64,
    pub block_number: String,
}

static SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("cell_number", "Cell Number", FieldKind::Text),
    FieldSpec::new("capacity", "Capacity", FieldKind::Integer),
    FieldSpec::new("current_occupancy", "Current Occupancy", FieldKind::Integer),
    FieldSpec::new("block_number", "Block Number", FieldKind::Text),
];

impl Record for Cell {
    const ENTITY: &'static str = "cell";

    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn display_values(&self) -> Vec<String> {
        vec![
            self.cell_number.clone(),
            self.capacity.to_string(),
            self.current_occupancy.to_string(),
            self.block_number.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_values_match_schema() {
        let c = Cell {
            id: 1,
            cell_number: "A1".into(),
            capacity: 2,
            current_occupancy: 0,
            block_number: "B".into(),
        };
        assert_eq!(c.display_values().len(), Cell::schema().len());
        assert_eq!(c.display_values()[1], "2");
    }
}
