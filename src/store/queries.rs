//! CRUD statements for the six record tables
//!
//! Each entity gets the same five operations: add, update, delete, get,
//! list. Deletes that other tables may point at (cells, staff) count their
//! dependents first and refuse to proceed while any remain.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

use super::RecordStore;
use crate::core::fields::{format_date, DATE_FORMAT};
use crate::entities::{
    Cell, CellFields, IncidentReport, IncidentReportFields, MedicalRecord, MedicalRecordFields,
    Prisoner, PrisonerFields, Staff, StaffFields, Visitor, VisitorFields,
};
use crate::store::StoreError;

/// Read a TEXT column as a date
fn date_col(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let s: String = row.get(idx)?;
    NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Read a nullable TEXT column as a date
fn date_col_opt(row: &Row, idx: usize) -> rusqlite::Result<Option<NaiveDate>> {
    let s: Option<String> = row.get(idx)?;
    match s {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, DATE_FORMAT).map(Some).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        }),
    }
}

// =========================================================================
// Prisoner
// =========================================================================

fn prisoner_from_row(row: &Row) -> rusqlite::Result<Prisoner> {
    Ok(Prisoner {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        gender: row.get(3)?,
        date_of_birth: date_col(row, 4)?,
        date_of_incarceration: date_col(row, 5)?,
        date_of_release: date_col_opt(row, 6)?,
        crime_committed: row.get(7)?,
        status: row.get(8)?,
        cell_id: row.get(9)?,
    })
}

const PRISONER_COLUMNS: &str = "prisoner_id, first_name, last_name, gender, date_of_birth, \
     date_of_incarceration, date_of_release, crime_committed, status, cell_id";

impl RecordStore {
    /// Insert a prisoner; returns the assigned id
    pub fn add_prisoner(&self, fields: &PrisonerFields) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO Prisoner (first_name, last_name, gender, date_of_birth, \
             date_of_incarceration, date_of_release, crime_committed, status, cell_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                fields.first_name,
                fields.last_name,
                fields.gender,
                format_date(fields.date_of_birth),
                format_date(fields.date_of_incarceration),
                fields.date_of_release.map(format_date),
                fields.crime_committed,
                fields.status,
                fields.cell_id,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Replace every field of an existing prisoner
    pub fn update_prisoner(&self, id: i64, fields: &PrisonerFields) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE Prisoner SET first_name=?1, last_name=?2, gender=?3, date_of_birth=?4, \
             date_of_incarceration=?5, date_of_release=?6, crime_committed=?7, status=?8, \
             cell_id=?9 WHERE prisoner_id=?10",
            params![
                fields.first_name,
                fields.last_name,
                fields.gender,
                format_date(fields.date_of_birth),
                format_date(fields.date_of_incarceration),
                fields.date_of_release.map(format_date),
                fields.crime_committed,
                fields.status,
                fields.cell_id,
                id,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "prisoner", id });
        }
        Ok(())
    }

    pub fn delete_prisoner(&self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM Prisoner WHERE prisoner_id=?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "prisoner", id });
        }
        Ok(())
    }

    pub fn get_prisoner(&self, id: i64) -> Result<Prisoner, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM Prisoner WHERE prisoner_id=?1", PRISONER_COLUMNS),
                params![id],
                prisoner_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound { entity: "prisoner", id })
    }

    pub fn list_prisoners(&self) -> Result<Vec<Prisoner>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM Prisoner", PRISONER_COLUMNS))?;
        let rows = stmt.query_map([], prisoner_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

// =========================================================================
// Cell
// =========================================================================

fn cell_from_row(row: &Row) -> rusqlite::Result<Cell> {
    Ok(Cell {
        id: row.get(0)?,
        cell_number: row.get(1)?,
        capacity: row.get(2)?,
        current_occupancy: row.get(3)?,
        block_number: row.get(4)?,
    })
}

impl RecordStore {
    pub fn add_cell(&self, fields: &CellFields) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO Cell (cell_number, capacity, current_occupancy, block_number) \
             VALUES (?1, ?2, ?3, ?4)",
            params![
                fields.cell_number,
                fields.capacity,
                fields.current_occupancy,
                fields.block_number,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn update_cell(&self, id: i64, fields: &CellFields) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE Cell SET cell_number=?1, capacity=?2, current_occupancy=?3, \
             block_number=?4 WHERE cell_id=?5",
            params![
                fields.cell_number,
                fields.capacity,
                fields.current_occupancy,
                fields.block_number,
                id,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "cell", id });
        }
        Ok(())
    }

    /// Delete a cell, refusing while any prisoner is still assigned to it
    pub fn delete_cell(&self, id: i64) -> Result<(), StoreError> {
        let occupants: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM Prisoner WHERE cell_id=?1",
            params![id],
            |row| row.get(0),
        )?;
        if occupants > 0 {
            return Err(StoreError::IntegrityGuard(format!(
                "cannot delete cell {}: {} prisoner(s) still assigned",
                id, occupants
            )));
        }

        let changed = self
            .conn
            .execute("DELETE FROM Cell WHERE cell_id=?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "cell", id });
        }
        Ok(())
    }

    pub fn get_cell(&self, id: i64) -> Result<Cell, StoreError> {
        self.conn
            .query_row(
                "SELECT cell_id, cell_number, capacity, current_occupancy, block_number \
                 FROM Cell WHERE cell_id=?1",
                params![id],
                cell_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound { entity: "cell", id })
    }

    pub fn list_cells(&self) -> Result<Vec<Cell>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT cell_id, cell_number, capacity, current_occupancy, block_number FROM Cell",
        )?;
        let rows = stmt.query_map([], cell_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

// =========================================================================
// Visitor
// =========================================================================

fn visitor_from_row(row: &Row) -> rusqlite::Result<Visitor> {
    Ok(Visitor {
        id: row.get(0)?,
        prisoner_id: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        relationship: row.get(4)?,
        visit_date: date_col(row, 5)?,
        visit_time: row.get(6)?,
    })
}

const VISITOR_COLUMNS: &str =
    "visitor_id, prisoner_id, first_name, last_name, relationship, visit_date, visit_time";

impl RecordStore {
    pub fn add_visitor(&self, fields: &VisitorFields) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO Visitor (prisoner_id, first_name, last_name, relationship, \
             visit_date, visit_time) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                fields.prisoner_id,
                fields.first_name,
                fields.last_name,
                fields.relationship,
                format_date(fields.visit_date),
                fields.visit_time,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn update_visitor(&self, id: i64, fields: &VisitorFields) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE Visitor SET prisoner_id=?1, first_name=?2, last_name=?3, \
             relationship=?4, visit_date=?5, visit_time=?6 WHERE visitor_id=?7",
            params![
                fields.prisoner_id,
                fields.first_name,
                fields.last_name,
                fields.relationship,
                format_date(fields.visit_date),
                fields.visit_time,
                id,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "visitor", id });
        }
        Ok(())
    }

    pub fn delete_visitor(&self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM Visitor WHERE visitor_id=?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "visitor", id });
        }
        Ok(())
    }

    pub fn get_visitor(&self, id: i64) -> Result<Visitor, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM Visitor WHERE visitor_id=?1", VISITOR_COLUMNS),
                params![id],
                visitor_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound { entity: "visitor", id })
    }

    pub fn list_visitors(&self) -> Result<Vec<Visitor>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM Visitor", VISITOR_COLUMNS))?;
        let rows = stmt.query_map([], visitor_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

// =========================================================================
// Staff
// =========================================================================

fn staff_from_row(row: &Row) -> rusqlite::Result<Staff> {
    Ok(Staff {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        gender: row.get(3)?,
        date_of_birth: date_col(row, 4)?,
        role: row.get(5)?,
        salary: row.get(6)?,
        hire_date: date_col(row, 7)?,
    })
}

const STAFF_COLUMNS: &str =
    "staff_id, first_name, last_name, gender, date_of_birth, role, salary, hire_date";

impl RecordStore {
    pub fn add_staff(&self, fields: &StaffFields) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO Staff (first_name, last_name, gender, date_of_birth, role, \
             salary, hire_date) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                fields.first_name,
                fields.last_name,
                fields.gender,
                format_date(fields.date_of_birth),
                fields.role,
                fields.salary,
                format_date(fields.hire_date),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn update_staff(&self, id: i64, fields: &StaffFields) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE Staff SET first_name=?1, last_name=?2, gender=?3, date_of_birth=?4, \
             role=?5, salary=?6, hire_date=?7 WHERE staff_id=?8",
            params![
                fields.first_name,
                fields.last_name,
                fields.gender,
                format_date(fields.date_of_birth),
                fields.role,
                fields.salary,
                format_date(fields.hire_date),
                id,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "staff member", id });
        }
        Ok(())
    }

    /// Delete a staff member, refusing while incident reports or medical
    /// records (as doctor) still reference them
    pub fn delete_staff(&self, id: i64) -> Result<(), StoreError> {
        let incidents: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM IncidentReport WHERE staff_id=?1",
            params![id],
            |row| row.get(0),
        )?;
        if incidents > 0 {
            return Err(StoreError::IntegrityGuard(format!(
                "cannot delete staff member {}: referenced by {} incident report(s)",
                id, incidents
            )));
        }

        let records: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM MedicalRecord WHERE doctor_id=?1",
            params![id],
            |row| row.get(0),
        )?;
        if records > 0 {
            return Err(StoreError::IntegrityGuard(format!(
                "cannot delete staff member {}: referenced as doctor by {} medical record(s)",
                id, records
            )));
        }

        let changed = self
            .conn
            .execute("DELETE FROM Staff WHERE staff_id=?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "staff member", id });
        }
        Ok(())
    }

    pub fn get_staff(&self, id: i64) -> Result<Staff, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM Staff WHERE staff_id=?1", STAFF_COLUMNS),
                params![id],
                staff_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound { entity: "staff member", id })
    }

    pub fn list_staff(&self) -> Result<Vec<Staff>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM Staff", STAFF_COLUMNS))?;
        let rows = stmt.query_map([], staff_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

// =========================================================================
// IncidentReport
// =========================================================================

fn incident_from_row(row: &Row) -> rusqlite::Result<IncidentReport> {
    Ok(IncidentReport {
        id: row.get(0)?,
        prisoner_id: row.get(1)?,
        staff_id: row.get(2)?,
        incident_date: date_col(row, 3)?,
        incident_description: row.get(4)?,
    })
}

const INCIDENT_COLUMNS: &str =
    "report_id, prisoner_id, staff_id, incident_date, incident_description";

impl RecordStore {
    pub fn add_incident(&self, fields: &IncidentReportFields) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO IncidentReport (prisoner_id, staff_id, incident_date, \
             incident_description) VALUES (?1, ?2, ?3, ?4)",
            params![
                fields.prisoner_id,
                fields.staff_id,
                format_date(fields.incident_date),
                fields.incident_description,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn update_incident(&self, id: i64, fields: &IncidentReportFields) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE IncidentReport SET prisoner_id=?1, staff_id=?2, incident_date=?3, \
             incident_description=?4 WHERE report_id=?5",
            params![
                fields.prisoner_id,
                fields.staff_id,
                format_date(fields.incident_date),
                fields.incident_description,
                id,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "incident report", id });
        }
        Ok(())
    }

    pub fn delete_incident(&self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM IncidentReport WHERE report_id=?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "incident report", id });
        }
        Ok(())
    }

    pub fn get_incident(&self, id: i64) -> Result<IncidentReport, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM IncidentReport WHERE report_id=?1", INCIDENT_COLUMNS),
                params![id],
                incident_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound { entity: "incident report", id })
    }

    pub fn list_incidents(&self) -> Result<Vec<IncidentReport>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM IncidentReport", INCIDENT_COLUMNS))?;
        let rows = stmt.query_map([], incident_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

// =========================================================================
// MedicalRecord
// =========================================================================

fn medical_from_row(row: &Row) -> rusqlite::Result<MedicalRecord> {
    Ok(MedicalRecord {
        id: row.get(0)?,
        prisoner_id: row.get(1)?,
        doctor_id: row.get(2)?,
        date_of_examination: date_col(row, 3)?,
        diagnosis: row.get(4)?,
        treatment: row.get(5)?,
    })
}

const MEDICAL_COLUMNS: &str =
    "medical_id, prisoner_id, doctor_id, date_of_examination, diagnosis, treatment";

impl RecordStore {
    pub fn add_medical(&self, fields: &MedicalRecordFields) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO MedicalRecord (prisoner_id, doctor_id, date_of_examination, \
             diagnosis, treatment) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                fields.prisoner_id,
                fields.doctor_id,
                format_date(fields.date_of_examination),
                fields.diagnosis,
                fields.treatment,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn update_medical(&self, id: i64, fields: &MedicalRecordFields) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE MedicalRecord SET prisoner_id=?1, doctor_id=?2, date_of_examination=?3, \
             diagnosis=?4, treatment=?5 WHERE medical_id=?6",
            params![
                fields.prisoner_id,
                fields.doctor_id,
                format_date(fields.date_of_examination),
                fields.diagnosis,
                fields.treatment,
                id,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "medical record", id });
        }
        Ok(())
    }

    pub fn delete_medical(&self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM MedicalRecord WHERE medical_id=?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "medical record", id });
        }
        Ok(())
    }

    pub fn get_medical(&self, id: i64) -> Result<MedicalRecord, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM MedicalRecord WHERE medical_id=?1", MEDICAL_COLUMNS),
                params![id],
                medical_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound { entity: "medical record", id })
    }

    pub fn list_medical(&self) -> Result<Vec<MedicalRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM MedicalRecord", MEDICAL_COLUMNS))?;
        let rows = stmt.query_map([], medical_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
