//! Database schema initialization

use super::RecordStore;
use crate::store::StoreError;

impl RecordStore {
    /// Create the six record tables if they do not exist
    pub(super) fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS Cell (
                cell_id INTEGER PRIMARY KEY AUTOINCREMENT,
                cell_number TEXT NOT NULL,
                capacity INTEGER NOT NULL,
                current_occupancy INTEGER NOT NULL,
                block_number TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS Prisoner (
                prisoner_id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                gender TEXT NOT NULL,
                date_of_birth TEXT NOT NULL,
                date_of_incarceration TEXT NOT NULL,
                date_of_release TEXT,
                crime_committed TEXT NOT NULL,
                status TEXT NOT NULL,
                cell_id INTEGER REFERENCES Cell(cell_id)
            );
            CREATE INDEX IF NOT EXISTS idx_prisoner_cell ON Prisoner(cell_id);

            CREATE TABLE IF NOT EXISTS Visitor (
                visitor_id INTEGER PRIMARY KEY AUTOINCREMENT,
                prisoner_id INTEGER NOT NULL REFERENCES Prisoner(prisoner_id),
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                relationship TEXT NOT NULL,
                visit_date TEXT NOT NULL,
                visit_time TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_visitor_prisoner ON Visitor(prisoner_id);

            CREATE TABLE IF NOT EXISTS Staff (
                staff_id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                gender TEXT NOT NULL,
                date_of_birth TEXT NOT NULL,
                role TEXT NOT NULL,
                salary REAL NOT NULL,
                hire_date TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS IncidentReport (
                report_id INTEGER PRIMARY KEY AUTOINCREMENT,
                prisoner_id INTEGER NOT NULL REFERENCES Prisoner(prisoner_id),
                staff_id INTEGER NOT NULL REFERENCES Staff(staff_id),
                incident_date TEXT NOT NULL,
                incident_description TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_incident_prisoner ON IncidentReport(prisoner_id);
            CREATE INDEX IF NOT EXISTS idx_incident_staff ON IncidentReport(staff_id);

            CREATE TABLE IF NOT EXISTS MedicalRecord (
                medical_id INTEGER PRIMARY KEY AUTOINCREMENT,
                prisoner_id INTEGER NOT NULL REFERENCES Prisoner(prisoner_id),
                doctor_id INTEGER NOT NULL REFERENCES Staff(staff_id),
                date_of_examination TEXT NOT NULL,
                diagnosis TEXT NOT NULL,
                treatment TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_medical_prisoner ON MedicalRecord(prisoner_id);
            CREATE INDEX IF NOT EXISTS idx_medical_doctor ON MedicalRecord(doctor_id);
            "#,
        )?;

        Ok(())
    }
}
