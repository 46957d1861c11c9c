//! Entity types - one module per table

pub mod cell;
pub mod incident;
pub mod medical;
pub mod prisoner;
pub mod staff;
pub mod visitor;

pub use cell::{Cell, CellFields};
pub use incident::{IncidentReport, IncidentReportFields};
pub use medical::{MedicalRecord, MedicalRecordFields};
pub use prisoner::{Prisoner, PrisonerFields, PrisonerStatus};
pub use staff::{Staff, StaffFields};
pub use visitor::{Visitor, VisitorFields};
