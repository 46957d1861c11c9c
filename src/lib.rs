//! Warden: prison facility records manager
//!
//! A CLI for managing prison facility records (prisoners, cells, visitors,
//! staff, incident reports, medical records) as rows in a local SQLite
//! database.

pub mod cli;
pub mod core;
pub mod entities;
pub mod store;
