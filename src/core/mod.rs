//! Core module - shared types and field conversion

pub mod config;
pub mod entity;
pub mod fields;

pub use config::Config;
pub use entity::{Gender, Record};
pub use fields::{FieldKind, FieldSpec, DATE_FORMAT};
