//! Command implementations, one module per entity

pub mod cell;
pub mod incident;
pub mod medical;
pub mod prisoner;
pub mod staff;
pub mod visitor;
