//! Store error types

use thiserror::Error;

/// Errors surfaced by record store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Malformed numeric, date, or choice input from a form field
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Operation targeted an id that does not exist
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Delete blocked because dependent rows still reference the target
    #[error("{0}")]
    IntegrityGuard(String),

    /// Connectivity or constraint failure from the database
    #[error("database error: {0}")]
    Persistence(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Persistence(err.to_string())
    }
}
