//! Field schema and form-value conversion
//!
//! Every entity describes itself with a flat list of [`FieldSpec`]s. The
//! conversion helpers here implement the per-kind parsing rules between the
//! text values a form hands us and the typed values the store persists:
//! dates use the canonical `%Y-%m-%d` form, empty optional fields become
//! NULL instead of a parse attempt, and multi-line text is trimmed.

use chrono::NaiveDate;

use crate::store::StoreError;

/// Canonical textual date form used in the database and all display output
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What kind of value a field holds, driving conversion and display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Multi-line free text, trimmed before storage
    Multiline,
    /// Required date (`%Y-%m-%d`)
    Date,
    /// Nullable date; empty input stores NULL
    OptionalDate,
    /// Time of day, stored as entered
    Time,
    /// Required integer
    Integer,
    /// Decimal value (e.g. salary)
    Decimal,
    /// One of a fixed set of values
    Choice(&'static [&'static str]),
    /// Required reference to another entity's id
    Reference,
    /// Nullable reference; empty input stores NULL
    OptionalReference,
}

/// One field of an entity's schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Column name in the database
    pub name: &'static str,
    /// Human-readable label for forms and tables
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

/// Format a date in the canonical display form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format a nullable date; NULL renders as an empty string
pub fn format_date_opt(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

/// Parse a required date field
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| StoreError::Validation {
        field,
        message: format!("'{}' is not a date in YYYY-MM-DD form", raw.trim()),
    })
}

/// Parse a nullable date field; empty input becomes None
pub fn parse_date_opt(field: &'static str, raw: Option<&str>) -> Result<Option<NaiveDate>, StoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(field, s).map(Some),
    }
}

/// Parse a required integer field (capacity, occupancy, references)
pub fn parse_int(field: &'static str, raw: &str) -> Result<i64, StoreError> {
    raw.trim().parse().map_err(|_| StoreError::Validation {
        field,
        message: format!("'{}' is not a whole number", raw.trim()),
    })
}

/// Parse a nullable reference field; empty input becomes None
pub fn parse_ref_opt(field: &'static str, raw: Option<&str>) -> Result<Option<i64>, StoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_int(field, s).map(Some),
    }
}

/// Parse a decimal field (salary)
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, StoreError> {
    raw.trim().parse().map_err(|_| StoreError::Validation {
        field,
        message: format!("'{}' is not a number", raw.trim()),
    })
}

/// Parse a fixed-choice field (gender, prisoner status)
pub fn parse_choice<T>(field: &'static str, raw: &str) -> Result<T, StoreError>
where
    T: std::str::FromStr<Err = String>,
{
    raw.trim().parse().map_err(|message| StoreError::Validation { field, message })
}

/// Normalize multi-line text before storage
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let d = parse_date("visit_date", "2024-03-15").unwrap();
        assert_eq!(format_date(d), "2024-03-15");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("visit_date", "15/03/2024").unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "visit_date", .. }));
    }

    #[test]
    fn test_parse_date_opt_empty_is_null() {
        assert_eq!(parse_date_opt("date_of_release", None).unwrap(), None);
        assert_eq!(parse_date_opt("date_of_release", Some("")).unwrap(), None);
        assert_eq!(parse_date_opt("date_of_release", Some("  ")).unwrap(), None);
    }

    #[test]
    fn test_parse_date_opt_still_validates() {
        let err = parse_date_opt("date_of_release", Some("soon")).unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("capacity", " 4 ").unwrap(), 4);
        assert!(parse_int("capacity", "four").is_err());
    }

    #[test]
    fn test_parse_ref_opt_empty_is_null() {
        assert_eq!(parse_ref_opt("cell_id", Some("")).unwrap(), None);
        assert_eq!(parse_ref_opt("cell_id", Some("7")).unwrap(), Some(7));
        assert!(parse_ref_opt("cell_id", Some("x")).is_err());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("salary", "52000.50").unwrap(), 52000.50);
        assert!(parse_decimal("salary", "lots").is_err());
    }

    #[test]
    fn test_normalize_text_trims() {
        assert_eq!(normalize_text("  armed robbery\n"), "armed robbery");
    }
}
