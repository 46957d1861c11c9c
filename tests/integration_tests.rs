//! Integration tests for the warden CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a warden command
fn warden() -> Command {
    Command::cargo_bin("warden").unwrap()
}

/// Helper to get a database path inside a temp directory
fn db_path(tmp: &TempDir) -> PathBuf {
    tmp.path().join("warden.db")
}

/// Helper to add a cell, returns nothing (first cell gets ID 1, and so on)
fn add_cell(tmp: &TempDir, number: &str) {
    warden()
        .args([
            "--db",
            db_path(tmp).to_str().unwrap(),
            "cell",
            "add",
            "--cell-number",
            number,
            "--capacity",
            "4",
            "--current-occupancy",
            "0",
            "--block-number",
            "B",
        ])
        .assert()
        .success();
}

/// Helper to add a prisoner, optionally assigned to a cell
fn add_prisoner(tmp: &TempDir, first: &str, cell: Option<&str>) {
    let db = db_path(tmp);
    let mut args = vec![
        "--db",
        db.to_str().unwrap(),
        "prisoner",
        "add",
        "--first-name",
        first,
        "--last-name",
        "Doe",
        "--gender",
        "Male",
        "--date-of-birth",
        "1985-03-12",
        "--date-of-incarceration",
        "2020-06-01",
        "--crime",
        "Burglary",
        "--status",
        "Incarcerated",
    ];
    if let Some(cell) = cell {
        args.push("--cell");
        args.push(cell);
    }
    warden().args(&args).assert().success();
}

/// Helper to add a staff member
fn add_staff(tmp: &TempDir, first: &str, role: &str) {
    warden()
        .args([
            "--db",
            db_path(tmp).to_str().unwrap(),
            "staff",
            "add",
            "--first-name",
            first,
            "--last-name",
            "Smith",
            "--gender",
            "Female",
            "--date-of-birth",
            "1978-11-02",
            "--role",
            role,
            "--salary",
            "52000.50",
            "--hire-date",
            "2015-01-15",
        ])
        .assert()
        .success();
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    warden()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prison facility records"));
}

#[test]
fn test_version_displays() {
    warden()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("warden"));
}

#[test]
fn test_unknown_command_fails() {
    warden()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Prisoner Command Tests
// ============================================================================

#[test]
fn test_prisoner_add_and_list() {
    let tmp = TempDir::new().unwrap();
    add_prisoner(&tmp, "John", None);

    warden()
        .args(["--db", db_path(&tmp).to_str().unwrap(), "prisoner", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John"))
        .stdout(predicate::str::contains("Burglary"));
}

#[test]
fn test_prisoner_show_displays_all_fields() {
    let tmp = TempDir::new().unwrap();
    add_prisoner(&tmp, "John", None);

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "prisoner",
            "show",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("John"))
        .stdout(predicate::str::contains("1985-03-12"))
        .stdout(predicate::str::contains("Incarcerated"));
}

#[test]
fn test_prisoner_update_replaces_fields() {
    let tmp = TempDir::new().unwrap();
    add_prisoner(&tmp, "John", None);

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "prisoner",
            "update",
            "1",
            "--first-name",
            "Jonathan",
            "--last-name",
            "Doe",
            "--gender",
            "Male",
            "--date-of-birth",
            "1985-03-12",
            "--date-of-incarceration",
            "2020-06-01",
            "--date-of-release",
            "2024-06-01",
            "--crime",
            "Burglary",
            "--status",
            "Released",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated prisoner"));

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "prisoner",
            "show",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jonathan"))
        .stdout(predicate::str::contains("Released"))
        .stdout(predicate::str::contains("2024-06-01"));
}

#[test]
fn test_prisoner_delete_with_yes() {
    let tmp = TempDir::new().unwrap();
    add_prisoner(&tmp, "John", None);

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "prisoner",
            "delete",
            "1",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted prisoner"));

    warden()
        .args(["--db", db_path(&tmp).to_str().unwrap(), "prisoner", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No prisoner records found."));
}

#[test]
fn test_prisoner_show_unknown_id_fails() {
    let tmp = TempDir::new().unwrap();

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "prisoner",
            "show",
            "42",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("prisoner 42 not found"));
}

#[test]
fn test_prisoner_add_rejects_bad_date() {
    let tmp = TempDir::new().unwrap();

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "prisoner",
            "add",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--gender",
            "Male",
            "--date-of-birth",
            "12/03/1985",
            "--date-of-incarceration",
            "2020-06-01",
            "--crime",
            "Burglary",
            "--status",
            "Incarcerated",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date_of_birth"));
}

#[test]
fn test_prisoner_add_rejects_bad_status() {
    let tmp = TempDir::new().unwrap();

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "prisoner",
            "add",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--gender",
            "Male",
            "--date-of-birth",
            "1985-03-12",
            "--date-of-incarceration",
            "2020-06-01",
            "--crime",
            "Burglary",
            "--status",
            "Escaped",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid status"));
}

// ============================================================================
// Cell Command Tests
// ============================================================================

#[test]
fn test_cell_add_and_show() {
    let tmp = TempDir::new().unwrap();
    add_cell(&tmp, "A1");

    warden()
        .args(["--db", db_path(&tmp).to_str().unwrap(), "cell", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A1"));
}

#[test]
fn test_cell_add_rejects_bad_capacity() {
    let tmp = TempDir::new().unwrap();

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "cell",
            "add",
            "--cell-number",
            "A1",
            "--capacity",
            "lots",
            "--current-occupancy",
            "0",
            "--block-number",
            "B",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid capacity"));
}

#[test]
fn test_cell_delete_blocked_while_occupied() {
    let tmp = TempDir::new().unwrap();
    add_cell(&tmp, "A1");
    add_prisoner(&tmp, "John", Some("1"));

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "cell",
            "delete",
            "1",
            "--yes",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot delete cell 1"));

    // Cell is still there
    warden()
        .args(["--db", db_path(&tmp).to_str().unwrap(), "cell", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A1"));
}

#[test]
fn test_cell_delete_succeeds_after_prisoner_removed() {
    let tmp = TempDir::new().unwrap();
    add_cell(&tmp, "A1");
    add_prisoner(&tmp, "John", Some("1"));

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "prisoner",
            "delete",
            "1",
            "--yes",
        ])
        .assert()
        .success();

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "cell",
            "delete",
            "1",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted cell"));
}

// ============================================================================
// Staff Command Tests
// ============================================================================

#[test]
fn test_staff_add_and_list() {
    let tmp = TempDir::new().unwrap();
    add_staff(&tmp, "Alice", "Guard");

    warden()
        .args(["--db", db_path(&tmp).to_str().unwrap(), "staff", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("52000.50"));
}

#[test]
fn test_staff_delete_blocked_by_incident() {
    let tmp = TempDir::new().unwrap();
    add_prisoner(&tmp, "John", None);
    add_staff(&tmp, "Alice", "Guard");

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "incident",
            "add",
            "--prisoner",
            "1",
            "--staff",
            "1",
            "--date",
            "2023-02-14",
            "--description",
            "Altercation in mess hall",
        ])
        .assert()
        .success();

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "staff",
            "delete",
            "1",
            "--yes",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("incident report(s)"));
}

#[test]
fn test_staff_delete_blocked_by_medical_record() {
    let tmp = TempDir::new().unwrap();
    add_prisoner(&tmp, "John", None);
    add_staff(&tmp, "Greta", "Doctor");

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "medical",
            "add",
            "--prisoner",
            "1",
            "--doctor",
            "1",
            "--date",
            "2023-03-01",
            "--diagnosis",
            "Influenza",
            "--treatment",
            "Rest and fluids",
        ])
        .assert()
        .success();

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "staff",
            "delete",
            "1",
            "--yes",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("medical record(s)"));
}

#[test]
fn test_staff_delete_succeeds_when_unreferenced() {
    let tmp = TempDir::new().unwrap();
    add_staff(&tmp, "Alice", "Clerk");

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "staff",
            "delete",
            "1",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted staff member"));
}

// ============================================================================
// Visitor Command Tests
// ============================================================================

#[test]
fn test_visitor_add_requires_existing_prisoner() {
    let tmp = TempDir::new().unwrap();

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "visitor",
            "add",
            "--prisoner",
            "99",
            "--first-name",
            "Mary",
            "--last-name",
            "Doe",
            "--relationship",
            "Sister",
            "--visit-date",
            "2023-05-20",
            "--visit-time",
            "14:30",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("database error"));
}

#[test]
fn test_visitor_add_and_show() {
    let tmp = TempDir::new().unwrap();
    add_prisoner(&tmp, "John", None);

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "visitor",
            "add",
            "--prisoner",
            "1",
            "--first-name",
            "Mary",
            "--last-name",
            "Doe",
            "--relationship",
            "Sister",
            "--visit-date",
            "2023-05-20",
            "--visit-time",
            "14:30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added visitor"));

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "visitor",
            "show",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mary"))
        .stdout(predicate::str::contains("14:30"));
}

// ============================================================================
// Output Format Tests
// ============================================================================

#[test]
fn test_list_csv_format() {
    let tmp = TempDir::new().unwrap();
    add_cell(&tmp, "A1");

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "--format",
            "csv",
            "cell",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("id,cell_number,capacity"))
        .stdout(predicate::str::contains("1,A1,4,0,B"));
}

#[test]
fn test_list_json_format() {
    let tmp = TempDir::new().unwrap();
    add_cell(&tmp, "A1");

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "--format",
            "json",
            "cell",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cell_number\": \"A1\""));
}

#[test]
fn test_quiet_suppresses_summary() {
    let tmp = TempDir::new().unwrap();
    add_cell(&tmp, "A1");

    warden()
        .args([
            "--db",
            db_path(&tmp).to_str().unwrap(),
            "--quiet",
            "cell",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("record(s) found").not());
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[test]
fn test_data_survives_between_invocations() {
    let tmp = TempDir::new().unwrap();
    add_cell(&tmp, "A1");
    add_cell(&tmp, "A2");
    add_prisoner(&tmp, "John", Some("2"));

    warden()
        .args(["--db", db_path(&tmp).to_str().unwrap(), "prisoner", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John"));

    warden()
        .args(["--db", db_path(&tmp).to_str().unwrap(), "cell", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A1"))
        .stdout(predicate::str::contains("A2"));
}

#[test]
fn test_db_env_var_is_honored() {
    let tmp = TempDir::new().unwrap();
    let db = db_path(&tmp);

    warden()
        .env("WARDEN_DB", db.to_str().unwrap())
        .args([
            "cell",
            "add",
            "--cell-number",
            "C9",
            "--capacity",
            "2",
            "--current-occupancy",
            "1",
            "--block-number",
            "C",
        ])
        .assert()
        .success();

    warden()
        .env("WARDEN_DB", db.to_str().unwrap())
        .args(["cell", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C9"));
}
