//! End-to-end tests driving the menu loop with scripted operator input

use nu_roster::core::models::Level;
use nu_roster::core::roster::Roster;
use nu_roster::core::session::{Session, MENU_HEADER};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Run a scripted session and return the final roster and console output
fn drive(script: &[&str], export_path: &Path) -> (Roster, String) {
    let mut input = script.join("\n");
    input.push('\n');

    let mut out = Vec::new();
    let mut session = Session::new(Roster::seeded(), input.as_bytes(), &mut out, export_path);
    session.run().expect("in-memory console never fails");
    let roster = session.into_roster();
    (roster, String::from_utf8(out).expect("console output is UTF-8"))
}

#[test]
fn full_workflow_exports_one_line_per_enrollment() {
    let dir = TempDir::new().unwrap();
    let export_path = dir.path().join("students.csv");

    let (roster, out) = drive(
        &[
            "1", "S001", "Ada Lovelace", "ada@example.com",
            "1", "S002", "Alan Turing", "alan@example.com",
            "2", "S001", "C001",
            "2", "S001", "C002",
            "3", "S001", "C001", "9",
            "3", "S001", "C002", "7",
            "5",
            "6",
        ],
        &export_path,
    );

    assert!(out.contains("✓ Saved 2 record(s)"));
    assert_eq!(
        roster.find_student("S001").unwrap().level(),
        Some(Level::Advanced)
    );

    let contents = fs::read_to_string(&export_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "S001,Ada Lovelace,ada@example.com,Advanced,C001,C# Fundamentals,9",
            "S001,Ada Lovelace,ada@example.com,Advanced,C002,Advanced Java,7",
        ]
    );
}

#[test]
fn bad_input_is_reported_and_loop_continues() {
    let dir = TempDir::new().unwrap();
    let (roster, out) = drive(
        &[
            "abc",
            "42",
            "2", "ghost",
            "1", "S001", "Ada", "ada@example.com",
            "3", "S001", "C003", "seven",
            "3", "S001", "C003", "7",
            "6",
        ],
        &dir.path().join("students.csv"),
    );

    assert!(out.contains("✗ Please enter an integer, got 'abc'"));
    assert!(out.contains("✗ Invalid choice: 42"));
    assert!(out.contains("✗ Student not found: ghost"));
    assert!(out.contains("✗ Score must be a number, got 'seven'"));
    assert!(out.contains("✗ Course C003 not found among enrollments of student S001"));
    assert_eq!(out.matches(MENU_HEADER).count(), 7);

    // The unenrolled score attempt still recalculates the level
    assert_eq!(
        roster.find_student("S001").unwrap().level(),
        Some(Level::Beginner)
    );
}

#[test]
fn duplicate_registration_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (roster, out) = drive(
        &[
            "1", "S001", "Ada", "ada@example.com",
            "2", "S001", "C003",
            "2", "S001", "C003",
            "6",
        ],
        &dir.path().join("students.csv"),
    );

    assert!(out.contains("✗ Student S001 is already enrolled in course C003"));
    assert_eq!(roster.find_student("S001").unwrap().enrollments().len(), 1);
}

#[test]
fn export_failure_is_reported_without_ending_loop() {
    let dir = TempDir::new().unwrap();
    let export_path = dir.path().join("missing").join("students.csv");

    let (_, out) = drive(&["5", "4", "6"], &export_path);

    assert!(out.contains("✗ Failed to write"));
    assert_eq!(out.matches(MENU_HEADER).count(), 3);
    assert!(!export_path.exists());
}

#[test]
fn students_without_enrollments_export_nothing() {
    let dir = TempDir::new().unwrap();
    let export_path = dir.path().join("students.csv");

    let (_, out) = drive(&["1", "S001", "Ada", "ada@example.com", "5", "6"], &export_path);

    assert!(out.contains("✓ Saved 0 record(s)"));
    assert_eq!(fs::read_to_string(&export_path).unwrap(), "");
}
