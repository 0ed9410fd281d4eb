//! Integration tests for applicant file parsing

use std::fs;
use tempfile::TempDir;
use uni_admissions::core::models::Department;
use uni_admissions::core::parser::parse_applicants_file;
use uni_admissions::core::AdmissionError;

#[test]
fn test_parse_fixture_file() {
    let pool = parse_applicants_file("tests/fixtures/applicants.txt");
    assert!(pool.is_ok(), "Failed to parse applicants: {:?}", pool.err());

    let pool = pool.unwrap();
    assert_eq!(pool.len(), 12);

    let nancy = pool.get("Nancy Crumpler").expect("Nancy Crumpler should exist");
    assert_eq!(nancy.exams, [92.0, 95.0, 71.0, 60.0]);
    assert!((nancy.special_score - 85.0).abs() < f64::EPSILON);
    assert_eq!(
        nancy.preferences,
        [
            Some(Department::Biotech),
            Some(Department::Chemistry),
            Some(Department::Mathematics)
        ]
    );
}

#[test]
fn test_parse_nonexistent_file() {
    let result = parse_applicants_file("tests/fixtures/nonexistent.txt");
    assert!(matches!(result, Err(AdmissionError::Io { .. })));
}

#[test]
fn test_parse_malformed_file_reports_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("applicants.txt");
    fs::write(
        &path,
        "Ann Lee 90 80 70 60 0 Physics Chemistry Biotech\nBob Ray 95 x 75 65 0 Physics Chemistry Biotech\n",
    )
    .expect("Failed to write input");

    let err = parse_applicants_file(&path).expect_err("line 2 is malformed");
    assert!(err.to_string().starts_with("line 2:"), "unexpected error: {err}");
}
