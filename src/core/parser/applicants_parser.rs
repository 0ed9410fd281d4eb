//! Parser for the applicants file and the department capacity

use crate::core::error::AdmissionError;
use crate::core::models::{Applicant, ApplicantPool, Department, EXAM_COUNT, PREFERENCE_COUNT};
use crate::warn;
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Field names in line order, used in error messages
const FIELDS: [&str; 10] = [
    "first name",
    "last name",
    "exam1",
    "exam2",
    "exam3",
    "exam4",
    "special score",
    "preference1",
    "preference2",
    "preference3",
];

/// Parse an applicants file into an applicant pool
///
/// # Arguments
/// * `path` - Path to the applicants file
///
/// # Errors
/// Returns an error if the file cannot be read or any line is malformed. No
/// partial pool is returned.
pub fn parse_applicants_file<P: AsRef<Path>>(path: P) -> Result<ApplicantPool, AdmissionError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| AdmissionError::io(path, e))?;
    parse_applicants(&content)
}

/// Parse applicant records, one per line
///
/// Blank lines are skipped. When two lines share a full name the later record
/// replaces the earlier one and a warning is logged.
///
/// # Errors
/// Returns the first malformed line's error.
pub fn parse_applicants(content: &str) -> Result<ApplicantPool, AdmissionError> {
    let mut pool = ApplicantPool::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let applicant = parse_applicant_line(line, idx + 1)?;
        if let Some(previous) = pool.insert(applicant) {
            warn!(
                "line {}: duplicate applicant '{}' replaces an earlier record",
                idx + 1,
                previous.full_name()
            );
        }
    }

    Ok(pool)
}

/// Parse a single whitespace-separated applicant line
///
/// Fields: first name, last name, four exam results, special score and three
/// department preferences. Fields past the tenth are ignored. A preference
/// that names no department is kept as `None`; the applicant can still be
/// placed through their other choices.
///
/// # Errors
/// Returns an error if a field is missing or a score is not a number.
pub fn parse_applicant_line(line: &str, line_no: usize) -> Result<Applicant, AdmissionError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if let Some(&field) = FIELDS.get(fields.len()) {
        return Err(AdmissionError::MissingField {
            line: line_no,
            field,
        });
    }

    let mut exams = [0.0; EXAM_COUNT];
    for (i, exam) in exams.iter_mut().enumerate() {
        *exam = parse_number(fields[2 + i], FIELDS[2 + i], line_no)?;
    }
    let special_score = parse_number(fields[6], FIELDS[6], line_no)?;

    let mut preferences = [None; PREFERENCE_COUNT];
    for (i, preference) in preferences.iter_mut().enumerate() {
        let name = fields[7 + i];
        *preference = name.parse::<Department>().ok();
        if preference.is_none() {
            warn!(
                "line {line_no}: {} '{name}' is not a department and will never match",
                FIELDS[7 + i]
            );
        }
    }

    Ok(Applicant::new(
        fields[0].to_string(),
        fields[1].to_string(),
        exams,
        special_score,
        preferences,
    ))
}

fn parse_number(value: &str, field: &'static str, line_no: usize) -> Result<f64, AdmissionError> {
    value.parse::<f64>().map_err(|_| AdmissionError::InvalidNumber {
        line: line_no,
        field,
        value: value.to_string(),
    })
}

/// Parse the per-department capacity from its text form
///
/// # Errors
/// Returns an error unless the trimmed text is a non-negative integer.
pub fn parse_capacity(value: &str) -> Result<usize, AdmissionError> {
    let trimmed = value.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| AdmissionError::InvalidCapacity(trimmed.to_string()))
}

/// Read the capacity from the first non-empty line of `reader` (usually stdin)
///
/// # Errors
/// Returns an error if reading fails, the input is empty, or the first token
/// is not a non-negative integer.
pub fn read_capacity<R: BufRead>(reader: R) -> Result<usize, AdmissionError> {
    for line in reader.lines() {
        let line = line.map_err(|e| AdmissionError::io("<stdin>", e))?;
        if let Some(token) = line.split_whitespace().next() {
            return parse_capacity(token);
        }
    }
    Err(AdmissionError::InvalidCapacity(String::new()))
}
