//! Errors raised while reading applicants or writing rosters

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Every failure the admission run can hit. All of them are fatal to the run.
#[derive(Debug)]
pub enum AdmissionError {
    /// Reading the applicants file or writing a roster failed
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// An applicant line has fewer fields than the record requires
    MissingField {
        /// 1-based line number
        line: usize,
        /// Name of the first missing field
        field: &'static str,
    },
    /// An exam result or special score is not a number
    InvalidNumber {
        /// 1-based line number
        line: usize,
        /// Name of the offending field
        field: &'static str,
        /// Raw text of the field
        value: String,
    },
    /// The department capacity is not a non-negative integer
    InvalidCapacity(String),
}

impl AdmissionError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for AdmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::MissingField { line, field } => {
                write!(f, "line {line}: missing field '{field}'")
            }
            Self::InvalidNumber { line, field, value } => {
                write!(f, "line {line}: field '{field}' is not a number: '{value}'")
            }
            Self::InvalidCapacity(value) => {
                write!(f, "invalid department capacity: '{value}'")
            }
        }
    }
}

impl std::error::Error for AdmissionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
