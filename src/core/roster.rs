//! Department roster rendering and export

use crate::core::error::AdmissionError;
use crate::core::models::{DepartmentRoster, University};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for writing department rosters to an output sink
pub trait RosterExporter {
    /// Write every department roster of `university` under `out_dir`
    ///
    /// # Returns
    /// The paths written, in canonical department order
    ///
    /// # Errors
    /// Returns an error on the first roster that cannot be written. Rosters
    /// written before the failure are left in place.
    fn export(
        &self,
        university: &University,
        out_dir: &Path,
    ) -> Result<Vec<PathBuf>, AdmissionError>;
}

/// Plain-text exporter: one `<department>.txt` per department
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRosterExporter;

impl RosterExporter for TextRosterExporter {
    fn export(
        &self,
        university: &University,
        out_dir: &Path,
    ) -> Result<Vec<PathBuf>, AdmissionError> {
        write_rosters(university, out_dir)
    }
}

/// `(full name, final score)` pairs in roster order
#[must_use]
pub fn format_roster(roster: &DepartmentRoster) -> Vec<(String, f64)> {
    roster
        .admitted()
        .iter()
        .map(|applicant| (applicant.full_name(), applicant.score.unwrap_or_default()))
        .collect()
}

/// Render a roster as text, one `"First Last 12.34"` line per admitted applicant
#[must_use]
pub fn render_roster(roster: &DepartmentRoster) -> String {
    let mut out = String::new();
    for (full_name, score) in format_roster(roster) {
        let _ = writeln!(out, "{full_name} {score:.2}");
    }
    out
}

/// Write every department roster into `out_dir`, named `<department>.txt`
///
/// # Errors
/// Returns an error if the directory cannot be created or a roster file
/// cannot be written.
pub fn write_rosters(university: &University, out_dir: &Path) -> Result<Vec<PathBuf>, AdmissionError> {
    fs::create_dir_all(out_dir).map_err(|e| AdmissionError::io(out_dir, e))?;

    let mut written = Vec::with_capacity(university.departments().len());
    for roster in university.departments() {
        let path = out_dir.join(roster.department.roster_file_name());
        fs::write(&path, render_roster(roster)).map_err(|e| AdmissionError::io(&path, e))?;
        written.push(path);
    }
    Ok(written)
}

/// Per-department fill counts for a finished admission run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionSummary {
    /// Seats per department
    pub capacity: usize,
    /// `(department name, admitted count)` in canonical order
    pub filled: Vec<(String, usize)>,
    /// Applicants no department admitted
    pub unplaced: usize,
}

impl AdmissionSummary {
    /// Summarize a university after enrollment
    #[must_use]
    pub fn new(university: &University, unplaced: usize) -> Self {
        Self {
            capacity: university.capacity(),
            filled: university
                .departments()
                .iter()
                .map(|r| (r.department.name().to_string(), r.admitted().len()))
                .collect(),
            unplaced,
        }
    }

    /// Total admitted applicants
    #[must_use]
    pub fn admitted(&self) -> usize {
        self.filled.iter().map(|(_, count)| count).sum()
    }
}
