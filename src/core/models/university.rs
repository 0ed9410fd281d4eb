//! University model

use super::{Applicant, Department};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Applicants admitted to a single department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRoster {
    /// The department this roster belongs to
    pub department: Department,

    /// Maximum number of admitted applicants
    capacity: usize,

    /// Admitted applicants; never longer than `capacity`
    admitted: Vec<Applicant>,
}

impl DepartmentRoster {
    /// Create an empty roster
    #[must_use]
    pub fn new(department: Department, capacity: usize) -> Self {
        Self {
            department,
            capacity,
            admitted: Vec::new(),
        }
    }

    /// Maximum number of admitted applicants
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Seats still open
    #[must_use]
    pub const fn remaining_seats(&self) -> usize {
        self.capacity.saturating_sub(self.admitted.len())
    }

    /// Whether every seat is taken
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.remaining_seats() == 0
    }

    /// Admitted applicants in their current order
    #[must_use]
    pub fn admitted(&self) -> &[Applicant] {
        &self.admitted
    }

    /// Append an applicant to the roster
    ///
    /// # Errors
    /// Returns the applicant back when the roster is already full.
    pub fn admit(&mut self, applicant: Applicant) -> Result<(), Applicant> {
        if self.is_full() {
            return Err(applicant);
        }
        self.admitted.push(applicant);
        Ok(())
    }

    /// Order admitted applicants by final score (highest first), then full name
    pub fn sort_admitted(&mut self) {
        self.admitted.sort_by_cached_key(|applicant| {
            RankKey::new(applicant.score.unwrap_or_default(), applicant.full_name())
        });
    }
}

/// Sort key: score descending, full name ascending
#[derive(Debug, Clone)]
pub struct RankKey {
    score: f64,
    full_name: String,
}

impl RankKey {
    /// Build a key from a score and a full name
    #[must_use]
    pub const fn new(score: f64, full_name: String) -> Self {
        Self { score, full_name }
    }
}

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankKey {}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.full_name.cmp(&other.full_name))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The university: a uniform department capacity and one roster per department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    /// Seats per department
    capacity: usize,

    /// Rosters in canonical department order
    departments: Vec<DepartmentRoster>,
}

impl University {
    /// Create a university with an empty roster for every department
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            departments: Department::ALL
                .into_iter()
                .map(|department| DepartmentRoster::new(department, capacity))
                .collect(),
        }
    }

    /// Seats per department
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Rosters in canonical department order
    #[must_use]
    pub fn departments(&self) -> &[DepartmentRoster] {
        &self.departments
    }

    /// Mutable rosters in canonical department order
    pub fn departments_mut(&mut self) -> &mut [DepartmentRoster] {
        &mut self.departments
    }

    /// Roster for a single department
    #[must_use]
    pub fn roster(&self, department: Department) -> Option<&DepartmentRoster> {
        self.departments
            .iter()
            .find(|roster| roster.department == department)
    }

    /// Total number of admitted applicants across all departments
    #[must_use]
    pub fn admitted_count(&self) -> usize {
        self.departments.iter().map(|r| r.admitted().len()).sum()
    }
}
