//! Applicant model

use super::Department;
use serde::{Deserialize, Serialize};

/// Number of exam results recorded per applicant
pub const EXAM_COUNT: usize = 4;

/// Number of ranked department preferences per applicant
pub const PREFERENCE_COUNT: usize = 3;

/// Represents a university applicant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Exam results in fixed positions
    pub exams: [f64; EXAM_COUNT],

    /// Special score; acts as a floor on every department score
    pub special_score: f64,

    /// Department choices, first choice at index 0. `None` marks a name that
    /// is not one of the university's departments and so never matches.
    pub preferences: [Option<Department>; PREFERENCE_COUNT],

    /// Final admission score, set once the applicant is admitted
    pub score: Option<f64>,
}

impl Applicant {
    /// Create a new applicant who has not been admitted yet
    ///
    /// # Arguments
    /// * `first_name` - First name
    /// * `last_name` - Last name
    /// * `exams` - Exam results
    /// * `special_score` - Special score
    /// * `preferences` - Ranked department choices
    #[must_use]
    pub const fn new(
        first_name: String,
        last_name: String,
        exams: [f64; EXAM_COUNT],
        special_score: f64,
        preferences: [Option<Department>; PREFERENCE_COUNT],
    ) -> Self {
        Self {
            first_name,
            last_name,
            exams,
            special_score,
            preferences,
            score: None,
        }
    }

    /// Full name (`"First Last"`), used as the applicant's key in the pool
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Department listed at the given zero-based preference rank
    #[must_use]
    pub fn preference(&self, rank: usize) -> Option<Department> {
        self.preferences.get(rank).copied().flatten()
    }
}
