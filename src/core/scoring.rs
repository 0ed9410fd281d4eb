//! Admission score calculation

use crate::core::models::{Applicant, Department};

/// Compute an applicant's admission score for a department.
///
/// The score is the mean of the department's main exams, raised to the
/// applicant's special score when that is higher.
///
/// # Arguments
/// * `applicant` - The applicant being scored
/// * `department` - The department they are being considered for
#[must_use]
pub fn score_by_department(applicant: &Applicant, department: Department) -> f64 {
    let exams = department.main_exams();
    debug_assert!(!exams.is_empty(), "{department} has no main exams");
    if exams.is_empty() {
        return applicant.special_score;
    }

    let total: f64 = exams.iter().map(|&idx| applicant.exams[idx]).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = total / exams.len() as f64;

    mean.max(applicant.special_score)
}
