//! Preference-ranked department allocation
//!
//! Applicants are placed in three global rounds. Round `r` visits every
//! department in canonical order and fills its open seats with the best
//! remaining applicants who listed it as their `r`-th choice. Admitted
//! applicants leave the pool, so nobody is placed twice, and nobody is
//! reconsidered once placed.

use crate::core::models::{
    Applicant, ApplicantPool, Department, DepartmentRoster, RankKey, University,
    PREFERENCE_COUNT,
};
use crate::core::scoring::score_by_department;
use crate::{debug, info, warn};

/// Number of admission rounds, one per preference rank
pub const ROUNDS: usize = PREFERENCE_COUNT;

/// Applicants in the pool who listed `department` at `rank`, best first.
///
/// Candidates are ordered by their score for `department` (highest first),
/// with ties broken by full name in ascending order. The pool is not modified.
///
/// # Arguments
/// * `pool` - Applicants still eligible for admission
/// * `department` - Department being filled
/// * `rank` - Zero-based preference rank (0 = first choice)
#[must_use]
pub fn filter_applicants_by_department(
    pool: &ApplicantPool,
    department: Department,
    rank: usize,
) -> Vec<&Applicant> {
    let mut candidates: Vec<(RankKey, &Applicant)> = pool
        .iter()
        .filter(|applicant| applicant.preference(rank) == Some(department))
        .map(|applicant| {
            let key = RankKey::new(
                score_by_department(applicant, department),
                applicant.full_name(),
            );
            (key, applicant)
        })
        .collect();

    candidates.sort_by(|(a, _), (b, _)| a.cmp(b));
    candidates
        .into_iter()
        .map(|(_, applicant)| applicant)
        .collect()
}

impl University {
    /// Run all admission rounds over `pool` and order the resulting rosters.
    ///
    /// Each admitted applicant gets their final score for the department that
    /// took them. After the last round every roster is sorted by final score
    /// (highest first), then full name.
    ///
    /// # Returns
    /// The applicants no department admitted.
    pub fn enroll(&mut self, mut pool: ApplicantPool) -> ApplicantPool {
        for rank in 0..ROUNDS {
            info!(
                "Admission round {} of {ROUNDS}: {} applicants remaining",
                rank + 1,
                pool.len()
            );

            for roster in self.departments_mut() {
                let department = roster.department;
                let rest = roster.remaining_seats();
                if rest == 0 {
                    continue;
                }

                let selected: Vec<String> =
                    filter_applicants_by_department(&pool, department, rank)
                        .into_iter()
                        .take(rest)
                        .map(Applicant::full_name)
                        .collect();

                for full_name in selected {
                    admit_from_pool(roster, &mut pool, &full_name, rank);
                }
            }
        }

        for roster in self.departments_mut() {
            roster.sort_admitted();
        }

        info!(
            "Admission complete: {} admitted, {} unplaced",
            self.admitted_count(),
            pool.len()
        );
        pool
    }
}

/// Move one applicant from the pool onto a roster with their final score.
///
/// A full roster hands the applicant back, and they return to the pool
/// unscored so a later round can still place them.
fn admit_from_pool(
    roster: &mut DepartmentRoster,
    pool: &mut ApplicantPool,
    full_name: &str,
    rank: usize,
) -> bool {
    let Some(mut applicant) = pool.remove(full_name) else {
        return false;
    };
    let department = roster.department;
    let score = score_by_department(&applicant, department);
    applicant.score = Some(score);

    match roster.admit(applicant) {
        Ok(()) => {
            debug!("Admitted {full_name} to {department} ({score:.2}, choice {})", rank + 1);
            true
        }
        Err(mut rejected) => {
            warn!("{department} is full; {full_name} stays in the pool");
            rejected.score = None;
            pool.insert(rejected);
            false
        }
    }
}
