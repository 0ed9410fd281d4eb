//! Integration tests for allocation invariants

use std::collections::HashSet;
use uni_admissions::core::models::{Applicant, ApplicantPool, Department, University};
use uni_admissions::core::parser::parse_applicants_file;
use uni_admissions::core::scoring::score_by_department;

/// Deterministic linear congruential generator for reproducible pools
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    #[allow(clippy::cast_precision_loss)]
    fn score(&mut self) -> f64 {
        // Coarse steps so equal scores (and name tie-breaks) actually occur
        (self.next() % 21) as f64 * 5.0
    }

    #[allow(clippy::cast_possible_truncation)]
    fn department(&mut self) -> Department {
        Department::ALL[(self.next() % 5) as usize]
    }
}

fn generated_pool(seed: u64, size: usize) -> ApplicantPool {
    let mut rng = Lcg(seed);
    (0..size)
        .map(|i| {
            Applicant::new(
                format!("Applicant{i:03}"),
                "Generated".to_string(),
                [rng.score(), rng.score(), rng.score(), rng.score()],
                rng.score(),
                [rng.department(), rng.department(), rng.department()].map(Some),
            )
        })
        .collect()
}

fn assert_invariants(university: &University, pool_size: usize, unplaced: &ApplicantPool) {
    let mut seen = HashSet::new();

    for roster in university.departments() {
        assert!(
            roster.admitted().len() <= university.capacity(),
            "{} exceeds capacity",
            roster.department
        );

        for applicant in roster.admitted() {
            assert!(
                seen.insert(applicant.full_name()),
                "{} admitted twice",
                applicant.full_name()
            );
            assert!(
                applicant.preferences.contains(&Some(roster.department)),
                "{} admitted to a department they did not list",
                applicant.full_name()
            );
            let expected = score_by_department(applicant, roster.department);
            assert_eq!(applicant.score.map(f64::to_bits), Some(expected.to_bits()));
            assert!(expected >= applicant.special_score);
        }

        for pair in roster.admitted().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (sa, sb) = (a.score.unwrap_or_default(), b.score.unwrap_or_default());
            assert!(sa >= sb, "{} scores are not non-increasing", roster.department);
            if sa.total_cmp(&sb).is_eq() {
                assert!(a.full_name() < b.full_name(), "tie not ordered by name");
            }
        }
    }

    for name in unplaced.names() {
        assert!(!seen.contains(&name), "{name} both admitted and unplaced");
    }
    assert_eq!(seen.len() + unplaced.len(), pool_size);
}

#[test]
fn test_invariants_on_generated_pools() {
    for seed in 1..=20 {
        for capacity in [0, 1, 3, 10, 50] {
            let pool = generated_pool(seed, 60);
            let size = pool.len();
            let mut university = University::new(capacity);
            let unplaced = university.enroll(pool);
            assert_invariants(&university, size, &unplaced);
        }
    }
}

#[test]
fn test_invariants_on_fixture() {
    let pool = parse_applicants_file("tests/fixtures/applicants.txt").expect("fixture parses");
    let size = pool.len();
    let mut university = University::new(2);
    let unplaced = university.enroll(pool);

    assert_invariants(&university, size, &unplaced);
    assert_eq!(university.admitted_count(), 10);
    assert_eq!(unplaced.len(), 2);
}

#[test]
fn test_enough_capacity_places_everyone_with_a_choice() {
    let pool = generated_pool(7, 40);
    let mut university = University::new(40);
    let unplaced = university.enroll(pool);
    assert!(unplaced.is_empty());
    assert_eq!(university.admitted_count(), 40);
}

#[test]
fn test_allocation_is_deterministic() {
    let run = || {
        let mut university = University::new(4);
        university.enroll(generated_pool(42, 50));
        university
    };
    assert_eq!(run(), run());
}
