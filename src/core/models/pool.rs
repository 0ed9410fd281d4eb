//! Applicant pool model

use super::Applicant;
use std::collections::HashMap;

/// Applicants still eligible for admission, keyed by full name
#[derive(Debug, Clone, Default)]
pub struct ApplicantPool {
    applicants: HashMap<String, Applicant>,
}

impl ApplicantPool {
    /// Create an empty pool
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an applicant under their full name
    ///
    /// # Returns
    /// The applicant previously stored under the same full name, if any. The
    /// newer record always wins.
    pub fn insert(&mut self, applicant: Applicant) -> Option<Applicant> {
        self.applicants.insert(applicant.full_name(), applicant)
    }

    /// Remove an applicant by full name
    pub fn remove(&mut self, full_name: &str) -> Option<Applicant> {
        self.applicants.remove(full_name)
    }

    /// Look up an applicant by full name
    #[must_use]
    pub fn get(&self, full_name: &str) -> Option<&Applicant> {
        self.applicants.get(full_name)
    }

    /// Iterate over the applicants in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Applicant> {
        self.applicants.values()
    }

    /// Number of applicants in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    /// Whether the pool is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    /// Full names of every applicant, sorted
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.applicants.keys().cloned().collect();
        names.sort();
        names
    }
}

impl FromIterator<Applicant> for ApplicantPool {
    fn from_iter<I: IntoIterator<Item = Applicant>>(iter: I) -> Self {
        let mut pool = Self::new();
        for applicant in iter {
            pool.insert(applicant);
        }
        pool
    }
}
