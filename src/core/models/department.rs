//! Department model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the university's departments
///
/// The set is closed; [`Department::ALL`] lists every variant in the canonical
/// order the allocator visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    /// Biotechnology
    Biotech,
    /// Chemistry
    Chemistry,
    /// Engineering
    Engineering,
    /// Mathematics
    Mathematics,
    /// Physics
    Physics,
}

impl Department {
    /// Every department in canonical (alphabetical) order
    pub const ALL: [Self; 5] = [
        Self::Biotech,
        Self::Chemistry,
        Self::Engineering,
        Self::Mathematics,
        Self::Physics,
    ];

    /// Department name as it appears in applicant preferences
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Biotech => "Biotech",
            Self::Chemistry => "Chemistry",
            Self::Engineering => "Engineering",
            Self::Mathematics => "Mathematics",
            Self::Physics => "Physics",
        }
    }

    /// Positions of the exam results that count toward this department's score
    #[must_use]
    pub const fn main_exams(self) -> &'static [usize] {
        match self {
            Self::Biotech => &[0, 1],
            Self::Chemistry => &[1],
            Self::Engineering => &[2, 3],
            Self::Mathematics => &[2],
            Self::Physics => &[0, 2],
        }
    }

    /// Roster file name (e.g., `physics.txt`)
    #[must_use]
    pub fn roster_file_name(self) -> String {
        format!("{}.txt", self.name().to_lowercase())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|department| department.name() == s)
            .ok_or_else(|| format!("Unknown department: {s}"))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
