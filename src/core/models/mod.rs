//! Data models for `UniAdmissions`

pub mod applicant;
pub mod department;
pub mod pool;
pub mod university;

pub use applicant::{Applicant, EXAM_COUNT, PREFERENCE_COUNT};
pub use department::Department;
pub use pool::ApplicantPool;
pub use university::{DepartmentRoster, RankKey, University};
