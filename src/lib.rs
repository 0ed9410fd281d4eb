//! Shared library for `UniAdmissions`
//! Contains the admission allocator, the applicant parser, configuration and logging
//! used by the `admissions` CLI.

pub mod config;
pub mod core;
pub mod logger;
pub mod shared;

pub use shared::*;
