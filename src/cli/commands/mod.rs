//! CLI command handlers for `UniAdmissions`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod enroll;
