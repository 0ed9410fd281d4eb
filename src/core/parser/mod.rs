//! Input parsing for applicant records

pub mod applicants_parser;

pub use applicants_parser::{
    parse_applicant_line, parse_applicants, parse_applicants_file, parse_capacity, read_capacity,
};
