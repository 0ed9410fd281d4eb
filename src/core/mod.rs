//! Core admission domain: models, scoring, allocation and roster output

pub mod allocation;
pub mod error;
pub mod models;
pub mod parser;
pub mod roster;
pub mod scoring;

pub use error::AdmissionError;
