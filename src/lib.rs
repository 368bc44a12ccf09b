//! Fixed-width NSFG survey files as typed tables.
//!
//! Respondent and pregnancy files are read line by line, plain or gzipped,
//! sliced into columns by [`persistence::Schema`] and cast into
//! [`persistence::Respondent`] or [`persistence::Pregnancy`] records. A cell
//! that does not parse is kept as [`persistence::Field::Missing`]; only
//! file-level failures are errors.

pub mod cli;
pub mod config;
pub mod error;
pub mod persistence;

pub use error::{Result, SurveyError};
