//! Errors that abort a table read.
//!
//! Only file-level failures surface here. A column that does not cast is
//! never an error, it is stored as missing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SurveyError>;

#[derive(Debug, Error)]
pub enum SurveyError {
    /// File not found, permission denied and the like.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O or gzip decompression failure while reading lines.
    #[error("cannot read {} at line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}
