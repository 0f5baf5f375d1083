use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Raised when the program is invoked without any directory operands.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("usage: {program} <directory>")]
pub struct UsageError {
    pub program: String,
}

/// A single directory that could not be created.
#[derive(Debug, Error)]
#[error("cannot create directory '{}': {source}", .path.display())]
pub struct CreateError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
