//! Error type for project file loading

use std::{io, result};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Underlying cause of error is I/O related
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Underlying cause of error is JSON related
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Asked for a program of the given name that is not listed in the project
    #[error("Program {0} is missing from project file")]
    UnknownProgram(String),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::Io(e) => e,
            _ => io::Error::new(io::ErrorKind::Other, format!("{}", err)),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
