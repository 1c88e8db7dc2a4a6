//! Error type for image loading

use std::{io, result};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Underlying cause of error is I/O related
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The image does not hold a whole number of instruction words.
    #[error("image is {length} bytes long, which is not a multiple of 4")]
    MisalignedImage { length: usize },

    /// A literal byte array could not be parsed.
    #[error("invalid byte array: {0}")]
    InvalidLiteral(String),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::Io(e) => e,
            _ => io::Error::new(io::ErrorKind::InvalidData, format!("{}", err)),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
