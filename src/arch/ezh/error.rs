//! Error type for EZH disassembly

use std::{io, result};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// More than one descriptor accepted the same word.
    ///
    /// This means the encoding table itself is wrong, so decoding cannot
    /// continue.
    #[error("word 0x{word:08X} matches both {first} and {second}")]
    AmbiguousEncoding {
        word: u32,
        first: String,
        second: String,
    },
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidData, format!("{}", err))
    }
}

pub type Result<T> = result::Result<T, Error>;
