//! Output syntaxes for disassembled programs

pub mod fsl;
pub mod listing;
mod traits;


pub use traits::Assembler;

use crate::arch::ezh::Disasm;
use serde::Serialize;
use std::io::{self, Write};
use std::str;

#[derive(Copy, Clone, Serialize, Debug, PartialEq, Eq)]
pub enum AssemblerName {
    Fsl,
    Listing,
}

impl Default for AssemblerName {
    fn default() -> Self {
        AssemblerName::Fsl
    }
}

impl str::FromStr for AssemblerName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "fsl" => Ok(AssemblerName::Fsl),
            "sdk" => Ok(AssemblerName::Fsl),
            "listing" => Ok(AssemblerName::Listing),
            "lst" => Ok(AssemblerName::Listing),
            _ => Err(()),
        }
    }
}

impl AssemblerName {
    /// The file extension conventionally used for output in this syntax.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Fsl => "h",
            Self::Listing => "lst",
        }
    }
}

derive_deserialize_from_str!(AssemblerName, "valid assembler name");

/// Write a whole disassembled program in the given syntax.
///
/// `words` and `disasm` must be parallel: the nth result is the decoding of
/// the nth word.
pub fn emit_program(
    syntax: AssemblerName,
    stream: &mut dyn Write,
    source: &str,
    words: &[u32],
    disasm: &[Disasm],
) -> io::Result<()> {
    match syntax {
        AssemblerName::Fsl => fsl::Fsl().emit_program(stream, source, words, disasm),
        AssemblerName::Listing => {
            listing::Listing().emit_program(stream, source, words, disasm)
        }
    }
}
