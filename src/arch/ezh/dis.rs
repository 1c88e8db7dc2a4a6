//! EZH disassembler

use crate::arch::ezh::table::EncodingTable;
use crate::arch::ezh::{Error, Result};
use crate::ast::Instruction;
use rayon::prelude::*;

/// The result of decoding a single word.
#[derive(Clone, Debug, PartialEq)]
pub enum Disasm {
    /// Exactly one descriptor matched.
    Instruction(Instruction),

    /// No descriptor matched the given word.
    Unrecognized(u32),
}

impl Disasm {
    pub fn is_recognized(&self) -> bool {
        matches!(self, Disasm::Instruction(_))
    }
}

/// Decode one instruction word.
///
/// Every descriptor in the table is tested, so a second match is always
/// caught and reported as `AmbiguousEncoding`, regardless of table order.
pub fn decode(word: u32, table: &EncodingTable, aliasing: bool) -> Result<Disasm> {
    let mut selected = None;

    for descriptor in table.iter().filter(|d| d.matches(word)) {
        if let Some(first) = selected.replace(descriptor) {
            return Err(Error::AmbiguousEncoding {
                word,
                first: first.mnemonic().to_string(),
                second: descriptor.mnemonic().to_string(),
            });
        }
    }

    let descriptor = match selected {
        Some(descriptor) => descriptor,
        None => return Ok(Disasm::Unrecognized(word)),
    };

    let operands = descriptor
        .iter_fields()
        .map(|field| field.decode(word, aliasing))
        .collect();
    let tentative = descriptor.iter_fields().any(|field| field.is_tentative());

    Ok(Disasm::Instruction(
        Instruction::new(descriptor.mnemonic(), operands).with_tentative(tentative),
    ))
}

/// Decode a whole instruction stream.
///
/// Words are decoded in parallel; results come back in stream order. If any
/// word is ambiguous, no results are returned at all.
pub fn disassemble(words: &[u32], table: &EncodingTable, aliasing: bool) -> Result<Vec<Disasm>> {
    words
        .par_iter()
        .map(|&word| decode(word, table, aliasing))
        .collect()
}
