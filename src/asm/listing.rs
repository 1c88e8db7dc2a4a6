//! Annotated listing syntax.
//!
//! Not meant to be assembled. Each line carries the byte offset and raw word
//! next to the decoded instruction, which makes it easier to line up with a
//! hex dump while reverse engineering.

use crate::asm::traits::Assembler;
use crate::ast::Instruction;
use std::io::{Result, Write};

#[derive(Copy, Clone, Debug)]
pub struct Listing();

impl Assembler for Listing {
    fn emit_prologue(&self, stream: &mut dyn Write, source: &str) -> Result<()> {
        self.emit_comment(stream, &format!("Listing of {}, generated by ezhdis", source))?;
        writeln!(stream)
    }

    fn emit_comment(&self, stream: &mut dyn Write, comment_data: &str) -> Result<()> {
        writeln!(stream, "; {}", comment_data)
    }

    fn emit_instr_start(&self, stream: &mut dyn Write, offset: usize, word: u32) -> Result<()> {
        write!(stream, "{:08X}: {:08X}  ", offset, word)
    }

    fn emit_operand_start(
        &self,
        stream: &mut dyn Write,
        _instr: &Instruction,
        operand_index: usize,
    ) -> Result<()> {
        if operand_index == 0 {
            write!(stream, " ")
        } else {
            write!(stream, ", ")
        }
    }

    fn emit_instr_end(&self, stream: &mut dyn Write, instr: &Instruction) -> Result<()> {
        if instr.is_tentative() {
            write!(stream, "  ")?;
            self.emit_comment(stream, "operand mapping unconfirmed")
        } else {
            writeln!(stream)
        }
    }

    fn emit_unknown(&self, stream: &mut dyn Write, offset: usize, word: u32) -> Result<()> {
        self.emit_instr_start(stream, offset, word)?;
        self.emit_comment(stream, "unknown instruction")
    }
}
