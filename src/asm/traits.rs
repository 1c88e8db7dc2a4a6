//! Assembler trait

use crate::arch::ezh::{self, Disasm};
use crate::ast::{Instruction, Literal, Operand};
use std::io::{Result, Write};

/// Trait which represents a particular output syntax.
///
/// Each word of a program is rendered as exactly one line. Implementors
/// provide the individual pieces; the provided methods glue them together.
pub trait Assembler {
    /// Emit whatever header text the syntax requires before the first
    /// instruction. `source` names the image being disassembled.
    fn emit_prologue(&self, stream: &mut dyn Write, source: &str) -> Result<()>;

    /// Emit a comment into the disassembly stream.
    fn emit_comment(&self, stream: &mut dyn Write, comment_data: &str) -> Result<()>;

    /// Emit anything that precedes the opcode on an instruction's line.
    ///
    /// `offset` is the byte offset of `word` within the image.
    fn emit_instr_start(&self, stream: &mut dyn Write, offset: usize, word: u32) -> Result<()>;

    /// Emit an instruction's opcode.
    fn emit_instr_opcode(&self, stream: &mut dyn Write, opcode: &str) -> Result<()> {
        write!(stream, "{}", opcode)
    }

    /// Emit any operand whitespace or punctuation that precedes an operand.
    fn emit_operand_start(
        &self,
        stream: &mut dyn Write,
        instr: &Instruction,
        operand_index: usize,
    ) -> Result<()>;

    /// Emit an architecturally-defined symbol.
    fn emit_symbol(&self, stream: &mut dyn Write, symbol: &str) -> Result<()> {
        write!(stream, "{}", symbol)
    }

    /// Emit a literal constant.
    fn emit_literal(&self, stream: &mut dyn Write, literal: &Literal) -> Result<()> {
        write!(stream, "{}", literal)
    }

    /// Emit a bus address, by name if it has one and `aliased` is set.
    fn emit_pointer(&self, stream: &mut dyn Write, target: u32, aliased: bool) -> Result<()> {
        write!(stream, "{}", ezh::address(target, aliased))
    }

    /// Emit an entire operand.
    fn emit_operand(&self, stream: &mut dyn Write, operand: &Operand) -> Result<()> {
        match operand {
            Operand::Symbol(symbol) => self.emit_symbol(stream, symbol),
            Operand::Literal(literal) => self.emit_literal(stream, literal),
            Operand::Pointer { target, aliased } => {
                self.emit_pointer(stream, *target, *aliased)
            }
        }
    }

    /// Emit everything that follows the last operand, including the line
    /// terminator.
    fn emit_instr_end(&self, stream: &mut dyn Write, instr: &Instruction) -> Result<()>;

    /// Emit an entire instruction.
    fn emit_instr(
        &self,
        stream: &mut dyn Write,
        offset: usize,
        word: u32,
        instr: &Instruction,
    ) -> Result<()> {
        self.emit_instr_start(stream, offset, word)?;
        self.emit_instr_opcode(stream, instr.opcode())?;

        for (i, operand) in instr.iter_operands().enumerate() {
            self.emit_operand_start(stream, instr, i)?;
            self.emit_operand(stream, operand)?;
        }

        self.emit_instr_end(stream, instr)
    }

    /// Emit the placeholder line for a word that no encoding recognized.
    fn emit_unknown(&self, stream: &mut dyn Write, offset: usize, word: u32) -> Result<()>;

    /// Emit one decoded word.
    fn emit_disasm(
        &self,
        stream: &mut dyn Write,
        offset: usize,
        word: u32,
        disasm: &Disasm,
    ) -> Result<()> {
        match disasm {
            Disasm::Instruction(instr) => self.emit_instr(stream, offset, word, instr),
            Disasm::Unrecognized(word) => self.emit_unknown(stream, offset, *word),
        }
    }

    /// Emit an entire program: the prologue, then one line per word.
    fn emit_program(
        &self,
        stream: &mut dyn Write,
        source: &str,
        words: &[u32],
        disasm: &[Disasm],
    ) -> Result<()> {
        self.emit_prologue(stream, source)?;

        for (i, (word, result)) in words.iter().zip(disasm.iter()).enumerate() {
            self.emit_disasm(stream, i * 4, *word, result)?;
        }

        Ok(())
    }
}
