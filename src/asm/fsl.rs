//! The macro syntax understood by the SmartDMA private header shipped in
//! NXP's MCUXpresso SDK (`fsl_smartdma_prv.h`).
//!
//! Every instruction is a macro call, so the output can be pasted directly
//! into an SDK firmware source file.

use crate::asm::traits::Assembler;
use crate::ast::Instruction;
use std::io::{Result, Write};

/// Unknown words still have to expand to something, so they become no-ops.
const UNKNOWN_PLACEHOLDER: &str = "E_NOP";

#[derive(Copy, Clone, Debug)]
pub struct Fsl();

impl Assembler for Fsl {
    fn emit_prologue(&self, stream: &mut dyn Write, source: &str) -> Result<()> {
        self.emit_comment(stream, &format!("Generated by ezhdis from {}", source))?;
        writeln!(stream)?;
        writeln!(stream, "#include \"fsl_smartdma_prv.h\"")?;
        writeln!(stream)
    }

    fn emit_comment(&self, stream: &mut dyn Write, comment_data: &str) -> Result<()> {
        writeln!(stream, "// {}", comment_data)
    }

    fn emit_instr_start(&self, _stream: &mut dyn Write, _offset: usize, _word: u32) -> Result<()> {
        Ok(())
    }

    fn emit_operand_start(
        &self,
        stream: &mut dyn Write,
        _instr: &Instruction,
        operand_index: usize,
    ) -> Result<()> {
        if operand_index == 0 {
            write!(stream, "(")
        } else {
            write!(stream, ", ")
        }
    }

    fn emit_instr_end(&self, stream: &mut dyn Write, instr: &Instruction) -> Result<()> {
        if instr.iter_operands().next().is_some() {
            write!(stream, ")")?;
        }

        writeln!(stream)
    }

    fn emit_unknown(&self, stream: &mut dyn Write, _offset: usize, _word: u32) -> Result<()> {
        write!(stream, "{}{}", UNKNOWN_PLACEHOLDER, "\t".repeat(10))?;
        self.emit_comment(stream, "Unknown instruction")
    }
}
