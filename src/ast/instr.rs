//! Instruction AST type

use crate::ast::Operand;
use std::{fmt, slice};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The instruction being executed
    opcode: String,
    /// Operands for the instruction, if any
    operands: Vec<Operand>,
    /// Whether any operand comes from a field whose meaning is unconfirmed
    tentative: bool,
}

impl Instruction {
    pub fn new(opcode: &str, operands: Vec<Operand>) -> Self {
        Instruction {
            opcode: opcode.to_string(),
            operands,
            tentative: false,
        }
    }

    pub fn with_tentative(mut self, tentative: bool) -> Self {
        self.tentative = tentative;
        self
    }

    pub fn opcode(&self) -> &str {
        &self.opcode
    }

    pub fn iter_operands(&self) -> slice::Iter<'_, Operand> {
        self.operands.iter()
    }

    pub fn is_tentative(&self) -> bool {
        self.tentative
    }
}

/// Macro-call rendering: `OPCODE(op1, op2)`, or a bare `OPCODE` when there
/// are no operands.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode)?;

        if self.operands.is_empty() {
            return Ok(());
        }

        write!(f, "(")?;
        for (i, operand) in self.operands.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", operand)?;
        }
        write!(f, ")")
    }
}
