//! Operand AST type

use crate::arch::ezh;
use crate::ast::Literal;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// The name of an architecturally defined register or condition code.
    Symbol(&'static str),

    /// A literal constant value.
    Literal(Literal),

    /// An address on the engine's bus. `aliased` addresses are shown by the
    /// name of the peripheral register that lives there, if there is one.
    Pointer { target: u32, aliased: bool },
}

impl Operand {
    pub fn sym(sym: &'static str) -> Self {
        Operand::Symbol(sym)
    }

    pub fn int(int: u32) -> Self {
        Operand::Literal(Literal::Integer(int))
    }

    pub fn sint(int: i64) -> Self {
        Operand::Literal(Literal::SignedInteger(int))
    }

    pub fn hex(value: u32, digits: usize) -> Self {
        Operand::Literal(Literal::Hex { value, digits })
    }

    pub fn ptr(target: u32, aliased: bool) -> Self {
        Operand::Pointer { target, aliased }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Symbol(s) => write!(f, "{}", s),
            Operand::Literal(l) => write!(f, "{}", l),
            Operand::Pointer { target, aliased } => {
                write!(f, "{}", ezh::address(*target, *aliased))
            }
        }
    }
}
