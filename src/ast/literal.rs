//! AST type for literal values

use std::fmt;

/// A literal constant extracted from an instruction word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    /// An unsigned field, printed in decimal.
    Integer(u32),

    /// A two's-complement field, printed in decimal.
    SignedInteger(i64),

    /// A raw field printed as zero-padded uppercase hexadecimal.
    Hex { value: u32, digits: usize },
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(i) => write!(f, "{}", i),
            Literal::SignedInteger(s) => write!(f, "{}", s),
            Literal::Hex { value, digits } => write!(f, "0x{:0width$X}", value, width = digits),
        }
    }
}
