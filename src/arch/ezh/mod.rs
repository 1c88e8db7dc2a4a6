//! NXP's EZH, also sold as SmartDMA or IOH Architecture B: a small 32-bit
//! microcoded coprocessor that sits next to the Cortex-M core on some LPC and
//! i.MX RT parts.
//!
//! Every instruction is a single little-endian 32-bit word. Instructions are
//! recognized by a table of (mask, code) pairs; see `isa` for the table
//! itself.

mod bits;
mod dis;
mod error;
mod families;
mod field;
mod isa;
mod symbols;
mod table;

#[cfg(test)]
mod tests;

pub use bits::UNIMPLEMENTED_OPCODES;
pub use dis::{decode, disassemble, Disasm};
pub use error::{Error, Result};
pub use isa::build;
pub use symbols::address;
pub use table::EncodingTable;
