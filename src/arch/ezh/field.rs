//! Operand field extraction

use crate::arch::ezh::bits::{CONDITION_SHIFT, RD_SHIFT};
use crate::arch::ezh::symbols;
use crate::ast::Operand;
use serde::Serialize;

/// A run of bits taken from an instruction word: `(word >> shift) & mask`.
///
/// The mask is applied after shifting, so it may leave low bits clear to
/// express fields that are implicitly aligned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub shift: u32,
    pub mask: u32,
}

impl Slice {
    pub const fn new(shift: u32, mask: u32) -> Self {
        Slice { shift, mask }
    }

    pub fn extract(self, word: u32) -> u32 {
        (word >> self.shift) & self.mask
    }
}

/// Combine several slices into one value. Slices are expected to land on
/// disjoint bits.
fn gather(slices: &[Slice], word: u32) -> u32 {
    slices.iter().fold(0, |acc, slice| acc | slice.extract(word))
}

/// How a field's bits are interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    /// Unsigned integer assembled from one or more slices.
    Unsigned(&'static [Slice]),

    /// Two's-complement integer `bits` wide starting at `shift`.
    Signed { shift: u32, bits: u32 },

    /// Raw value printed as fixed-width hexadecimal.
    Hex { slice: Slice, digits: usize },

    /// 4-bit register index.
    Register { shift: u32 },

    /// 4-bit condition code.
    Condition { shift: u32 },

    /// Bus address assembled from one or more slices; eligible for
    /// peripheral aliasing.
    Address(&'static [Slice]),
}

/// One operand of an instruction descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Field {
    kind: FieldKind,

    /// The field's meaning has not been confirmed against hardware.
    tentative: bool,
}

impl Field {
    pub const fn new(kind: FieldKind) -> Self {
        Field {
            kind,
            tentative: false,
        }
    }

    pub const fn condition() -> Self {
        Field::new(FieldKind::Condition {
            shift: CONDITION_SHIFT,
        })
    }

    pub const fn register(shift: u32) -> Self {
        Field::new(FieldKind::Register { shift })
    }

    pub const fn destination() -> Self {
        Field::register(RD_SHIFT)
    }

    pub const fn unsigned(slices: &'static [Slice]) -> Self {
        Field::new(FieldKind::Unsigned(slices))
    }

    pub const fn signed(shift: u32, bits: u32) -> Self {
        Field::new(FieldKind::Signed { shift, bits })
    }

    pub const fn hex(shift: u32, mask: u32, digits: usize) -> Self {
        Field::new(FieldKind::Hex {
            slice: Slice::new(shift, mask),
            digits,
        })
    }

    pub const fn address(slices: &'static [Slice]) -> Self {
        Field::new(FieldKind::Address(slices))
    }

    /// Mark this field as not yet verified.
    pub const fn tentative(self) -> Self {
        Field {
            kind: self.kind,
            tentative: true,
        }
    }

    pub fn is_tentative(&self) -> bool {
        self.tentative
    }

    /// Extract this field from `word`.
    ///
    /// Never fails: every lookup table is total over its index width.
    pub fn decode(&self, word: u32, aliasing: bool) -> Operand {
        match self.kind {
            FieldKind::Unsigned(slices) => Operand::int(gather(slices, word)),
            FieldKind::Signed { shift, bits } => {
                let mask = u32::MAX >> (32 - bits);
                Operand::sint(symbols::signed((word >> shift) & mask, bits))
            }
            FieldKind::Hex { slice, digits } => Operand::hex(slice.extract(word), digits),
            FieldKind::Register { shift } => Operand::sym(symbols::register_name(word >> shift)),
            FieldKind::Condition { shift } => {
                Operand::sym(symbols::condition_name(word >> shift))
            }
            FieldKind::Address(slices) => Operand::ptr(gather(slices, word), aliasing),
        }
    }
}
