//! Named bit positions within an EZH instruction word.
//!
//! Every conditional instruction keeps its condition code in bits 5..8 and
//! its major opcode in bits 0..4. The remaining bits are modifiers whose
//! meaning depends on the opcode, so several constants below share a bit
//! position.

/// The low five bits select the major opcode.
pub const OPCODE_MASK: u32 = 0x1F;

/// Unconditional housekeeping opcodes use the entire low byte.
pub const WIDE_OPCODE_MASK: u32 = 0xFF;

/// Both low bits set selects a subroutine call regardless of the rest.
pub const GOSUB_MASK: u32 = 0x3;

/// Shift of the 4-bit condition code field.
pub const CONDITION_SHIFT: u32 = 5;

/// Destination register field.
pub const RD_SHIFT: u32 = 10;

/// First source register field.
pub const RS_SHIFT: u32 = 14;

/// Second source register field.
pub const RT_SHIFT: u32 = 20;

/// Shift amount or bit index field, five bits wide.
pub const AMOUNT_SHIFT: u32 = 24;

/// Update the flags register with the result.
pub const FLAG_UPDATE_BIT: u32 = 1 << 9;

/// Branch target is an immediate address rather than a register.
pub const GOTO_ADDRESS_BIT: u32 = 1 << 9;

/// Branch saves the return address.
pub const LINK_BIT: u32 = 1 << 10;

/// Second operand is an immediate rather than a register.
pub const IMMEDIATE_BIT: u32 = 1 << 18;

/// Negate the second operand of an arithmetic instruction.
pub const NEGATE_BIT: u32 = 1 << 19;

/// Negate the source of a move.
pub const MOVE_NEGATE_BIT: u32 = 1 << 31;

/// Load or store a full word instead of a byte.
pub const WORD_BIT: u32 = 1 << 18;

/// Post-increment rather than pre-increment the base register.
pub const POST_INDEX_BIT: u32 = 1 << 19;

/// Write the incremented address back to a load's base register.
pub const LOAD_INDEX_BIT: u32 = 1 << 20;

/// Sign-extend a loaded byte.
pub const LOAD_SIGNED_BIT: u32 = 1 << 21;

/// Write the incremented address back to a store's base register.
pub const STORE_INDEX_BIT: u32 = 1 << 10;

/// Reserved in stores; must be clear.
pub const STORE_RESERVED_BIT: u32 = 1 << 11;

/// Shift type selector of the register-shifted-register form.
pub const SHIFT_TYPE_BITS: u32 = 3 << 29;

/// Selects the "fast" counterpart of a shift.
pub const FAST_SHIFT_BIT: u32 = 1 << 31;

/// Accumulate operation selector of the shift-accumulate form, and the bit
/// operation selector of the bit test/modify form.
pub const OPERATION_BITS: u32 = 7 << 29;

/// Shift of the accumulate/bit operation selector.
pub const OPERATION_SHIFT: u32 = 29;

/// Shift-accumulate rounding mode bits.
pub const MODE_LOW_BIT: u32 = 1 << 18;
pub const MODE_HIGH_BIT: u32 = 1 << 19;

/// Plain hold, with no vector table.
pub const HOLD_PLAIN_BIT: u32 = 1 << 15;

/// Vectored hold does not save a return address.
pub const NO_RETURN_BIT: u32 = 1 << 18;

/// Vectored hold loads the vector.
pub const LOAD_VECTOR_BIT: u32 = 1 << 19;

/// Vectored hold accumulates into a second vector register.
pub const HOLD_ACCUMULATE_BIT: u32 = 1 << 9;

/// Heartbeat period comes from a register rather than an immediate.
pub const HEART_REGISTER_BIT: u32 = 1 << 9;

/// Opcodes with no implemented encoding.
pub const UNIMPLEMENTED_OPCODES: [u32; 3] = [0x16, 0x19, 0x1D];
