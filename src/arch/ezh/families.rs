//! Generators for the opcode families that compose a base opcode with
//! independent modifier bits.

use crate::arch::ezh::bits::*;
use crate::arch::ezh::field::{Field, Slice};
use crate::arch::ezh::table::Descriptor;

/// 5-bit shift amount.
static SHIFT_AMOUNT: &[Slice] = &[Slice::new(AMOUNT_SHIFT, 0x1F)];

/// Shift types of the register-shifted-register form, in table order.
static SHIFT_TYPES: [(&str, u32); 4] = [
    ("LSL", 0),
    ("LSR", 2 << 29),
    ("ASR", 1 << 29),
    ("ROR", 3 << 29),
];

/// Accumulate operations of the shift-accumulate form, indexed by the value
/// of the operation selector. Selector 0 means no accumulation.
static ACCUMULATE_OPS: [&str; 8] = ["", "AND", "OR", "XOR", "ADD", "SUB", "ADC", "SBC"];

/// Suffix for the flag-updating variant.
fn flag_suffix(flags: bool) -> &'static str {
    if flags {
        "S"
    } else {
        ""
    }
}

fn flag_bit(flags: bool) -> u32 {
    if flags {
        FLAG_UPDATE_BIT
    } else {
        0
    }
}

/// Generate the three-operand arithmetic family for `op`.
///
/// Immediate forms come first (plain, then negated), followed by every
/// register-shifted-register form: the four shift types, then their fast
/// counterparts, each as plain and negated. Every combination is emitted
/// without and then with the flag update.
pub fn arithmetic(name: &str, op: u32) -> Vec<Descriptor> {
    let imm_mask = OPCODE_MASK | FLAG_UPDATE_BIT | IMMEDIATE_BIT | NEGATE_BIT;
    let reg_mask = imm_mask | SHIFT_TYPE_BITS | FAST_SHIFT_BIT;
    let mut family = Vec::with_capacity(36);

    for &negate in &[false, true] {
        for &flags in &[false, true] {
            let negate_bit = if negate { NEGATE_BIT } else { 0 };

            family.push(Descriptor::new(
                &format!(
                    "E_COND_{}{}_IMM{}",
                    name,
                    if negate { "N" } else { "" },
                    flag_suffix(flags)
                ),
                imm_mask,
                op | IMMEDIATE_BIT | negate_bit | flag_bit(flags),
                vec![
                    Field::condition(),
                    Field::destination(),
                    Field::register(RS_SHIFT),
                    Field::signed(RT_SHIFT, 12),
                ],
            ));
        }
    }

    for &fast in &[false, true] {
        for &(shift_name, shift_bits) in SHIFT_TYPES.iter() {
            for &negate in &[false, true] {
                for &flags in &[false, true] {
                    let fast_bit = if fast { FAST_SHIFT_BIT } else { 0 };
                    let negate_bit = if negate { NEGATE_BIT } else { 0 };

                    family.push(Descriptor::new(
                        &format!(
                            "E_COND_{}{}_{}{}{}",
                            name,
                            if negate { "N" } else { "" },
                            if fast { "F" } else { "" },
                            shift_name,
                            flag_suffix(flags)
                        ),
                        reg_mask,
                        op | shift_bits | fast_bit | negate_bit | flag_bit(flags),
                        vec![
                            Field::condition(),
                            Field::destination(),
                            Field::register(RS_SHIFT),
                            Field::register(RT_SHIFT),
                            Field::unsigned(SHIFT_AMOUNT),
                        ],
                    ));
                }
            }
        }
    }

    family
}

/// Generate the shift-with-accumulate family for `op` in the rounding mode
/// given by `mode_low` and `mode_high` (bits 18 and 19).
///
/// The bare shift takes a single source; accumulating forms combine the
/// shifted value with a second source register.
pub fn shift_accumulate(name: &str, op: u32, mode_low: bool, mode_high: bool) -> Vec<Descriptor> {
    let mask = OPCODE_MASK | FLAG_UPDATE_BIT | MODE_LOW_BIT | MODE_HIGH_BIT | OPERATION_BITS;
    let mut mode = 0;
    if mode_low {
        mode |= MODE_LOW_BIT;
    }
    if mode_high {
        mode |= MODE_HIGH_BIT;
    }

    let mut family = Vec::with_capacity(16);

    for (selector, accumulate) in ACCUMULATE_OPS.iter().enumerate() {
        for &flags in &[false, true] {
            let code = op | mode | ((selector as u32) << OPERATION_SHIFT) | flag_bit(flags);

            let (mnemonic, fields) = if accumulate.is_empty() {
                (
                    format!("E_COND_{}{}", name, flag_suffix(flags)),
                    vec![
                        Field::condition(),
                        Field::destination(),
                        Field::register(RT_SHIFT),
                        Field::unsigned(SHIFT_AMOUNT),
                    ],
                )
            } else {
                (
                    format!("E_COND_{}_{}{}", name, accumulate, flag_suffix(flags)),
                    vec![
                        Field::condition(),
                        Field::destination(),
                        Field::register(RS_SHIFT),
                        Field::register(RT_SHIFT),
                        Field::unsigned(SHIFT_AMOUNT),
                    ],
                )
            };

            family.push(Descriptor::new(&mnemonic, mask, code, fields));
        }
    }

    family
}
