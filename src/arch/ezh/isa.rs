//! The EZH instruction set, as far as it has been reverse engineered.
//!
//! Opcodes 0x16 (combined AND/OR), 0x19 (register-specified shift), and 0x1D
//! (load/store with register offset) are known to exist but their operand
//! layout is not understood, so they have no descriptors and disassemble as
//! unknown instructions.

use crate::arch::ezh::bits::*;
use crate::arch::ezh::families;
use crate::arch::ezh::field::{Field, Slice};
use crate::arch::ezh::table::{Descriptor, EncodingTable};

static GOSUB_TARGET: &[Slice] = &[Slice::new(0, !0x7)];
static GOTO_TARGET: &[Slice] = &[Slice::new(9, !0x3)];
static PER_READ_ADDR: &[Slice] = &[Slice::new(12, 0x000F_FFFC)];
static PER_WRITE_ADDR: &[Slice] = &[Slice::new(12, 0x000F_F000), Slice::new(8, 0x0000_0FFC)];

/// Rotation of the load-immediate value: bits 14..17, with bit 19 on top.
static LOAD_ROTATE: &[Slice] = &[Slice::new(RS_SHIFT, 0xF), Slice::new(15, 0x10)];

static BIT_INDEX: &[Slice] = &[Slice::new(AMOUNT_SHIFT, 0x1F)];
static HEART_PERIOD: &[Slice] = &[Slice::new(16, 0xFFFF)];
static SYNCH_ALL: &[Slice] = &[Slice::new(31, 0x1)];

/// Arithmetic family base opcodes, in table order.
static ARITHMETIC_OPS: [(&str, u32); 7] = [
    ("ADD", 0x06),
    ("SUB", 0x08),
    ("ADC", 0x09),
    ("SBC", 0x0A),
    ("OR", 0x0C),
    ("AND", 0x0D),
    ("XOR", 0x0E),
];

/// Shift-accumulate families: base opcode and the two rounding mode bits.
static SHIFT_OPS: [(&str, u32, bool, bool); 8] = [
    ("LSL", 0x10, false, false),
    ("LSR", 0x10, false, true),
    ("ROR", 0x10, true, true),
    ("ASR", 0x10, true, false),
    ("FEND_ASR", 0x11, false, true),
    ("FBIT_ASR", 0x11, true, true),
    ("FEND_LSR", 0x11, false, false),
    ("FBIT_LSR", 0x11, true, false),
];

/// Load addressing modes: mnemonic suffix and mode bits.
static LOAD_MODES: [(&str, u32); 3] = [
    ("", 0),
    ("_PRE", LOAD_INDEX_BIT),
    ("_POST", LOAD_INDEX_BIT | POST_INDEX_BIT),
];

static STORE_MODES: [(&str, u32); 3] = [
    ("", 0),
    ("_PRE", STORE_INDEX_BIT),
    ("_POST", STORE_INDEX_BIT | POST_INDEX_BIT),
];

/// Bit test/modify operations and their operation selector values.
static BIT_OPS: [(&str, u32); 4] = [("BTST", 5), ("BCLR", 1), ("BSET", 6), ("BTOG", 7)];

/// Build the complete EZH encoding table.
pub fn build() -> EncodingTable {
    let mut descriptors = singletons();

    for &(name, op) in ARITHMETIC_OPS.iter() {
        descriptors.extend(families::arithmetic(name, op));
    }

    for &(name, op, mode_low, mode_high) in SHIFT_OPS.iter() {
        descriptors.extend(families::shift_accumulate(name, op, mode_low, mode_high));
    }

    EncodingTable::new(descriptors)
}

fn singletons() -> Vec<Descriptor> {
    let mut table = vec![
        Descriptor::new(
            "E_GOSUB",
            GOSUB_MASK,
            0x3,
            vec![Field::address(GOSUB_TARGET)],
        ),
        Descriptor::new("E_NOP", WIDE_OPCODE_MASK, 0x12, vec![]),
        Descriptor::new(
            "E_INT_TRIGGER",
            WIDE_OPCODE_MASK,
            0x14,
            vec![Field::hex(8, 0x00FF_FFFF, 8)],
        ),
    ];

    let goto_mask = OPCODE_MASK | GOTO_ADDRESS_BIT | LINK_BIT;
    let goto_addr = vec![Field::condition(), Field::address(GOTO_TARGET)];
    let goto_reg = vec![Field::condition(), Field::register(RS_SHIFT)];
    table.push(Descriptor::new("E_COND_GOTO", goto_mask, 0x15 | GOTO_ADDRESS_BIT, goto_addr.clone()));
    table.push(Descriptor::new("E_COND_GOTO_REG", goto_mask, 0x15, goto_reg.clone()));
    table.push(Descriptor::new(
        "E_COND_GOTOL",
        goto_mask,
        0x15 | GOTO_ADDRESS_BIT | LINK_BIT,
        goto_addr,
    ));
    table.push(Descriptor::new("E_COND_GOTO_REGL", goto_mask, 0x15 | LINK_BIT, goto_reg));

    let move_mask = OPCODE_MASK | FLAG_UPDATE_BIT | IMMEDIATE_BIT | MOVE_NEGATE_BIT;
    for &(name, negate) in &[("MOV", 0), ("MVN", MOVE_NEGATE_BIT)] {
        for &flags in &[0, FLAG_UPDATE_BIT] {
            let suffix = if flags != 0 { "S" } else { "" };
            table.push(Descriptor::new(
                &format!("E_COND_{}{}", name, suffix),
                move_mask,
                negate | flags,
                vec![
                    Field::condition(),
                    Field::destination(),
                    Field::register(RS_SHIFT),
                ],
            ));
        }
    }
    for &(name, negate) in &[("", 0), ("N", MOVE_NEGATE_BIT)] {
        for &flags in &[0, FLAG_UPDATE_BIT] {
            let suffix = if flags != 0 { "S" } else { "" };
            table.push(Descriptor::new(
                &format!("E_COND_LOAD_SIMM{}{}", name, suffix),
                move_mask,
                IMMEDIATE_BIT | negate | flags,
                vec![
                    Field::condition(),
                    Field::destination(),
                    Field::signed(RT_SHIFT, 11),
                    Field::unsigned(LOAD_ROTATE),
                ],
            ));
        }
    }

    let load_mask = OPCODE_MASK | WORD_BIT | POST_INDEX_BIT | LOAD_INDEX_BIT | LOAD_SIGNED_BIT;
    for &(suffix, mode) in LOAD_MODES.iter() {
        for &(width, bits) in &[("LDR", WORD_BIT), ("LDRB", 0), ("LDRBS", LOAD_SIGNED_BIT)] {
            table.push(Descriptor::new(
                &format!("E_COND_{}{}", width, suffix),
                load_mask,
                0x1 | bits | mode,
                vec![
                    Field::condition(),
                    Field::destination(),
                    Field::register(RS_SHIFT),
                    Field::signed(AMOUNT_SHIFT, 8),
                ],
            ));
        }
    }

    let store_mask = OPCODE_MASK | WORD_BIT | POST_INDEX_BIT | STORE_INDEX_BIT | STORE_RESERVED_BIT;
    for &(suffix, mode) in STORE_MODES.iter() {
        for &(width, bits) in &[("STR", WORD_BIT), ("STRB", 0)] {
            table.push(Descriptor::new(
                &format!("E_COND_{}{}", width, suffix),
                store_mask,
                0x2 | bits | mode,
                vec![
                    Field::condition(),
                    Field::register(RS_SHIFT),
                    Field::register(RT_SHIFT),
                    Field::signed(AMOUNT_SHIFT, 8),
                ],
            ));
        }
    }

    table.push(Descriptor::new(
        "E_COND_PER_READ",
        OPCODE_MASK,
        0x4,
        vec![
            Field::condition(),
            Field::destination(),
            Field::address(PER_READ_ADDR),
        ],
    ));
    table.push(Descriptor::new(
        "E_COND_PER_WRITE",
        OPCODE_MASK,
        0x5,
        vec![
            Field::condition(),
            Field::register(RT_SHIFT),
            Field::address(PER_WRITE_ADDR),
        ],
    ));

    let bit_mask = OPCODE_MASK | FLAG_UPDATE_BIT | IMMEDIATE_BIT | OPERATION_BITS;
    for &(immediate, form) in &[(false, ""), (true, "_IMM")] {
        for &flags in &[0, FLAG_UPDATE_BIT] {
            for &(name, selector) in BIT_OPS.iter() {
                let suffix = if flags != 0 { "S" } else { "" };
                // The register form is the one with bit 18 set.
                let (source, bit) = if immediate {
                    (0, Field::unsigned(BIT_INDEX))
                } else {
                    (IMMEDIATE_BIT, Field::register(RT_SHIFT))
                };

                table.push(Descriptor::new(
                    &format!("E_COND_{}{}{}", name, form, suffix),
                    bit_mask,
                    0x18 | source | flags | (selector << OPERATION_SHIFT),
                    vec![
                        Field::condition(),
                        Field::destination(),
                        Field::register(RS_SHIFT),
                        bit,
                    ],
                ));
            }
        }
    }

    table.push(Descriptor::new(
        "E_COND_TIGHT_LOOP",
        OPCODE_MASK,
        0x1A,
        vec![
            Field::condition(),
            Field::register(RS_SHIFT),
            Field::register(RT_SHIFT),
        ],
    ));

    let hold_mask = OPCODE_MASK | HOLD_ACCUMULATE_BIT | HOLD_PLAIN_BIT | NO_RETURN_BIT | LOAD_VECTOR_BIT;
    table.push(Descriptor::new(
        "E_COND_HOLD",
        hold_mask,
        0x1C | HOLD_PLAIN_BIT,
        vec![Field::condition()],
    ));
    for &(prefix, accumulate) in &[("", 0), ("ACC_", HOLD_ACCUMULATE_BIT)] {
        for &(suffix, mode) in &[
            ("", 0),
            ("_NRA", NO_RETURN_BIT),
            ("_LV", LOAD_VECTOR_BIT),
            ("_LV_NRA", LOAD_VECTOR_BIT | NO_RETURN_BIT),
        ] {
            // The vector table and vector register operands are unconfirmed.
            let mut fields = vec![Field::condition(), Field::destination().tentative()];
            if accumulate != 0 {
                fields.push(Field::register(AMOUNT_SHIFT).tentative());
            }

            table.push(Descriptor::new(
                &format!("E_COND_{}VECTORED_HOLD{}", prefix, suffix),
                hold_mask,
                0x1C | accumulate | mode,
                fields,
            ));
        }
    }

    table.push(Descriptor::new(
        "E_MODIFY_GPO_BYTE",
        WIDE_OPCODE_MASK,
        0x1E,
        vec![
            Field::hex(8, 0xFF, 2),
            Field::hex(16, 0xFF, 2),
            Field::hex(24, 0xFF, 2),
        ],
    ));

    table.push(Descriptor::new(
        "E_HEART_RYTHM_IMM",
        WIDE_OPCODE_MASK | HEART_REGISTER_BIT,
        0x32,
        vec![Field::unsigned(HEART_PERIOD)],
    ));
    table.push(Descriptor::new(
        "E_HEART_RYTHM",
        WIDE_OPCODE_MASK | HEART_REGISTER_BIT,
        0x32 | HEART_REGISTER_BIT,
        vec![Field::register(RS_SHIFT)],
    ));
    table.push(Descriptor::new(
        "E_SYNCH_ALL_TO_BEAT",
        WIDE_OPCODE_MASK,
        0x52,
        vec![Field::unsigned(SYNCH_ALL)],
    ));
    table.push(Descriptor::new("E_WAIT_FOR_BEAT", WIDE_OPCODE_MASK, 0x72, vec![]));

    table
}
