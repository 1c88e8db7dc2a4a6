//! EZH test suite

use crate::arch::ezh::symbols::{
    address, condition_name, register_name, signed, CONDITIONS, REGISTERS,
};
use crate::arch::ezh::table::Descriptor;
use crate::arch::ezh::{
    build, decode, disassemble, Disasm, EncodingTable, Error, UNIMPLEMENTED_OPCODES,
};
use crate::ast::Operand;
use std::collections::HashSet;

macro_rules! assert_ezh {
    ($word: expr, $text: expr) => {
        match decode($word, &build(), true).unwrap() {
            Disasm::Instruction(instr) => assert_eq!(format!("{}", instr), $text),
            Disasm::Unrecognized(w) => panic!("0x{:08X} was not recognized", w),
        }
    };
}

macro_rules! assert_ezh_unknown {
    ($word: expr) => {
        assert_eq!(
            decode($word, &build(), true).unwrap(),
            Disasm::Unrecognized($word)
        )
    };
}

macro_rules! assert_encoding {
    ($table: expr, $mnemonic: expr, $mask: expr, $code: expr) => {{
        let descriptor = $table
            .lookup($mnemonic)
            .unwrap_or_else(|| panic!("{} is missing", $mnemonic));
        assert_eq!(
            (descriptor.mask(), descriptor.code()),
            ($mask, $code),
            "{}",
            $mnemonic
        );
    }};
}

#[test]
fn ezh_symbols_total() {
    let registers: HashSet<_> = (0..16).map(register_name).collect();
    let conditions: HashSet<_> = (0..16).map(condition_name).collect();

    assert_eq!(registers.len(), 16);
    assert_eq!(conditions.len(), 16);
    assert_eq!(register_name(0), "R0");
    assert_eq!(register_name(15), "RA");
    assert_eq!(register_name(0x1F), "RA");
    assert_eq!(condition_name(0), "EU");
    assert_eq!(condition_name(15), "EX");
    assert_eq!(REGISTERS[8], "GPO");
    assert_eq!(CONDITIONS[10], "SPO");
}

#[test]
fn ezh_address() {
    assert_eq!(address(0x0002_7020, true), "BOOT");
    assert_eq!(address(0x0002_7048, true), "PENDTRAP");
    assert_eq!(address(0x0002_7020, false), "0x00027020");
    assert_eq!(address(0x0002_7022, true), "0x00027022");
    assert_eq!(address(0x4000_0000, true), "0x40000000");

    assert_eq!(format!("{}", Operand::ptr(0x0002_7024, true)), "CTRL");
    assert_eq!(format!("{}", Operand::ptr(0x0002_7024, false)), "0x00027024");
}

#[test]
fn ezh_signed() {
    assert_eq!(signed(0, 1), 0);
    assert_eq!(signed(1, 1), -1);
    assert_eq!(signed(0x7FF, 11), -1);
    assert_eq!(signed(0x3FF, 11), 1023);
    assert_eq!(signed(0x800, 12), -2048);
    assert_eq!(signed(0x7F, 8), 127);
    assert_eq!(signed(0xFFFF_FFFF, 32), -1);
    assert_eq!(signed(0x8000_0000, 32), -2_147_483_648);

    for bits in 1..=32 {
        let max = (1_i64 << (bits - 1)) - 1;
        let min = -(1_i64 << (bits - 1));
        let top = u32::MAX >> (32 - bits);

        assert_eq!(signed(0, bits), 0);
        assert_eq!(signed(top >> 1, bits), max);
        assert_eq!(signed(top, bits), -1);
        assert_eq!(signed((top >> 1) + 1, bits), min);

        for step in 0..64_u32 {
            let value = step.wrapping_mul(0x9E37_79B9) & top;
            assert_eq!(
                (signed(value, bits) as u64 & u64::from(top)) as u32,
                value,
                "{} bits",
                bits
            );
        }
    }
}

#[test]
fn ezh_table_shape() {
    let table = build();

    assert_eq!(table.len(), 443);
    assert_eq!(table.iter().next().unwrap().mnemonic(), "E_GOSUB");
    assert_eq!(
        table.iter().last().unwrap().mnemonic(),
        "E_COND_FBIT_LSR_SBCS"
    );
    assert_eq!(table.iter().nth(62).unwrap().mnemonic(), "E_WAIT_FOR_BEAT");
    assert_eq!(table.iter().nth(63).unwrap().mnemonic(), "E_COND_ADD_IMM");

    let names: HashSet<_> = table.iter().map(|d| d.mnemonic()).collect();
    assert_eq!(names.len(), table.len());
}

#[test]
fn ezh_table_deterministic() {
    assert_eq!(build(), build());
}

#[test]
fn ezh_table_no_collisions() {
    let collisions = build().collisions();
    assert!(collisions.is_empty(), "colliding descriptors: {:?}", collisions);
}

#[test]
fn ezh_collisions_detected() {
    let table = EncodingTable::new(vec![
        Descriptor::new("E_FIRST", 0xFF, 0x12, vec![]),
        Descriptor::new("E_OTHER", 0xFF, 0x13, vec![]),
        Descriptor::new("E_SECOND", 0x1F, 0x12, vec![]),
    ]);

    assert_eq!(table.collisions(), vec![(0, 2)]);
}

#[test]
fn ezh_arithmetic_encodings() {
    let table = build();

    assert_encoding!(table, "E_COND_ADD_IMM", 0x000C_021F, 0x0004_0006);
    assert_encoding!(table, "E_COND_ADD_IMMS", 0x000C_021F, 0x0004_0206);
    assert_encoding!(table, "E_COND_ADDN_IMM", 0x000C_021F, 0x000C_0006);
    assert_encoding!(table, "E_COND_ADDN_IMMS", 0x000C_021F, 0x000C_0206);
    assert_encoding!(table, "E_COND_ADD_LSL", 0xE00C_021F, 0x0000_0006);
    assert_encoding!(table, "E_COND_ADD_LSLS", 0xE00C_021F, 0x0000_0206);
    assert_encoding!(table, "E_COND_ADDN_LSL", 0xE00C_021F, 0x0008_0006);
    assert_encoding!(table, "E_COND_ADDN_LSLS", 0xE00C_021F, 0x0008_0206);
    assert_encoding!(table, "E_COND_ADD_LSR", 0xE00C_021F, 0x4000_0006);
    assert_encoding!(table, "E_COND_ADDN_LSRS", 0xE00C_021F, 0x4008_0206);
    assert_encoding!(table, "E_COND_ADD_ASR", 0xE00C_021F, 0x2000_0006);
    assert_encoding!(table, "E_COND_ADD_ROR", 0xE00C_021F, 0x6000_0006);
    assert_encoding!(table, "E_COND_ADD_FLSL", 0xE00C_021F, 0x8000_0006);
    assert_encoding!(table, "E_COND_ADD_FLSR", 0xE00C_021F, 0xC000_0006);
    assert_encoding!(table, "E_COND_ADD_FASR", 0xE00C_021F, 0xA000_0006);
    assert_encoding!(table, "E_COND_ADD_FROR", 0xE00C_021F, 0xE000_0006);
    assert_encoding!(table, "E_COND_SUB_LSL", 0xE00C_021F, 0x0000_0008);
    assert_encoding!(table, "E_COND_ORN_ASRS", 0xE00C_021F, 0x2008_020C);
    assert_encoding!(table, "E_COND_AND_FLSR", 0xE00C_021F, 0xC000_000D);
    assert_encoding!(table, "E_COND_XORN_FRORS", 0xE00C_021F, 0xE008_020E);
}

#[test]
fn ezh_shift_accumulate_encodings() {
    let table = build();

    assert_encoding!(table, "E_COND_FEND_LSR", 0xE00C_021F, 0x0000_0011);
    assert_encoding!(table, "E_COND_FEND_LSRS", 0xE00C_021F, 0x0000_0211);
    assert_encoding!(table, "E_COND_FEND_LSR_AND", 0xE00C_021F, 0x2000_0011);
    assert_encoding!(table, "E_COND_FEND_LSR_OR", 0xE00C_021F, 0x4000_0011);
    assert_encoding!(table, "E_COND_FEND_LSR_XOR", 0xE00C_021F, 0x6000_0011);
    assert_encoding!(table, "E_COND_FEND_LSR_ADD", 0xE00C_021F, 0x8000_0011);
    assert_encoding!(table, "E_COND_FEND_LSR_SUB", 0xE00C_021F, 0xA000_0011);
    assert_encoding!(table, "E_COND_FEND_LSR_ADC", 0xE00C_021F, 0xC000_0011);
    assert_encoding!(table, "E_COND_FEND_LSR_SBC", 0xE00C_021F, 0xE000_0011);
    assert_encoding!(table, "E_COND_FEND_LSR_SBCS", 0xE00C_021F, 0xE000_0211);
    assert_encoding!(table, "E_COND_LSR", 0xE00C_021F, 0x0008_0010);
    assert_encoding!(table, "E_COND_ROR_ADD", 0xE00C_021F, 0x800C_0010);
    assert_encoding!(table, "E_COND_FEND_ASR_XORS", 0xE00C_021F, 0x6008_0211);
    assert_encoding!(table, "E_COND_FBIT_LSR_SBCS", 0xE00C_021F, 0xE004_0211);
}

#[test]
fn ezh_singleton_encodings() {
    let table = build();

    assert_encoding!(table, "E_GOSUB", 0x3, 0x3);
    assert_encoding!(table, "E_NOP", 0xFF, 0x12);
    assert_encoding!(table, "E_COND_GOTO", 0x61F, 0x215);
    assert_encoding!(table, "E_COND_GOTO_REGL", 0x61F, 0x415);
    assert_encoding!(table, "E_COND_MVNS", 0x8004_021F, 0x8000_0200);
    assert_encoding!(table, "E_COND_LOAD_SIMMN", 0x8004_021F, 0x8004_0000);
    assert_encoding!(table, "E_COND_LDRBS_POST", 0x003C_001F, 0x0038_0001);
    assert_encoding!(table, "E_COND_STRB_PRE", 0x000C_0C1F, 0x0000_0402);
    assert_encoding!(table, "E_COND_BTST", 0xE004_021F, 0xA004_0018);
    assert_encoding!(table, "E_COND_BTOG_IMMS", 0xE004_021F, 0xE000_0218);
    assert_encoding!(table, "E_COND_HOLD", 0x000C_821F, 0x0000_801C);
    assert_encoding!(
        table,
        "E_COND_ACC_VECTORED_HOLD_LV_NRA",
        0x000C_821F,
        0x000C_021C
    );
    assert_encoding!(table, "E_HEART_RYTHM", 0x2FF, 0x232);
    assert_encoding!(table, "E_WAIT_FOR_BEAT", 0xFF, 0x72);
}

#[test]
fn ezh_disasm() {
    assert_ezh!(0x0000_0012, "E_NOP");
    assert_ezh!(0x0000_0072, "E_WAIT_FOR_BEAT");
    assert_ezh!(0x0000_8440, "E_COND_MOV(NZ, R1, R2)");
    assert_ezh!(0x0000_1233, "E_GOSUB(0x00001230)");
    assert_ezh!(0x00AB_CD14, "E_INT_TRIGGER(0x0000ABCD)");
    assert_ezh!(0x3344_551E, "E_MODIFY_GPO_BYTE(0x55, 0x44, 0x33)");
    assert_ezh!(0x7FFD_4C00, "E_COND_LOAD_SIMM(EU, R3, -1, 21)");
    assert_ezh!(0x0000_801C, "E_COND_HOLD(EU)");
    assert_ezh!(0x0064_0032, "E_HEART_RYTHM_IMM(100)");
    assert_ezh!(0x8000_0052, "E_SYNCH_ALL_TO_BEAT(1)");
    assert_ezh!(0xFF04_3C21, "E_COND_LDR(ZE, RA, R0, -1)");
    assert_ezh!(0x0000_0032, "E_HEART_RYTHM_IMM(0)");
}

#[test]
fn ezh_disasm_families() {
    assert_ezh!(0x4626_9F46, "E_COND_ADD_IMMS(SPO, R7, CFS, 1122)");
    assert_ezh!(0x888D_17AA, "E_COND_SBCN_IMMS(NEX, R5, R4, -1912)");
    assert_ezh!(0x2530_C8E6, "E_COND_ADD_ASR(CA, R2, R3, R3, 5)");
    assert_ezh!(0x0A32_D8E8, "E_COND_SUB_LSL(CA, R6, CFM, R3, 10)");
    assert_ezh!(0x0582_4C10, "E_COND_LSL(EU, R3, GPO, 5)");
    assert_ezh!(0x8F25_D431, "E_COND_FBIT_LSR_ADD(ZE, R5, R7, R2, 15)");
}

#[test]
fn ezh_disasm_gaps() {
    assert_ezh_unknown!(0x0000_0016);
    assert_ezh_unknown!(0x0000_0019);
    assert_ezh_unknown!(0x0000_001D);

    for &opcode in UNIMPLEMENTED_OPCODES.iter() {
        assert_ezh_unknown!(opcode | (3 << 5) | (7 << 10));
    }
}

#[test]
fn ezh_peripheral_alias() {
    let table = build();

    match decode(0x2730_2005, &table, true).unwrap() {
        Disasm::Instruction(instr) => {
            assert_eq!(format!("{}", instr), "E_COND_PER_WRITE(EU, R3, BOOT)")
        }
        other => panic!("unexpected {:?}", other),
    }

    match decode(0x2730_2005, &table, false).unwrap() {
        Disasm::Instruction(instr) => {
            assert_eq!(format!("{}", instr), "E_COND_PER_WRITE(EU, R3, 0x00027020)")
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn ezh_tentative() {
    let table = build();

    match decode(0x0000_081C, &table, true).unwrap() {
        Disasm::Instruction(instr) => {
            assert_eq!(instr.opcode(), "E_COND_VECTORED_HOLD");
            assert!(instr.is_tentative());
        }
        other => panic!("unexpected {:?}", other),
    }

    match decode(0x0000_8440, &table, true).unwrap() {
        Disasm::Instruction(instr) => assert!(!instr.is_tentative()),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn ezh_stream() {
    let table = build();
    let stream = disassemble(&[0x12, 0x16, 0x72], &table, true).unwrap();

    assert_eq!(stream.len(), 3);
    assert!(stream[0].is_recognized());
    assert_eq!(stream[1], Disasm::Unrecognized(0x16));
    assert!(stream[2].is_recognized());

    let words: Vec<u32> = (0..4096_u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
    let parallel = disassemble(&words, &table, true).unwrap();
    let serial: Vec<_> = words
        .iter()
        .map(|&w| decode(w, &table, true).unwrap())
        .collect();
    assert_eq!(parallel, serial);
}

#[test]
fn ezh_ambiguous() {
    let table = EncodingTable::new(vec![
        Descriptor::new("E_FIRST", 0xFF, 0x12, vec![]),
        Descriptor::new("E_SECOND", 0xFF, 0x12, vec![]),
    ]);

    match decode(0x12, &table, true).unwrap_err() {
        Error::AmbiguousEncoding {
            word,
            first,
            second,
        } => {
            assert_eq!(word, 0x12);
            assert_eq!(first, "E_FIRST");
            assert_eq!(second, "E_SECOND");
        }
    }

    assert!(disassemble(&[0x72, 0x12], &table, true).is_err());
    assert_eq!(
        disassemble(&[0x72], &table, true).unwrap(),
        vec![Disasm::Unrecognized(0x72)]
    );
}
