//! Register, condition, and peripheral symbol tables

use std::collections::HashMap;

/// EZH register encoding uses this 4-bit enumeration for every register
/// operand. R0-R7 are general purpose; the rest are memory-mapped GPIO,
/// configuration, and control registers.
pub static REGISTERS: [&str; 16] = [
    "R0", "R1", "R2", "R3", "R4", "R5", "R6", "R7", "GPO", "GPD", "CFS", "CFM", "SP", "PC", "GPI",
    "RA",
];

/// EZH instruction encoding uses this 4-bit enumeration to encode the
/// condition under which any conditional instruction executes.
pub static CONDITIONS: [&str; 16] = [
    "EU", "ZE", "NZ", "PO", "NE", "AZ", "ZB", "CA", "NC", "CZ", "SPO", "SNE", "NBS", "NEX", "BS",
    "EX",
];

lazy_static! {
    /// Control block registers of the SmartDMA engine, as seen from the
    /// engine's own peripheral bus.
    pub static ref PERIPHERAL_REGS: HashMap<u32, &'static str> = {
        let mut regs = HashMap::new();

        regs.insert(0x0002_7020, "BOOT");
        regs.insert(0x0002_7024, "CTRL");
        regs.insert(0x0002_7028, "PC");
        regs.insert(0x0002_702C, "SP");
        regs.insert(0x0002_7030, "BREAK_ADDR");
        regs.insert(0x0002_7034, "BREAK_VECT");
        regs.insert(0x0002_7038, "EMER_VECT");
        regs.insert(0x0002_703C, "EMER_SEL");
        regs.insert(0x0002_7040, "ARM2SMARTDMA");
        regs.insert(0x0002_7044, "SMARTDMA2ARM");
        regs.insert(0x0002_7048, "PENDTRAP");

        regs
    };
}

/// Name the register encoded by the low four bits of `index`.
pub fn register_name(index: u32) -> &'static str {
    REGISTERS[(index & 0xF) as usize]
}

/// Name the condition encoded by the low four bits of `index`.
pub fn condition_name(index: u32) -> &'static str {
    CONDITIONS[(index & 0xF) as usize]
}

/// Reinterpret the low `bits` bits of `value` as a two's-complement integer.
///
/// `bits` must be between 1 and 32 inclusive.
pub fn signed(value: u32, bits: u32) -> i64 {
    let value = i64::from(value);
    let sign_bit = 1_i64 << (bits - 1);

    (value & (sign_bit - 1)) - (value & sign_bit)
}

/// Look up the symbolic name of a peripheral address.
pub fn alias(raw: u32) -> Option<&'static str> {
    PERIPHERAL_REGS.get(&raw).copied()
}

/// Render an address, substituting the peripheral register name if
/// `aliasing` is enabled and one exists.
pub fn address(raw: u32, aliasing: bool) -> String {
    match alias(raw) {
        Some(name) if aliasing => name.to_string(),
        _ => format!("0x{:08X}", raw),
    }
}
