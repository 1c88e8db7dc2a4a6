//! The `check` command

use crate::arch::ezh;
use log::{error, info};
use std::io;

/// Verify the encoding table exhaustively. Fails if any two encodings can
/// match the same word, or if a known gap in the instruction set is claimed
/// by some encoding.
pub fn check() -> io::Result<()> {
    let table = ezh::build();
    let descriptors: Vec<_> = table.iter().collect();
    let collisions = table.collisions();

    for &(i, j) in collisions.iter() {
        error!(
            "{} ({:08X}/{:08X}) overlaps {} ({:08X}/{:08X})",
            descriptors[i].mnemonic(),
            descriptors[i].mask(),
            descriptors[i].code(),
            descriptors[j].mnemonic(),
            descriptors[j].mask(),
            descriptors[j].code()
        );
    }

    if !collisions.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("{} pairs of encodings overlap", collisions.len()),
        ));
    }

    for &opcode in ezh::UNIMPLEMENTED_OPCODES.iter() {
        if let ezh::Disasm::Instruction(instr) = ezh::decode(opcode, &table, false)? {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!(
                    "unimplemented opcode {:#04X} decodes as {}",
                    opcode,
                    instr.opcode()
                ),
            ));
        }
    }

    info!("All {} encodings are disjoint", table.len());

    Ok(())
}
