//! Processor architectures that ezhdis can disassemble.
//!
//! Only NXP's EZH is implemented. Each architecture lives in a child module
//! that exposes an encoding table builder and a `disassemble` function.

pub mod ezh;
