//! An abstract syntax tree representation of disassembled code

mod instr;
mod literal;
mod operand;

pub use instr::Instruction;
pub use literal::Literal;
pub use operand::Operand;
