#[macro_use]
extern crate clap;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_plain;

mod arch;
mod asm;
mod ast;
mod cli;
mod memory;
mod project;

use std::io;

fn main() -> io::Result<()> {
    cli::main()
}
