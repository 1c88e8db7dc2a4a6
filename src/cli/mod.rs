//! CLI commands

mod check;
mod common;
mod convert;
mod dis;
mod main;
mod table;

pub use check::check;
pub use common::Command;
pub use convert::convert;
pub use dis::dis;
pub use main::main;
pub use table::table;

#[cfg(test)]
mod tests;
