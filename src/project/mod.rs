//! Project file structures

mod error;
mod program;
mod repr;

pub use error::{Error, Result};
pub use program::Program;
pub use repr::{Project, DEFAULT_PROJECT_FILE};
