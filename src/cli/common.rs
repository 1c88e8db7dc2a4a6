//! Common utilities for command implementations

use crate::asm::AssemblerName;
use crate::project::{self, Program, Project};
use clap::{App, SubCommand};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Enumeration of all CLI commands
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Disassemble,
    Convert,
    Table,
    Check,
}

impl Command {
    /// Enumerate all commands that ezhdis recognizes.
    pub fn enumerate() -> Vec<Self> {
        use Command::*;

        vec![Disassemble, Convert, Table, Check]
    }

    /// Construct the subcommand object for this particular `Command`.
    pub fn into_clap_subcommand<'a, 'b>(self) -> App<'a, 'b> {
        match self {
            Command::Disassemble => SubCommand::with_name("dis")
                .about("Disassemble every image of the program"),
            Command::Convert => SubCommand::with_name("convert")
                .about("Convert C byte array listings into binary images"),
            Command::Table => SubCommand::with_name("table")
                .about("Dump the instruction encoding table as JSON"),
            Command::Check => SubCommand::with_name("check")
                .about("Verify that no two instruction encodings overlap"),
        }
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "dis" => Ok(Command::Disassemble),
            "disassemble" => Ok(Command::Disassemble),
            "convert" => Ok(Command::Convert),
            "table" => Ok(Command::Table),
            "check" => Ok(Command::Check),
            _ => Err(()),
        }
    }
}

/// Pick the program to operate on and apply command-line overrides to it.
///
/// A named program must exist in the project. With no name, the project's
/// default program is used, and with no project at all the command line
/// alone describes the program.
pub fn resolve_program(
    project: Option<&Project>,
    name: Option<&str>,
    overrides: Program,
) -> project::Result<Program> {
    let base = match (project, name) {
        (Some(project), Some(name)) => project.program(name)?.clone(),
        (None, Some(name)) => return Err(project::Error::UnknownProgram(name.to_string())),
        (Some(project), None) => project.default_program().cloned().unwrap_or_default(),
        (None, None) => Program::default(),
    };

    Ok(base.apply_override(&overrides))
}

/// Where a command's text output goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Resolve the output configured for `prog`. Relative paths are taken
    /// from `base`, the directory holding the project file.
    ///
    /// Without a configured output, `fallback` decides.
    pub fn resolve<F>(prog: &Program, base: &Path, fallback: F) -> Destination
    where
        F: FnOnce() -> Destination,
    {
        match prog.as_output() {
            Some(output) if output.as_str() == "-" => Destination::Stdout,
            Some(output) => Destination::File(output.to_path(base)),
            None => fallback(),
        }
    }

    /// Open the destination for writing.
    pub fn open(&self) -> io::Result<Box<dyn io::Write>> {
        match self {
            Destination::Stdout => Ok(Box::new(io::stdout())),
            Destination::File(path) => Ok(Box::new(io::BufWriter::new(
                std::fs::File::create(path)?,
            ))),
        }
    }
}

/// The default disassembly path for an image: the image path with the
/// syntax's extension appended.
pub fn default_output_path(image: &Path, syntax: AssemblerName) -> PathBuf {
    let mut name = OsString::from(image.as_os_str());
    name.push(".");
    name.push(syntax.extension());

    PathBuf::from(name)
}
