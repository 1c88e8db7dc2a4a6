//! Project configuration file representation

use crate::project::program::Program;
use crate::project::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The name of the project file looked for when none is given.
pub const DEFAULT_PROJECT_FILE: &str = "ezhdis.json";

/// In-memory representation of the current project configuration.
///
/// This file is typically read from a file named `ezhdis.json`, and it lists
/// the firmware images to disassemble along with how to render them.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Project {
    programs: BTreeMap<String, Program>,
}

impl Project {
    pub fn read(filename: &Path) -> Result<Self> {
        let project_file = fs::File::open(filename)?;
        Self::from_reader(project_file)
    }

    pub fn from_reader<R>(reader: R) -> Result<Self>
    where
        R: std::io::Read,
    {
        let mut project: Self = serde_json::from_reader(reader)?;

        for (name, prog) in project.programs.iter_mut() {
            prog.set_name(name);
        }

        Ok(project)
    }

    /// Get the program with the given name within the project.
    pub fn program(&self, name: &str) -> Result<&Program> {
        self.programs
            .get(name)
            .ok_or_else(|| Error::UnknownProgram(name.to_string()))
    }

    /// Get the project's default program, which is the first one by name.
    pub fn default_program(&self) -> Option<&Program> {
        self.programs.values().next()
    }

    pub fn iter_programs(&self) -> impl Iterator<Item = (&str, &Program)> {
        self.programs.iter().map(|(k, v)| (k.as_str(), v))
    }
}
