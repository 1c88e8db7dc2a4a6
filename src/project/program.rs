//! Program identifier

use crate::asm::AssemblerName;
use clap::{App, Arg, ArgMatches, ArgSettings};
use log::warn;
use relative_path::{RelativePath, RelativePathBuf};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One set of firmware images and the options used to disassemble them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    #[serde(default)]
    images: Vec<String>,

    syntax: Option<AssemblerName>,

    /// Render known peripheral addresses by name. Defaults to on.
    alias_registers: Option<bool>,

    /// Images are C byte array listings rather than raw binaries.
    literal: Option<bool>,

    output: Option<RelativePathBuf>,

    #[serde(skip)]
    name: Option<String>,
}

impl Program {
    pub fn configure_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.arg(
            Arg::with_name("image")
                .long("image")
                .value_name("image.bin")
                .help("The firmware image file(s) to disassemble.")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("syntax")
                .long("syntax")
                .value_name("SYNTAX")
                .help("What output syntax to use (fsl or listing).")
                .takes_value(true)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("no_alias")
                .long("no-alias")
                .help("Print peripheral register addresses numerically.")
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("literal")
                .long("literal")
                .help("Images are C byte array listings; convert them first.")
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .value_name("FILE")
                .help("Where to write the disassembly, or - for stdout.")
                .takes_value(true)
                .set(ArgSettings::Global),
        )
    }

    /// Construct a Program from clap ArgMatches
    pub fn from_arg_matches(args: &ArgMatches) -> Program {
        let mut prog = Program::default();

        if let Some(images) = args.values_of("image") {
            for image in images {
                prog.add_image_path(image);
            }
        }

        if let Some(syntax) = args.value_of("syntax") {
            match AssemblerName::from_str(syntax) {
                Ok(syntax) => prog.set_syntax(syntax),
                Err(()) => warn!("Unknown syntax {}, using the default", syntax),
            }
        }

        if args.is_present("no_alias") {
            prog.set_alias_registers(false);
        }

        if args.is_present("literal") {
            prog.literal = Some(true);
        }

        prog.output = args.value_of("output").map(RelativePathBuf::from);

        prog
    }

    /// The output syntax, falling back to the SDK header syntax.
    pub fn syntax(&self) -> AssemblerName {
        self.syntax.unwrap_or_default()
    }

    pub fn set_syntax(&mut self, syntax: AssemblerName) {
        self.syntax = Some(syntax);
    }

    pub fn alias_registers(&self) -> bool {
        self.alias_registers.unwrap_or(true)
    }

    pub fn set_alias_registers(&mut self, alias: bool) {
        self.alias_registers = Some(alias);
    }

    pub fn is_literal(&self) -> bool {
        self.literal.unwrap_or(false)
    }

    /// List all the image files related to a given program.
    pub fn iter_images(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(|s| s.as_ref())
    }

    /// Add an image path.
    pub fn add_image_path(&mut self, path: &str) {
        self.images.push(path.to_string());
    }

    pub fn as_output(&self) -> Option<&RelativePath> {
        self.output.as_deref()
    }

    pub fn as_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    /// Combine two programs, preferring whatever `other` specifies.
    pub fn apply_override(&self, other: &Program) -> Program {
        Program {
            images: match other.images.len() {
                0 => self.images.clone(),
                _ => other.images.clone(),
            },
            syntax: other.syntax.or(self.syntax),
            alias_registers: other.alias_registers.or(self.alias_registers),
            literal: other.literal.or(self.literal),
            output: other.output.clone().or_else(|| self.output.clone()),
            name: other.name.clone().or_else(|| self.name.clone()),
        }
    }
}
