//! CLI support for non-command bits

use crate::cli::common::{resolve_program, Command};
use crate::project::{self, Project};
use crate::cli;
use clap::{AppSettings, Arg, ArgSettings};
use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Load the project file.
///
/// An explicitly named project file must exist. Otherwise the default file is
/// optional, and its absence just means everything comes from the command
/// line.
fn load_project(filename: Option<&str>) -> io::Result<(Option<Project>, PathBuf)> {
    let (path, required) = match filename {
        Some(filename) => (Path::new(filename), true),
        None => (Path::new(project::DEFAULT_PROJECT_FILE), false),
    };
    let base = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    match Project::read(path) {
        Ok(project) => {
            debug!(
                "Loaded project file {} with programs: {}",
                path.display(),
                project
                    .iter_programs()
                    .map(|(name, _)| name)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            Ok((Some(project), base))
        }
        Err(project::Error::Io(ref e)) if !required && e.kind() == io::ErrorKind::NotFound => {
            Ok((None, base))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn main() -> io::Result<()> {
    let mut app = app_from_crate!();
    app = app.arg(
        Arg::with_name("program")
            .long("program")
            .value_name("myfirmware")
            .takes_value(true)
            .help("Which program to disassemble")
            .set(ArgSettings::Global),
    );
    app = project::Program::configure_app(app);
    app = app
        .arg(
            Arg::with_name("project")
                .long("project")
                .value_name("ezhdis.json")
                .takes_value(true)
                .help("The project file to load")
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .help("Log more detail")
                .set(ArgSettings::Global),
        )
        .setting(AppSettings::SubcommandRequiredElseHelp);

    for cmd in Command::enumerate().iter() {
        app = app.subcommand(cmd.into_clap_subcommand());
    }

    let matches = app.get_matches();

    let (command, submatches) = matches.subcommand();
    // Global arguments given after the subcommand only show up in its matches.
    let args = submatches.unwrap_or(&matches);

    let log_level = if args.is_present("verbose") {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let command = cli::Command::from_str(command)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Unknown command"))?;

    let (project, base) = load_project(args.value_of("project"))?;
    let prog = resolve_program(
        project.as_ref(),
        args.value_of("program"),
        project::Program::from_arg_matches(args),
    )?;

    if let Some(name) = prog.as_name() {
        debug!("Using program {}", name);
    }

    match command {
        cli::Command::Disassemble => cli::dis(&prog, &base)?,
        cli::Command::Convert => cli::convert(&prog)?,
        cli::Command::Table => cli::table(&prog, &base)?,
        cli::Command::Check => cli::check()?,
    };

    Ok(())
}
