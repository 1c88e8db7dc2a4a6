use crate::asm::AssemblerName;
use crate::cli::common::{default_output_path, resolve_program, Destination};
use crate::cli::Command;
use crate::project::{Error, Program, Project};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const PROJECT: &str = r#"{
    "programs": {
        "camera": { "images": ["camera.bin"], "output": "out/camera.h" },
        "audio": { "images": ["audio.bin"], "syntax": "listing" }
    }
}"#;

#[test]
fn command_names() {
    assert_eq!(Command::from_str("dis"), Ok(Command::Disassemble));
    assert_eq!(Command::from_str("CHECK"), Ok(Command::Check));
    assert_eq!(Command::from_str("scan"), Err(()));

    for cmd in Command::enumerate() {
        let name = cmd.into_clap_subcommand().get_name().to_string();
        assert_eq!(Command::from_str(&name), Ok(cmd));
    }
}

#[test]
fn resolve_without_project() {
    let mut cli = Program::default();
    cli.add_image_path("fw.bin");

    let prog = resolve_program(None, None, cli).unwrap();
    assert_eq!(prog.iter_images().collect::<Vec<_>>(), vec!["fw.bin"]);
    assert_eq!(prog.syntax(), AssemblerName::Fsl);

    assert!(matches!(
        resolve_program(None, Some("camera"), Program::default()),
        Err(Error::UnknownProgram(_))
    ));
}

#[test]
fn resolve_with_project() {
    let project = Project::from_reader(PROJECT.as_bytes()).unwrap();

    let prog = resolve_program(Some(&project), None, Program::default()).unwrap();
    assert_eq!(prog.as_name(), Some("audio"));
    assert_eq!(prog.syntax(), AssemblerName::Listing);

    let prog = resolve_program(Some(&project), Some("camera"), Program::default()).unwrap();
    assert_eq!(prog.iter_images().collect::<Vec<_>>(), vec!["camera.bin"]);
}

#[test]
fn output_destinations() {
    let project = Project::from_reader(PROJECT.as_bytes()).unwrap();
    let base = Path::new("proj");

    let camera = project.program("camera").unwrap();
    assert_eq!(
        Destination::resolve(camera, base, || Destination::Stdout),
        Destination::File(PathBuf::from("proj/out/camera.h"))
    );

    let audio = project.program("audio").unwrap();
    assert_eq!(
        Destination::resolve(audio, base, || Destination::Stdout),
        Destination::Stdout
    );
}

#[test]
fn default_outputs() {
    assert_eq!(
        default_output_path(Path::new("fw/camera.bin"), AssemblerName::Fsl),
        PathBuf::from("fw/camera.bin.h")
    );
    assert_eq!(
        default_output_path(Path::new("fw/camera.c"), AssemblerName::Listing),
        PathBuf::from("fw/camera.c.lst")
    );
}
