//! The `dis` command

use crate::arch::ezh;
use crate::asm;
use crate::cli::common::{default_output_path, Destination};
use crate::memory;
use crate::project::Program;
use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Disassemble one image into `destination`.
///
/// The whole image is decoded before anything is written, so an ambiguous
/// encoding leaves no partial output behind.
fn dis_image(
    prog: &Program,
    table: &ezh::EncodingTable,
    image: &Path,
    destination: &Destination,
) -> io::Result<()> {
    let words = memory::read_words(&mut fs::File::open(image)?)?;
    debug!("{}: {} words", image.display(), words.len());

    let disasm = ezh::disassemble(&words, table, prog.alias_registers())?;

    let unknown = disasm.iter().filter(|d| !d.is_recognized()).count();
    if unknown > 0 {
        warn!(
            "{}: {} of {} words are not recognized",
            image.display(),
            unknown,
            words.len()
        );
    }

    let mut out = destination.open()?;
    asm::emit_program(
        prog.syntax(),
        &mut out,
        &image.display().to_string(),
        &words,
        &disasm,
    )?;
    out.flush()?;

    if let Destination::File(path) = destination {
        info!("Wrote disassembly {}", path.display());
    }

    Ok(())
}

pub fn dis(prog: &Program, base: &Path) -> io::Result<()> {
    let images: Vec<&str> = prog.iter_images().collect();
    if images.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Did not specify an image",
        ));
    }

    if images.len() > 1
        && matches!(
            Destination::resolve(prog, base, || Destination::Stdout),
            Destination::File(_)
        )
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Cannot write several images to one output file",
        ));
    }

    let table = ezh::build();
    info!("Encoding table holds {} instructions", table.len());

    for image in images {
        let source = Path::new(image);
        let binary: PathBuf = if prog.is_literal() {
            let binary = memory::literal::convert_file(source)?;
            info!("Wrote binary {}", binary.display());
            binary
        } else {
            source.to_path_buf()
        };

        let destination = Destination::resolve(prog, base, || {
            Destination::File(default_output_path(source, prog.syntax()))
        });

        dis_image(prog, &table, &binary, &destination)?;
    }

    Ok(())
}
