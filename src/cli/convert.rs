//! The `convert` command

use crate::memory;
use crate::project::Program;
use log::info;
use std::io;
use std::path::Path;

pub fn convert(prog: &Program) -> io::Result<()> {
    let mut converted = 0;

    for image in prog.iter_images() {
        let binary = memory::literal::convert_file(Path::new(image))?;
        info!("Wrote binary {}", binary.display());
        converted += 1;
    }

    if converted == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Did not specify an image",
        ));
    }

    Ok(())
}
