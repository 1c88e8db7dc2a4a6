//! The `table` command

use crate::arch::ezh;
use crate::cli::common::Destination;
use crate::project::Program;
use log::info;
use std::io;
use std::io::Write;
use std::path::Path;

pub fn table(prog: &Program, base: &Path) -> io::Result<()> {
    let table = ezh::build();
    let destination = Destination::resolve(prog, base, || Destination::Stdout);
    let mut out = destination.open()?;

    serde_json::to_writer_pretty(&mut out, &table)?;
    writeln!(out)?;
    out.flush()?;

    if let Destination::File(path) = destination {
        info!("Wrote {} encodings to {}", table.len(), path.display());
    }

    Ok(())
}
