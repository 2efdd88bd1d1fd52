//! Front-end plumbing for running qvm programs: build a process from
//! assembly source or an image file, then drive it against the host's
//! standard streams.

use qvm::constants::{STDERR, STDIN, STDOUT};
use qvm::image::ImageError;
use qvm::{Outcome, Process, Q};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum Error {
    #[error("assembly failed: {0}")]
    Asm(#[from] qasm::Error),

    #[error("invalid image: {0}")]
    Image(#[from] ImageError),

    #[error("execution failed: {0}")]
    Vm(#[from] qvm::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Builds a process from assembly source.
pub fn process_from_source(source: &str, argv: &[&str]) -> Result<Process, Error> {
    let image = qasm::assemble(source)?;
    Ok(Process::with_argv(&image, argv))
}

/// Builds a process from the textual image format.
pub fn process_from_image_text(text: &str, argv: &[&str]) -> Result<Process, Error> {
    let image = qvm::image::parse(text)?;
    Ok(Process::with_argv(&image, argv))
}

/// Assembles a source file into an image vector.
pub fn assemble_file<P: AsRef<Path>>(path: P) -> Result<Vec<Q>, Error> {
    Ok(qasm::assemble(&fs::read_to_string(path)?)?)
}

/// Loads an image file written in the textual format.
pub fn load_image_file<P: AsRef<Path>>(path: P) -> Result<Vec<Q>, Error> {
    Ok(qvm::image::parse(&fs::read_to_string(path)?)?)
}

/// Drives a process to completion against the host's standard streams.
///
/// Pending process output is flushed to the host after every pause.
/// While the process is blocked, one line of host stdin is forwarded
/// per retry; end of host input closes the process stdin, which the
/// program observes as end-of-file.
pub fn drive(process: &mut Process) -> Result<Outcome, Error> {
    let stdin = io::stdin();

    loop {
        let outcome = process.run()?;
        flush_output(process)?;

        match outcome {
            Outcome::Blocked => {
                let mut line = String::new();

                if stdin.lock().read_line(&mut line)? == 0 {
                    debug!("host input exhausted, closing process stdin");
                    process.close(STDIN);
                } else {
                    process.write(STDIN, &line);
                }
            }
            outcome => return Ok(outcome),
        }
    }
}

fn flush_output(process: &mut Process) -> Result<(), Error> {
    let out = process.read(STDOUT);

    if !out.is_empty() {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        stdout.write_all(out.as_bytes())?;
        stdout.flush()?;
    }

    let err = process.read(STDERR);

    if !err.is_empty() {
        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        stderr.write_all(err.as_bytes())?;
        stderr.flush()?;
    }

    Ok(())
}
