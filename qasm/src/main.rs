#[macro_use]
extern crate clap;

use clap::Arg;
use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Debug)]
enum Error {
    Asm(qasm::Error),
    Io(io::Error, Option<PathBuf>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Asm(err) => write!(f, "{}", err),
            Error::Io(err, Some(path)) => write!(f, "{}: {}", path.display(), err),
            Error::Io(err, None) => write!(f, "{}", err),
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Assembly source file; standard input if omitted")
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUTPUT")
                .help("Image file to write; standard output if omitted"),
        )
        .arg(
            Arg::with_name("source_map")
                .short("m")
                .long("source-map")
                .takes_value(true)
                .value_name("SOURCE_MAP")
                .help("File to write the source map to, one line number per cell"),
        )
        .get_matches();

    let result = run(
        matches.value_of("INPUT"),
        matches.value_of("output"),
        matches.value_of("source_map"),
    );

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(input: Option<&str>, output: Option<&str>, map: Option<&str>) -> Result<(), Error> {
    let mut source = String::new();

    match input {
        Some(path) => {
            let file = File::open(path).map_err(|err| Error::Io(err, Some(path.into())))?;
            BufReader::new(file)
                .read_to_string(&mut source)
                .map_err(|err| Error::Io(err, Some(path.into())))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|err| Error::Io(err, None))?;
        }
    }

    let (image, source_map) = qasm::assemble_with_source_map(&source).map_err(Error::Asm)?;
    let text = qvm::image::render(&image);

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|err| Error::Io(err, Some(path.into())))?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(text.as_bytes())
                .map_err(|err| Error::Io(err, Some(path.into())))?;
        }
        None => print!("{}", text),
    }

    if let Some(path) = map {
        let file = File::create(path).map_err(|err| Error::Io(err, Some(path.into())))?;
        let mut writer = BufWriter::new(file);

        for line in &source_map {
            writeln!(writer, "{}", line).map_err(|err| Error::Io(err, Some(path.into())))?;
        }
    }

    Ok(())
}
