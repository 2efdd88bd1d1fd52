#[macro_use]
extern crate clap;

use clap::{Arg, ArgGroup};
use qvm::Process;

fn main() {
    tracing_subscriber::fmt::init();

    let matches = app_from_crate!()
        .arg(
            Arg::with_name("IMAGE")
                .help("Image file in the textual format, one rational per line")
                .index(1),
        )
        .arg(
            Arg::with_name("assembly")
                .short("a")
                .long("assembly")
                .takes_value(true)
                .value_name("ASSEMBLY")
                .help("Assembly source file to assemble and run"),
        )
        .arg(
            Arg::with_name("arg")
                .long("arg")
                .takes_value(true)
                .value_name("VALUE")
                .multiple(true)
                .number_of_values(1)
                .help("Argument passed to the program; may be repeated"),
        )
        .group(
            ArgGroup::with_name("input")
                .args(&["IMAGE", "assembly"])
                .required(true),
        )
        .get_matches();

    let argv: Vec<&str> = matches
        .values_of("arg")
        .map(|values| values.collect())
        .unwrap_or_default();

    let result = match matches.value_of("IMAGE") {
        Some(path) => qx::load_image_file(path),
        None => qx::assemble_file(matches.value_of("assembly").unwrap()),
    }
    .and_then(|image| {
        let mut process = Process::with_argv(&image, &argv);
        qx::drive(&mut process)
    });

    match result {
        Ok(outcome) => println!("Outcome: {:?}", outcome),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
