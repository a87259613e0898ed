use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use mps2lp::io::translate;

/// Translate an MPS problem file into a readable LP text file next to it.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description, ending in `.mps`
    problem_file: PathBuf,
}

fn main() {
    let opts = Opts::parse();

    println!("Reading problem file: \"{}\"...", opts.problem_file.display());
    match translate(&opts.problem_file) {
        Ok(output_path) => println!("Wrote \"{}\".", output_path.display()),
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        },
    }
}
