//! fq2fa command-line entry point
//!
//! Collects file paths from the command line, runs the conversion
//! pipeline, and maps the outcome to a process exit status. Every
//! argument is a path; there are no flags. All diagnostics go to stdout:
//! the exit status is the only machine-readable signal.

use std::env;
use std::path::PathBuf;
use std::process;

use fq2fa::{run, BatchOutcome, Fq2FaError, StdinConfirmation};

fn main() {
    let paths: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();

    println!("fq2fa - FASTQ to FASTA converter");
    println!();

    let mut confirm = StdinConfirmation;
    match run(&paths, &mut confirm) {
        Ok(BatchOutcome::Completed(reports)) => {
            println!();
            println!(
                "All conversions completed successfully ({} file(s)).",
                reports.len()
            );
        }
        Ok(BatchOutcome::Cancelled { .. }) => {
            println!("Operation cancelled by user.");
        }
        Err(Fq2FaError::NoInputFiles) => {
            print_usage();
            process::exit(1);
        }
        Err(e) => {
            println!("Error: {}.", e);
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("fq2fa {}", fq2fa::VERSION);
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("USAGE:");
    println!("    fq2fa <FILE>...");
    println!();
    println!("ARGS:");
    println!("    <FILE>...    One or more FASTQ files (.fastq or .fq, any letter case)");
    println!();
    println!("Each input is validated before anything is converted. Conversion writes");
    println!("a .fasta file next to its input and asks before overwriting an existing");
    println!("one.");
}
