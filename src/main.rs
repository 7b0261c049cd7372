use anyhow::Context;
use clap::Parser;
use std::process;
use weather_summary::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args).context("Weather summary failed") {
        Ok(_outcome) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
