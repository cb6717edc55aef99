//! Datacube driver registry - Entry Point
//!
//! Binary entry point for the `cube` diagnostic command.

// Force-link cube-providers to ensure linkme registrations are included
extern crate cube_providers;

use clap::Parser;
use cube::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}
