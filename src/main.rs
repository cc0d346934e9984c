//! import-project: Scaffold project directories from a template tree
//!
//! This tool loads a JSON configuration into process environment variables,
//! copies a source project tree to a destination, and rewrites
//! `${placeholder}` tokens in configured target files.

mod cli;
mod config;
mod error;
mod structure;
mod transform;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(error::exit_code(&err));
    }
}
