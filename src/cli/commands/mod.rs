//! Subcommand implementations and dispatch.

pub mod completions;
pub mod parse;
pub mod trim;

use std::io::Read;
use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Parse(args) => parse::run(cli.robot, args),
        Commands::Trim(args) => trim::run(cli.robot, args),
        Commands::Completions(args) => completions::run(args),
    }
}

/// Read input text from a file, or from stdin when no path was given.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
