//! Command-line interface definitions.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "mcqx",
    version,
    about = "Extract, normalize, and trim multiple-choice questions from model output"
)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub robot: bool,

    /// Suppress log output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse input into a structured MCQ set
    Parse(commands::parse::ParseArgs),
    /// Truncate input to its first N questions
    Trim(commands::trim::TrimArgs),
    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
