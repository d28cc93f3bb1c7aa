//! mcqx trim - Truncate input to its first N questions.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::commands::read_input;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::mcq::{question_count, trim_mcqs_from_text};

#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Input file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Maximum number of questions to keep
    #[arg(long, short = 'n', visible_alias = "max-count")]
    pub max: usize,

    /// Write the result here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct TrimReport {
    total: usize,
    kept: usize,
    changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

pub fn run(robot: bool, args: &TrimArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let total = question_count(&text);
    let trimmed = trim_mcqs_from_text(&text, args.max);
    let changed = trimmed != text;

    if let Some(path) = &args.output {
        std::fs::write(path, &trimmed)?;
    }

    if robot {
        let report = TrimReport {
            total,
            kept: total.min(args.max),
            changed,
            text: args.output.is_none().then_some(trimmed),
        };
        return emit_robot(&robot_ok(&report));
    }

    if let Some(path) = &args.output {
        let mut layout = HumanLayout::new();
        layout
            .kv("questions", &total.to_string())
            .kv("kept", &total.min(args.max).to_string())
            .kv("wrote", &path.display().to_string());
        emit_human(&layout);
    } else {
        // Raw text on stdout so the result can be piped onward.
        print!("{trimmed}");
        if !trimmed.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
