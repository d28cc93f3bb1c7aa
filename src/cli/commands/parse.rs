//! mcqx parse - Extract a structured MCQ set from input text.

use std::path::PathBuf;

use clap::Args;
use console::style;

use crate::cli::commands::read_input;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, preview, robot_ok};
use crate::error::Result;
use crate::mcq::parse_mcqs_from_text;
use crate::mcq::types::McqSet;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Input file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

pub fn run(robot: bool, args: &ParseArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let set = parse_mcqs_from_text(&text);

    if robot {
        return emit_robot(&robot_ok(&set));
    }
    render_human(&set);
    Ok(())
}

fn render_human(set: &McqSet) {
    let mut layout = HumanLayout::new();
    layout.title("MCQ set");
    if !set.intro.is_empty() {
        layout.kv("intro", &preview(&set.intro, 72));
    }
    layout.kv("questions", &set.len().to_string());

    for (index, question) in set.questions.iter().enumerate() {
        layout.blank();
        layout.section(&format!("Q{}", index + 1));
        layout.line(question.question_text.clone());
        for option in &question.options {
            let is_correct = question.correct_label.as_deref() == Some(option.label.as_str());
            let line = format!("  {}) {}", option.label, option.text);
            if is_correct {
                layout.line(format!("{} ✓", style(line).green()));
            } else {
                layout.line(line);
            }
        }
        if question.correct_label.is_none() {
            if let Some(answer) = &question.answer_text {
                layout.kv("answer", answer);
            }
        }
        if let Some(explanation) = &question.explanation {
            layout.kv("explanation", &preview(explanation, 72));
        }
    }
    emit_human(&layout);
}
