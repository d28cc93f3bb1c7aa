//! Question block parsing.
//!
//! Turns one block of lines (first line being the question-start line) into
//! a structured [`Question`] by classifying each line against the rule table
//! and assigning option labels.

use super::answer;
use super::rules::{LineToken, classify_line};
use super::types::{McqOption, Question};

/// Parse one question block into a [`Question`].
#[must_use]
pub fn parse_block(lines: &[&str]) -> Question {
    let mut question = Question::default();
    let Some((first, rest)) = lines.split_first() else {
        return question;
    };

    question.question_text = match classify_line(first) {
        LineToken::QuestionStart { text } => text,
        _ => first.trim().to_string(),
    };

    let mut raw_answer: Option<String> = None;
    for line in rest {
        match classify_line(line) {
            LineToken::LabeledOption { label, text } => {
                let label = claim_label(&question.options, Some(label));
                question.options.push(McqOption::new(label, text));
            }
            LineToken::BulletOption { text, starred } => {
                let label = claim_label(&question.options, None);
                if starred {
                    question.correct_label = Some(label.clone());
                }
                question.options.push(McqOption::new(label, text));
            }
            LineToken::Answer { raw } => {
                // First answer line wins; later ones are noise.
                if raw_answer.is_none() {
                    raw_answer = Some(raw);
                }
            }
            LineToken::Explanation { text } => match question.explanation.as_mut() {
                Some(existing) => {
                    existing.push(' ');
                    existing.push_str(&text);
                }
                None => question.explanation = Some(text),
            },
            LineToken::QuestionStart { .. } | LineToken::SectionHeading | LineToken::Plain => {
                // Soft continuation: unrecognized lines fold into the
                // question text rather than being dropped.
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    if !question.question_text.is_empty() {
                        question.question_text.push(' ');
                    }
                    question.question_text.push_str(trimmed);
                }
            }
        }
    }

    answer::resolve(&mut question, raw_answer);
    question
}

/// Pick the label for the next option, keeping labels unique within the
/// question. An explicit letter is used as-is unless already taken; bullets
/// get the first unused letter, which for all-bullet blocks yields the
/// sequential `A, B, C, ...` assignment.
fn claim_label(options: &[McqOption], explicit: Option<char>) -> String {
    if let Some(letter) = explicit {
        let label = letter.to_string();
        if !options.iter().any(|o| o.label == label) {
            return label;
        }
    }
    super::types::next_free_label(options)
}
