//! MCQ extraction, normalization, and trimming engine.
//!
//! Takes free-form text produced by a language model, which may express
//! quiz questions in any of several inconsistent textual or JSON layouts,
//! and either parses it into a structured [`McqSet`] or truncates it to a
//! caller-specified number of questions while preserving surrounding prose
//! byte-for-byte.
//!
//! Both entry points are pure, synchronous, and total: they never error,
//! never panic on malformed input, and cost a bounded number of linear
//! passes over the text.

pub mod answer;
pub mod block;
pub mod detect;
pub mod json;
pub mod rules;
pub mod segment;
pub mod trim;
pub mod types;

use tracing::debug;

use self::detect::{SourceFormat, detect_format};
pub use self::trim::trim_mcqs_from_text;
pub use self::types::{McqOption, McqSet, Question};

/// Parse free-form text into a structured [`McqSet`].
///
/// JSON-classified input whose embedded payload turns out to be malformed
/// or the wrong shape is silently re-parsed as plain text. Input with no
/// question content yields an intro-only set, not an error.
#[must_use]
pub fn parse_mcqs_from_text(text: &str) -> McqSet {
    if detect_format(text) == SourceFormat::Json {
        if let Some(set) = json::parse_json_mcqs(text) {
            return set;
        }
        debug!("embedded JSON missing or malformed, using plain-text parser");
    }
    parse_plain(text)
}

/// Number of questions the engine detects in the text, without building the
/// full structured set. Agrees with [`parse_mcqs_from_text`] on every input:
/// a JSON payload that parsing would reject falls back to counting
/// plain-text blocks, exactly like parsing falls back.
#[must_use]
pub fn question_count(text: &str) -> usize {
    if detect_format(text) == SourceFormat::Json {
        if let Some(count) = json::count_json_questions(text) {
            return count;
        }
    }
    segment::segment(text).blocks.len()
}

fn parse_plain(text: &str) -> McqSet {
    let segmented = segment::segment(text);
    McqSet {
        intro: segmented.intro.to_string(),
        questions: segmented
            .blocks
            .iter()
            .map(|b| block::parse_block(&b.lines))
            .collect(),
    }
}
