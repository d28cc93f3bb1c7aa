//! Input format detection.
//!
//! Two independent, cheap checks: whether the text should take the JSON
//! path, and where the question section begins. Neither check parses
//! anything; broken JSON is discovered (and recovered from) later in the
//! pipeline.

use memchr::memmem;

use super::rules::{LineToken, classify_line};
use super::segment::line_spans;

/// How the raw input expresses its questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// A bare JSON object or a fenced ```json block.
    Json,
    /// Line-oriented plain text.
    PlainText,
}

/// Classify raw text as JSON or plain text.
///
/// The text is JSON when, after trimming, it starts with `{`, or when it
/// contains a ```json fence anywhere. Ambiguous or malformed payloads fall
/// through to the plain-text path downstream.
#[must_use]
pub fn detect_format(text: &str) -> SourceFormat {
    if text.trim_start().starts_with('{') || find_json_fence(text).is_some() {
        SourceFormat::Json
    } else {
        SourceFormat::PlainText
    }
}

/// Byte offset of the first ```json fence opener, case-insensitive.
pub(crate) fn find_json_fence(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let finder = memmem::Finder::new(b"```");
    let mut at = 0;
    while let Some(pos) = finder.find(&bytes[at..]) {
        let start = at + pos;
        let tag = bytes.get(start + 3..start + 7);
        if tag.is_some_and(|t| t.eq_ignore_ascii_case(b"json")) {
            return Some(start);
        }
        at = start + 3;
    }
    None
}

/// Byte offset of the line that opens the question section: the first
/// question-start marker or section heading. `None` when the input has no
/// question section at all.
#[must_use]
pub fn question_section_start(text: &str) -> Option<usize> {
    for (offset, line) in line_spans(text) {
        match classify_line(line) {
            LineToken::QuestionStart { .. } | LineToken::SectionHeading => return Some(offset),
            _ => {}
        }
    }
    None
}
