//! Intro/question-block segmentation for plain-text input.
//!
//! Splits text at the question-section boundary found by
//! [`detect::question_section_start`], then groups the section's lines into
//! blocks: every question-start line opens a new block and owns all lines up
//! to the next question-start line. Lines between the section heading and
//! the first question-start line belong to no block.

use super::detect;
use super::rules::{LineToken, classify_line};

/// One question block: the question-start line plus its following lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub lines: Vec<&'a str>,
}

impl Block<'_> {
    /// The block's lines rejoined, with trailing blank lines dropped.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n").trim_end().to_string()
    }
}

/// Segmentation result: intro prose plus ordered question blocks. Both
/// borrow from the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmented<'a> {
    pub intro: &'a str,
    pub blocks: Vec<Block<'a>>,
}

/// Split text into intro and question blocks.
///
/// When no question section is found the entire input is intro, kept
/// verbatim. Otherwise the intro is the text before the section start with
/// trailing blank space trimmed.
#[must_use]
pub fn segment(text: &str) -> Segmented<'_> {
    let Some(start) = detect::question_section_start(text) else {
        return Segmented {
            intro: text,
            blocks: Vec::new(),
        };
    };

    let intro = text[..start].trim_end();
    let mut blocks: Vec<Block<'_>> = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for line in text[start..].lines() {
        if matches!(classify_line(line), LineToken::QuestionStart { .. }) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            current = Some(Block { lines: vec![line] });
        } else if let Some(block) = current.as_mut() {
            block.lines.push(line);
        }
    }
    if let Some(block) = current.take() {
        blocks.push(block);
    }

    Segmented { intro, blocks }
}

/// Iterate lines with their byte offsets, line endings stripped.
pub(crate) fn line_spans(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        (start, raw.trim_end_matches(['\n', '\r']))
    })
}
