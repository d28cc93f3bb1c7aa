//! Line-pattern rules for the plain-text tokenizer.
//!
//! Each rule is a stateless predicate-plus-extractor over a single line,
//! evaluated in the fixed priority order of [`LINE_RULES`]. The first rule
//! that matches wins; a line no rule claims is [`LineToken::Plain`] and is
//! folded into the question text by the block parser.

use std::sync::LazyLock;

use regex::Regex;

/// One classified line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineToken {
    /// A question-start line ("1)", "1.", "Q1:", "Question 1:"), with the
    /// marker prefix stripped from the remaining text.
    QuestionStart { text: String },
    /// A section heading such as "MCQs", "Questions", or "Multiple Choice".
    SectionHeading,
    /// An answer assertion ("Answer:" / "Correct Answer:"), with the raw
    /// asserted answer.
    Answer { raw: String },
    /// An "Explanation:" line with its content.
    Explanation { text: String },
    /// An option with an explicit letter marker ("A)", "b.").
    LabeledOption { label: char, text: String },
    /// A bullet option ("- text", "* text"); `starred` when the text carried
    /// a trailing `*` marking it as the correct choice.
    BulletOption { text: String, starred: bool },
    /// Anything else.
    Plain,
}

/// A named line-pattern rule: a pure predicate plus extractor.
pub struct LineRule {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<LineToken>,
}

/// The rule table, in priority order. Answer and explanation rules run
/// before the bullet rule so an emphasis-wrapped `*Answer: B*` is never
/// mistaken for a bullet option.
pub static LINE_RULES: &[LineRule] = &[
    LineRule {
        name: "question-start",
        apply: question_start,
    },
    LineRule {
        name: "section-heading",
        apply: section_heading,
    },
    LineRule {
        name: "answer",
        apply: answer,
    },
    LineRule {
        name: "explanation",
        apply: explanation,
    },
    LineRule {
        name: "labeled-option",
        apply: labeled_option,
    },
    LineRule {
        name: "bullet-option",
        apply: bullet_option,
    },
];

/// Classify a single line against the rule table.
#[must_use]
pub fn classify_line(line: &str) -> LineToken {
    for rule in LINE_RULES {
        if let Some(token) = (rule.apply)(line) {
            return token;
        }
    }
    LineToken::Plain
}

// Numbered markers: "1)", "1.", "Q1:", "Q1)", "Question 1:". A bare number
// requires "." or ")" so prose like "in 1999:" does not start a question.
static QUESTION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:q(?:uestion)?\s*\d+\s*[.):]|\d+\s*[.)])\s*(.*)$")
        .expect("question-start pattern")
});

static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*#{0,6}\s*\*{0,2}(?:mcqs?|questions|multiple\s+choice(?:\s+questions)?)\*{0,2}\s*:?\s*$")
        .expect("section-heading pattern")
});

static ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:correct\s+answer|answer)\s*:\s*(.*)$").expect("answer pattern")
});

static EXPLANATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^explanation\s*:\s*(.*)$").expect("explanation pattern"));

static LABELED_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z])[.)]\s+(.*)$").expect("labeled-option pattern"));

static BULLET_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(.*)$").expect("bullet-option pattern"));

fn question_start(line: &str) -> Option<LineToken> {
    let caps = QUESTION_START.captures(line)?;
    Some(LineToken::QuestionStart {
        text: caps[1].trim().to_string(),
    })
}

fn section_heading(line: &str) -> Option<LineToken> {
    SECTION_HEADING
        .is_match(line)
        .then_some(LineToken::SectionHeading)
}

fn answer(line: &str) -> Option<LineToken> {
    let caps = ANSWER.captures(strip_emphasis(line))?;
    Some(LineToken::Answer {
        raw: caps[1].trim().to_string(),
    })
}

fn explanation(line: &str) -> Option<LineToken> {
    let caps = EXPLANATION.captures(strip_emphasis(line))?;
    Some(LineToken::Explanation {
        text: caps[1].trim().to_string(),
    })
}

fn labeled_option(line: &str) -> Option<LineToken> {
    let caps = LABELED_OPTION.captures(line)?;
    let label = caps[1].chars().next()?.to_ascii_uppercase();
    Some(LineToken::LabeledOption {
        label,
        text: caps[2].trim().to_string(),
    })
}

fn bullet_option(line: &str) -> Option<LineToken> {
    let caps = BULLET_OPTION.captures(line)?;
    let text = caps[1].trim();
    match text.strip_suffix('*') {
        Some(stripped) => Some(LineToken::BulletOption {
            text: stripped.trim_end().to_string(),
            starred: true,
        }),
        None => Some(LineToken::BulletOption {
            text: text.to_string(),
            starred: false,
        }),
    }
}

/// Strip one layer of `**bold**` or `*italic*` wrapping from a whole line.
fn strip_emphasis(line: &str) -> &str {
    let trimmed = line.trim();
    for marker in ["**", "*"] {
        if let Some(inner) = trimmed
            .strip_prefix(marker)
            .and_then(|rest| rest.strip_suffix(marker))
        {
            return inner.trim();
        }
    }
    trimmed
}
