//! Structured representation of an extracted MCQ set.
//!
//! An [`McqSet`] is a pure projection of an input string: it is built once
//! per parse call and never mutated afterwards. The serialized field names
//! follow the documented JSON payload shape (`questionText`, `correctLabel`,
//! ...), so a parsed set round-trips through the same schema the extractor
//! accepts.

use serde::{Deserialize, Serialize};

/// A parsed document: introductory prose plus the ordered questions that
/// follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqSet {
    /// Verbatim prose preceding the first detected question marker, or the
    /// entire input when no marker was found.
    pub intro: String,
    /// Questions in source order; never reordered or deduplicated.
    pub questions: Vec<Question>,
}

impl McqSet {
    /// Set containing only prose, no questions.
    #[must_use]
    pub fn intro_only(intro: impl Into<String>) -> Self {
        Self {
            intro: intro.into(),
            questions: Vec::new(),
        }
    }

    /// Number of questions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True when the set holds no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// One multiple-choice question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Question stem with its numbering marker stripped.
    pub question_text: String,
    /// Options in order of appearance.
    pub options: Vec<McqOption>,
    /// Label of the option asserted correct by the source, when resolvable.
    pub correct_label: Option<String>,
    /// Raw content of the answer line, kept for display.
    pub answer_text: Option<String>,
    /// Content of the explanation line, if any.
    pub explanation: Option<String>,
}

impl Question {
    /// Look up an option by its label.
    #[must_use]
    pub fn option_for_label(&self, label: &str) -> Option<&McqOption> {
        self.options.iter().find(|o| o.label == label)
    }
}

/// A single answer option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqOption {
    /// Single uppercase letter, unique within the question.
    pub label: String,
    /// Option text with markers stripped.
    pub text: String,
}

impl McqOption {
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// First unused label for the next option: `A..Z` in order, with a numeric
/// fallback past 26 options.
pub(crate) fn next_free_label(options: &[McqOption]) -> String {
    ('A'..='Z')
        .map(|c| c.to_string())
        .find(|candidate| !options.iter().any(|o| &o.label == candidate))
        .unwrap_or_else(|| (options.len() + 1).to_string())
}
