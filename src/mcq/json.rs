//! Embedded-JSON extraction and the documented MCQ payload shape.
//!
//! Extraction is an explicit attempt-with-result: every step returns
//! `Option`, and a `None` anywhere sends the caller down the plain-text
//! path. Nothing in here panics on malformed input.

use std::ops::Range;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::answer;
use super::detect::find_json_fence;
use super::types::{McqOption, McqSet, Question};

/// A JSON object lifted out of surrounding prose, with the byte span it
/// occupied so the trimmer can splice a replacement back in.
#[derive(Debug)]
pub struct EmbeddedJson {
    /// Byte range of the raw JSON source within the original text. For a
    /// fenced payload this is the fence contents, fences excluded.
    pub span: Range<usize>,
    /// Parsed value, already shape-checked.
    pub value: Value,
    /// Whether the raw span ended with a line break (fenced payloads do).
    pub newline_terminated: bool,
}

/// Extract the first well-formed MCQ payload: the first ```json fence's
/// contents, or, when there is no fence, the first top-level `{ ... }` span
/// matched by bracket depth.
///
/// Returns `None` on missing JSON, a parse failure, or a shape mismatch
/// (`questions` must be an array; `intro`, when present, a string).
#[must_use]
pub fn extract_embedded_json(text: &str) -> Option<EmbeddedJson> {
    let span = fenced_span(text).or_else(|| bare_span(text))?;
    let raw = &text[span.clone()];
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, "embedded JSON failed to parse");
            return None;
        }
    };
    if !has_mcq_shape(&value) {
        debug!("embedded JSON does not match the MCQ payload shape");
        return None;
    }
    Some(EmbeddedJson {
        newline_terminated: raw.ends_with('\n'),
        span,
        value,
    })
}

/// Parse a JSON-classified input into an [`McqSet`]. `None` means the JSON
/// path is abandoned and the caller should fall back to plain text.
#[must_use]
pub fn parse_json_mcqs(text: &str) -> Option<McqSet> {
    let embedded = extract_embedded_json(text)?;
    let quiz: JsonQuiz = match serde_json::from_value(embedded.value) {
        Ok(quiz) => quiz,
        Err(err) => {
            debug!(error = %err, "MCQ payload rejected during deserialization");
            return None;
        }
    };
    Some(McqSet {
        intro: quiz.intro,
        questions: quiz.questions.into_iter().map(JsonQuestion::into_question).collect(),
    })
}

/// Number of questions in the embedded payload, through the same
/// deserialization gate as [`parse_json_mcqs`] so counting and parsing can
/// never disagree. `None` means the caller should count plain-text blocks
/// instead.
#[must_use]
pub fn count_json_questions(text: &str) -> Option<usize> {
    let embedded = extract_embedded_json(text)?;
    let quiz: JsonQuiz = serde_json::from_value(embedded.value).ok()?;
    Some(quiz.questions.len())
}

/// Contents span of the first ```json fence, if any.
fn fenced_span(text: &str) -> Option<Range<usize>> {
    let open = find_json_fence(text)?;
    // Skip the rest of the marker line.
    let after_marker = open + "```json".len();
    let content_start = text[after_marker..]
        .find('\n')
        .map_or(text.len(), |i| after_marker + i + 1);
    let close = memchr::memmem::find(&text.as_bytes()[content_start..], b"```")
        .map(|i| content_start + i)?;
    Some(content_start..close)
}

/// First top-level `{ ... }` span, matched by bracket depth. String
/// literals are skipped so braces inside values do not unbalance the scan.
fn bare_span(text: &str) -> Option<Range<usize>> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start..start + i + ch.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

/// Top-level shape check: an object with a `questions` array and, when
/// present, a string `intro`.
fn has_mcq_shape(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    let intro_ok = object.get("intro").is_none_or(Value::is_string);
    intro_ok && object.get("questions").is_some_and(Value::is_array)
}

#[derive(Debug, Deserialize)]
struct JsonQuiz {
    #[serde(default)]
    intro: String,
    #[serde(default)]
    questions: Vec<JsonQuestion>,
}

#[derive(Debug, Deserialize)]
struct JsonQuestion {
    #[serde(alias = "questionText", alias = "text")]
    question: String,
    #[serde(default)]
    options: Vec<JsonOption>,
    #[serde(default, alias = "correctAnswer", alias = "correct_answer")]
    answer: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
}

/// Options may be plain strings or `{ "label": ..., "text": ... }` objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonOption {
    Text(String),
    Labeled {
        #[serde(default)]
        label: Option<String>,
        text: String,
    },
}

impl JsonQuestion {
    fn into_question(self) -> Question {
        let mut question = Question {
            question_text: self.question.trim().to_string(),
            explanation: self.explanation.map(|e| e.trim().to_string()),
            ..Question::default()
        };
        for option in self.options {
            let (label, text) = match option {
                JsonOption::Text(text) => (None, text),
                JsonOption::Labeled { label, text } => (label.and_then(single_letter), text),
            };
            let label = match label {
                Some(letter) if !question.options.iter().any(|o| o.label == letter) => letter,
                _ => super::types::next_free_label(&question.options),
            };
            question
                .options
                .push(McqOption::new(label, text.trim().to_string()));
        }
        answer::resolve(&mut question, self.answer);
        question
    }
}

fn single_letter(label: String) -> Option<String> {
    let trimmed = label.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    (chars.next().is_none() && first.is_ascii_alphabetic())
        .then(|| first.to_ascii_uppercase().to_string())
}
