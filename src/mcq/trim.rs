//! Format-preserving truncation.
//!
//! The trimmer never goes through a parsed [`McqSet`](super::types::McqSet)
//! and re-serializes; it reuses the detector/segmenter on the original text
//! so untouched parts (intro, JSON formatting, whitespace) are reproduced
//! byte-identically. The universal fallback is returning the input as-is.

use tracing::debug;

use super::detect::{SourceFormat, detect_format};
use super::json;
use super::segment;

/// Truncate the input to its first `max_count` questions.
///
/// Inputs with `max_count` or fewer questions (including inputs with no
/// question content at all) come back unchanged. This function is total: no
/// input makes it panic or produce output worse than a no-op.
#[must_use]
pub fn trim_mcqs_from_text(text: &str, max_count: usize) -> String {
    match detect_format(text) {
        SourceFormat::Json => trim_json(text, max_count).unwrap_or_else(|| {
            debug!("JSON trim path abandoned, trimming as plain text");
            trim_plain(text, max_count)
        }),
        SourceFormat::PlainText => trim_plain(text, max_count),
    }
}

/// JSON path: slice the `questions` array and splice the re-serialized
/// object back into the span it occupied. `None` abandons the JSON path.
fn trim_json(text: &str, max_count: usize) -> Option<String> {
    let mut embedded = json::extract_embedded_json(text)?;
    let questions = embedded.value.get_mut("questions")?.as_array_mut()?;
    if questions.len() <= max_count {
        return Some(text.to_string());
    }
    questions.truncate(max_count);

    let Ok(pretty) = serde_json::to_string_pretty(&embedded.value) else {
        // Re-serialization failure is an internal error, not a format
        // mismatch: return the input untouched.
        debug!("re-serialization failed, returning input unchanged");
        return Some(text.to_string());
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..embedded.span.start]);
    out.push_str(&pretty);
    if embedded.newline_terminated {
        out.push('\n');
    }
    out.push_str(&text[embedded.span.end..]);
    Some(out)
}

/// Plain-text path: keep the intro and the first `max_count` blocks,
/// discarding everything after them.
fn trim_plain(text: &str, max_count: usize) -> String {
    let segmented = segment::segment(text);
    if segmented.blocks.len() <= max_count {
        return text.to_string();
    }
    let kept = segmented
        .blocks
        .iter()
        .take(max_count)
        .map(segment::Block::text)
        .collect::<Vec<_>>()
        .join("\n\n");
    if kept.is_empty() {
        return segmented.intro.to_string();
    }
    if segmented.intro.is_empty() {
        kept
    } else {
        format!("{}\n\n{}", segmented.intro, kept)
    }
}
