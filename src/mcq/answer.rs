//! Answer-line resolution.
//!
//! Maps whatever the source asserts as "the answer" onto a canonical option
//! label. Resolution is best-effort: an answer that matches nothing leaves
//! `correct_label` unset, which is not an error.

use super::types::Question;

/// Resolve a raw answer line against the question's parsed options.
///
/// A correct label already set by a starred bullet option takes precedence;
/// the answer line is then recorded for display but never overrides it.
/// Otherwise:
/// 1. a single letter matching an existing label (case-insensitive) is used
///    directly;
/// 2. the first option whose text equals, or is contained within, the raw
///    answer text (case-insensitive) is selected;
/// 3. no match leaves `correct_label` as `None`.
pub fn resolve(question: &mut Question, raw_answer: Option<String>) {
    let Some(raw) = raw_answer else { return };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    question.answer_text = Some(trimmed.to_string());

    if question.correct_label.is_some() {
        return;
    }

    if let Some(label) = single_letter_label(trimmed, question) {
        question.correct_label = Some(label);
        return;
    }

    let needle = trimmed.to_lowercase();
    for option in &question.options {
        let text = option.text.trim().to_lowercase();
        if !text.is_empty() && needle.contains(&text) {
            question.correct_label = Some(option.label.clone());
            return;
        }
    }
}

fn single_letter_label(trimmed: &str, question: &Question) -> Option<String> {
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    if chars.next().is_some() || !first.is_ascii_alphabetic() {
        return None;
    }
    let label = first.to_ascii_uppercase().to_string();
    question
        .options
        .iter()
        .any(|o| o.label == label)
        .then_some(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcq::types::McqOption;

    fn question_with(options: &[(&str, &str)]) -> Question {
        Question {
            question_text: "Q".into(),
            options: options
                .iter()
                .map(|(label, text)| McqOption::new(*label, *text))
                .collect(),
            ..Question::default()
        }
    }

    #[test]
    fn resolves_single_letter_case_insensitively() {
        let mut q = question_with(&[("A", "Red"), ("B", "Blue")]);
        resolve(&mut q, Some("b".into()));
        assert_eq!(q.correct_label.as_deref(), Some("B"));
        assert_eq!(q.answer_text.as_deref(), Some("b"));
    }

    #[test]
    fn resolves_by_option_text_containment() {
        let mut q = question_with(&[("A", "Red"), ("B", "Blue"), ("C", "Green")]);
        resolve(&mut q, Some("The answer is Blue".into()));
        assert_eq!(q.correct_label.as_deref(), Some("B"));
        assert_eq!(q.answer_text.as_deref(), Some("The answer is Blue"));
    }

    #[test]
    fn exact_text_match_resolves() {
        let mut q = question_with(&[("A", "Red"), ("B", "Blue")]);
        resolve(&mut q, Some("blue".into()));
        assert_eq!(q.correct_label.as_deref(), Some("B"));
    }

    #[test]
    fn unresolved_answer_keeps_text_without_label() {
        let mut q = question_with(&[("A", "Red"), ("B", "Blue")]);
        resolve(&mut q, Some("Purple".into()));
        assert!(q.correct_label.is_none());
        assert_eq!(q.answer_text.as_deref(), Some("Purple"));
    }

    #[test]
    fn letter_without_matching_option_falls_through() {
        let mut q = question_with(&[("A", "Red")]);
        resolve(&mut q, Some("Z".into()));
        assert!(q.correct_label.is_none());
        assert_eq!(q.answer_text.as_deref(), Some("Z"));
    }

    #[test]
    fn starred_option_takes_precedence_over_answer_line() {
        let mut q = question_with(&[("A", "Red"), ("B", "Blue")]);
        q.correct_label = Some("A".into());
        resolve(&mut q, Some("B".into()));
        assert_eq!(q.correct_label.as_deref(), Some("A"));
        assert_eq!(q.answer_text.as_deref(), Some("B"));
    }

    #[test]
    fn empty_answer_is_ignored() {
        let mut q = question_with(&[("A", "Red")]);
        resolve(&mut q, Some("   ".into()));
        assert!(q.answer_text.is_none());
        assert!(q.correct_label.is_none());
    }

    #[test]
    fn empty_option_text_never_matches() {
        let mut q = question_with(&[("A", ""), ("B", "Blue")]);
        resolve(&mut q, Some("Blue".into()));
        assert_eq!(q.correct_label.as_deref(), Some("B"));
    }
}
