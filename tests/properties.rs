//! Property tests for the extraction engine.
//!
//! The generators build well-formed plain-text quizzes from a restricted
//! alphabet so prose can never collide with the marker heuristics.

use proptest::prelude::*;

use mcqx::{parse_mcqs_from_text, question_count, trim_mcqs_from_text};

fn prose() -> impl Strategy<Value = String> {
    "[a-f ]{1,30}".prop_map(|s| s.trim().to_string() + "w")
}

fn quiz_text() -> impl Strategy<Value = (String, usize)> {
    (prose(), prop::collection::vec(prose(), 1..8)).prop_map(|(intro, stems)| {
        let mut text = format!("{intro}\n\n");
        for (i, stem) in stems.iter().enumerate() {
            text.push_str(&format!(
                "{n}) {stem}?\nA) first choice\nB) second choice\nAnswer: A\n\n",
                n = i + 1
            ));
        }
        (text, stems.len())
    })
}

proptest! {
    #[test]
    fn parse_never_panics(text in ".*") {
        let _ = parse_mcqs_from_text(&text);
    }

    #[test]
    fn trim_never_panics(text in ".*", max in 0usize..10) {
        let _ = trim_mcqs_from_text(&text, max);
    }

    #[test]
    fn trim_with_huge_limit_is_identity(text in ".*") {
        prop_assert_eq!(trim_mcqs_from_text(&text, usize::MAX), text);
    }

    #[test]
    fn trim_is_idempotent_at_question_count((text, count) in quiz_text()) {
        prop_assert_eq!(trim_mcqs_from_text(&text, count), text.clone());
        prop_assert_eq!(trim_mcqs_from_text(&text, count + 1), text);
    }

    #[test]
    fn trim_below_count_is_monotonic((text, count) in quiz_text(), max in 0usize..8) {
        prop_assume!(max < count);
        let out = trim_mcqs_from_text(&text, max);
        prop_assert_eq!(question_count(&out), max);
        let set = parse_mcqs_from_text(&text);
        prop_assert!(out.starts_with(&set.intro));
    }

    #[test]
    fn double_trim_is_stable((text, count) in quiz_text(), max in 0usize..8) {
        prop_assume!(max < count);
        let once = trim_mcqs_from_text(&text, max);
        let twice = trim_mcqs_from_text(&once, max);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn parse_finds_every_generated_question((text, count) in quiz_text()) {
        let set = parse_mcqs_from_text(&text);
        prop_assert_eq!(set.len(), count);
        for q in &set.questions {
            prop_assert_eq!(q.correct_label.as_deref(), Some("A"));
            prop_assert_eq!(q.options.len(), 2);
        }
    }

    #[test]
    fn plain_text_intro_is_always_a_prefix_of_the_input(text in "[^{`]*") {
        // Excludes JSON-classified input, whose intro comes from the payload
        // rather than the surrounding text.
        let set = parse_mcqs_from_text(&text);
        prop_assert!(text.starts_with(&set.intro));
    }
}
