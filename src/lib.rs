//! mcqx - MCQ extraction engine
//!
//! Extracts, normalizes, and trims multiple-choice questions from the
//! free-form text language models produce. The engine understands two
//! layouts (an embedded JSON payload and a line-oriented plain-text form)
//! and exposes two total functions:
//!
//! - [`parse_mcqs_from_text`]: text -> structured [`McqSet`]
//! - [`trim_mcqs_from_text`]: text + limit -> text with at most that many
//!   questions, everything else byte-identical
//!
//! The `mcqx` binary wraps these behind `parse` and `trim` subcommands.

pub mod cli;
pub mod error;
pub mod mcq;

pub use crate::error::{McqxError, Result};
pub use crate::mcq::types::{McqOption, McqSet, Question};
pub use crate::mcq::{parse_mcqs_from_text, question_count, trim_mcqs_from_text};
