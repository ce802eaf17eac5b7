//! Markdown question parser.
//!
//! Single-pass pipeline: raw text is split into candidate question blocks,
//! every block is offered to each format classifier, and the combined
//! output is validated. Malformed blocks surface as accumulated errors,
//! never as a failed parse: one bad block in a fifty-question upload must
//! not discard the other forty-nine.
//!
//! # Formats
//!
//! ```markdown
//! 1. What is the capital of France?
//! a) London
//! b) Paris [correct]
//!
//! ###### 2. What's the output?
//! - A: `undefined`
//! - B: `ReferenceError`
//! <details><summary>Answer</summary>
//! Answer: B
//! </details>
//!
//! 3. The sky is green.
//! False
//!
//! 4. Explain closures.
//! ```

mod github;
mod metadata;
mod open_ended;
mod options;
mod sections;
mod simple;
mod true_false;

use std::panic::{self, AssertUnwindSafe};

use crate::error::{Diagnostics, StructuralError};
use crate::types::{AnswerOption, ParsedQuestion, ParseResult, QuestionKind, QuestionType};
use crate::validate::validate_questions;

/// Parse markdown content into structured questions.
///
/// Never fails: structural problems are reported through
/// [`ParseResult::errors`] and `warnings`, and an unexpected internal
/// fault collapses to a single generic error entry with no questions.
pub fn parse_markdown(markdown: &str) -> ParseResult {
    match panic::catch_unwind(AssertUnwindSafe(|| parse_inner(markdown))) {
        Ok(result) => result,
        Err(_) => {
            tracing::error!("markdown question parser panicked; returning empty result");
            ParseResult {
                questions: Vec::new(),
                errors: vec![StructuralError::Internal {
                    message: "unexpected internal failure".to_string(),
                }
                .to_string()],
                warnings: Vec::new(),
            }
        }
    }
}

fn parse_inner(markdown: &str) -> ParseResult {
    let mut diag = Diagnostics::new();

    let sections = sections::split_into_sections(markdown, &mut diag);
    tracing::debug!("split markdown into {} section(s)", sections.len());

    let mut questions = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        let found = classify_section(section, &mut diag);
        tracing::trace!("section {}: {} question(s)", i + 1, found.len());
        if found.is_empty() {
            diagnose_empty_section(section, i + 1, &mut diag);
        }
        questions.extend(found);
    }

    validate_questions(&questions, &mut diag);

    let (errors, warnings) = diag.into_parts();
    tracing::debug!(
        "parsed {} question(s) with {} error(s), {} warning(s)",
        questions.len(),
        errors.len(),
        warnings.len()
    );
    ParseResult { questions, errors, warnings }
}

/// Offer a section to every classifier and concatenate the results.
///
/// A section may legitimately match more than one classifier; duplicates
/// are the caller's concern.
fn classify_section(section: &str, diag: &mut Diagnostics) -> Vec<ParsedQuestion> {
    let mut found = Vec::new();
    found.extend(github::parse_github_multiple_choice(section, diag));
    found.extend(simple::parse_simple_multiple_choice(section, diag));
    found.extend(true_false::parse_true_false(section));
    found.extend(open_ended::parse_open_ended(section));
    found
}

/// Explain why a section that looks like a question block produced
/// nothing. Sections without a numbered stem (document preambles,
/// separators) are skipped silently.
fn diagnose_empty_section(section: &str, index: usize, diag: &mut Diagnostics) {
    let has_stem = section
        .lines()
        .map(str::trim)
        .any(|line| sections::is_numbered_stem(line) || sections::is_heading_stem(line));
    if !has_stem {
        return;
    }

    let option_lines = section
        .lines()
        .map(str::trim)
        .filter(|line| {
            options::is_simple_option_line(line) || options::is_github_option_line(line)
        })
        .count();

    match option_lines {
        0 => diag.error(StructuralError::BlockNoOptions { index }),
        1 => diag.error(StructuralError::BlockTooFewOptions { index }),
        // Options were found but no classifier accepted the block; the
        // usual cause is an unmarked correct answer.
        _ => diag.error(StructuralError::BlockNoCorrectAnswer { index }),
    }
}

/// Assemble a question from a classified stem, its surrounding block, and
/// parsed options. The type and correct-answer list are always derived
/// from the options.
fn build_question(
    kind: QuestionKind,
    stem: &str,
    block: &str,
    options: Vec<AnswerOption>,
) -> ParsedQuestion {
    let correct_answers: Vec<String> = options
        .iter()
        .filter(|option| option.is_correct)
        .map(|option| option.id.clone())
        .collect();

    ParsedQuestion {
        title: metadata::extract_title(stem),
        content: stem.trim().to_string(),
        question_type: QuestionType::from_correct_count(correct_answers.len()),
        difficulty: metadata::extract_difficulty(stem, block),
        kind,
        options,
        correct_answers,
        explanation: metadata::extract_explanation(block),
        category: metadata::extract_category(block),
        learning_path: metadata::extract_learning_path(block),
        topic: metadata::extract_topic(block),
        tags: metadata::extract_tags(block),
        points: metadata::extract_points(stem),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn malformed_block_does_not_discard_the_rest() {
        let input = "1. Good question?\na) x\nb) y [correct]\n\n2. Orphan stem with nothing else\n";
        let result = parse_markdown(input);

        assert_eq!(result.questions.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("no answer options found"));
    }

    #[test]
    fn single_option_block_reports_minimum() {
        let result = parse_markdown("1. Lonely?\na) just one\n");
        assert!(result.questions.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("at least 2 options"));
    }

    #[test]
    fn unmarked_options_report_missing_answer() {
        let result = parse_markdown("1. Pick one.\na) first\nb) second\n");
        assert!(result.questions.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("at least one correct answer"));
    }

    #[test]
    fn preamble_text_is_silently_ignored() {
        let input = "Just an introduction paragraph.\n\n1. Q?\na) x [correct]\nb) y\n";
        let result = parse_markdown(input);
        assert_eq!(result.questions.len(), 1);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let result = parse_markdown("");
        assert_eq!(result, ParseResult::default());
    }

    #[test]
    fn parsing_is_stateless_across_calls() {
        let input = "1. Q?\na) x\nb) y [correct]\n\n2. The sky is green.\nFalse\n";
        let first = parse_markdown(input);
        let second = parse_markdown(input);
        assert_eq!(first, second);
    }
}
