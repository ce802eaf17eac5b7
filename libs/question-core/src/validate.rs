//! Structural validation of parsed questions.

use std::collections::HashSet;

use crate::error::{Diagnostics, StructuralError, StructuralWarning};
use crate::types::{ParsedQuestion, QuestionKind};

const TITLE_WARN_CHARS: usize = 200;
const CONTENT_WARN_CHARS: usize = 1000;

/// Check every question and accumulate findings without mutating input.
///
/// All checks run for every question even after one fails, so a malformed
/// entry reports everything wrong with it at once. Indices are 1-based.
pub(crate) fn validate_questions(questions: &[ParsedQuestion], diag: &mut Diagnostics) {
    for (i, question) in questions.iter().enumerate() {
        let index = i + 1;

        if question.title.is_empty() || question.content.is_empty() {
            diag.error(StructuralError::MissingTitleOrContent { index });
        }

        // The open-ended placeholder intentionally carries a single
        // synthetic option.
        if question.options.len() < 2 && question.kind != QuestionKind::OpenEnded {
            diag.error(StructuralError::TooFewOptions { index });
        }

        if question.correct_answers.is_empty() {
            diag.error(StructuralError::NoCorrectAnswer { index });
        }

        let known_ids: HashSet<&str> = question
            .options
            .iter()
            .map(|option| option.id.as_str())
            .collect();
        let unknown: Vec<&str> = question
            .correct_answers
            .iter()
            .map(String::as_str)
            .filter(|id| !known_ids.contains(id))
            .collect();
        if !unknown.is_empty() {
            diag.error(StructuralError::UnknownAnswerIds {
                index,
                ids: unknown.join(", "),
            });
        }

        let title_chars = question.title.chars().count();
        if title_chars > TITLE_WARN_CHARS {
            diag.warning(StructuralWarning::LongTitle { index, len: title_chars });
        }
        let content_chars = question.content.chars().count();
        if content_chars > CONTENT_WARN_CHARS {
            diag.warning(StructuralWarning::LongContent { index, len: content_chars });
        }
    }
}
