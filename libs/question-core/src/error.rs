//! Error and warning types for the parser pipeline.
//!
//! The parser never fails outright: findings are rendered to strings and
//! accumulated in a [`Diagnostics`] context threaded through the pipeline,
//! then returned as data in the parse result.

use thiserror::Error;

/// Structural problems that make a question unusable by the quiz engine.
///
/// `index` is the 1-based position of the question in the parse output;
/// block variants refer to a source section that produced no question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("Question {index}: Missing title or content")]
    MissingTitleOrContent { index: usize },

    #[error("Question {index}: Must have at least 2 options")]
    TooFewOptions { index: usize },

    #[error("Question {index}: Must have at least one correct answer")]
    NoCorrectAnswer { index: usize },

    #[error("Question {index}: Invalid correct answer IDs: {ids}")]
    UnknownAnswerIds { index: usize, ids: String },

    #[error("Question block {index}: must have at least 2 options")]
    BlockTooFewOptions { index: usize },

    #[error("Question block {index}: must have at least one correct answer")]
    BlockNoCorrectAnswer { index: usize },

    #[error("Question block {index}: no answer options found")]
    BlockNoOptions { index: usize },

    #[error("Parse error: {message}")]
    Internal { message: String },
}

/// Non-fatal findings surfaced to the author.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralWarning {
    #[error("Question {index}: Title is very long ({len} characters)")]
    LongTitle { index: usize, len: usize },

    #[error("Question {index}: Content is very long ({len} characters)")]
    LongContent { index: usize, len: usize },

    #[error(
        "Document mixes heading-numbered and plain-numbered question \
         delimiters; the heading style takes precedence"
    )]
    MixedDelimiters,

    #[error(
        "Answer line selects option '{external}' but inline markers select \
         '{inline}'; the answer line wins"
    )]
    AnswerSourcesDiverge { external: String, inline: String },
}

/// Accumulation context threaded explicitly through the pipeline.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Diagnostics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn error(&mut self, error: StructuralError) {
        self.errors.push(error.to_string());
    }

    pub(crate) fn warning(&mut self, warning: StructuralWarning) {
        self.warnings.push(warning.to_string());
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.errors, self.warnings)
    }
}
