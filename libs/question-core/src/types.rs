//! Core types for the markdown question parser.

use serde::{Deserialize, Serialize};

/// Whether a question has one or several correct answers.
///
/// Always derived from the options, never author-declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Single,
    Multiple,
}

impl QuestionType {
    /// Derive from the number of correct answers.
    pub fn from_correct_count(count: usize) -> Self {
        if count == 1 {
            Self::Single
        } else {
            Self::Multiple
        }
    }
}

/// Author-facing difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

/// Which classifier produced a question.
///
/// Distinct from [`QuestionType`]: true/false and open-ended questions are
/// represented through the same option-based shape as multiple choice, and
/// downstream code needs to know a single-option open-ended placeholder is
/// intentional rather than malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    OpenEnded,
}

/// One answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Single-letter identifier, canonicalized lowercase.
    pub id: String,
    pub text: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn new(id: char, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: id.to_ascii_lowercase().to_string(),
            text: text.into(),
            is_correct,
        }
    }
}

/// A question extracted from one markdown block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    /// Short derived label: the stem with numbering stripped, truncated.
    pub title: String,
    /// Full question stem text.
    pub content: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub kind: QuestionKind,
    /// Options in source order.
    pub options: Vec<AnswerOption>,
    /// Ids of the options marked correct, derived from `options`.
    #[serde(rename = "correctAnswers")]
    pub correct_answers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "learningPath", skip_serializing_if = "Option::is_none")]
    pub learning_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// `#tag` tokens in document order, duplicates preserved.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_points")]
    pub points: u32,
}

pub(crate) fn default_points() -> u32 {
    1
}

/// Outcome of one parse invocation.
///
/// Errors and warnings are accumulated, never thrown. A question that
/// fails validation stays in `questions` but contributes entries to
/// `errors`; callers decide whether to block on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub questions: Vec<ParsedQuestion>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}
