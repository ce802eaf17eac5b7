//! Conversion to the canonical record schema consumed by storage.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{AnswerOption, Difficulty, ParsedQuestion, QuestionType};

const DEFAULT_CATEGORY: &str = "General";
const DEFAULT_TOPIC: &str = "General Topic";
const DEFAULT_LEARNING_PATH: &str = "Default Learning Path";
const CREATED_BY: &str = "markdown-parser";
const ID_SUFFIX_LEN: usize = 9;

/// Canonical question type in the storage schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulkQuestionType {
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
    /// Fallback used by other ingestion surfaces; markdown parsing only
    /// ever emits `multiple-choice`.
    #[serde(rename = "mcq")]
    Mcq,
    #[serde(rename = "code")]
    Code,
}

impl BulkQuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::Mcq => "mcq",
            Self::Code => "code",
        }
    }
}

impl From<QuestionType> for BulkQuestionType {
    fn from(value: QuestionType) -> Self {
        match value {
            QuestionType::Single | QuestionType::Multiple => Self::MultipleChoice,
        }
    }
}

/// Canonical difficulty in the storage schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl BulkDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl From<Difficulty> for BulkDifficulty {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Easy => Self::Beginner,
            Difficulty::Medium => Self::Intermediate,
            Difficulty::Hard => Self::Advanced,
        }
    }
}

/// One canonical question record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkQuestion {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub question_type: BulkQuestionType,
    pub difficulty: BulkDifficulty,
    pub options: Vec<AnswerOption>,
    #[serde(rename = "correctAnswers")]
    pub correct_answers: Vec<String>,
    pub explanation: String,
    pub category: String,
    #[serde(rename = "learningPath")]
    pub learning_path: String,
    pub topic: String,
    pub tags: Vec<String>,
    pub points: u32,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "createdBy")]
    pub created_by: String,
}

/// Aggregate information about a converted batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkMetadata {
    pub source: String,
    pub version: String,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    pub categories: Vec<String>,
    pub difficulties: Vec<String>,
    #[serde(rename = "learningPaths")]
    pub learning_paths: Vec<String>,
}

/// Validation block carried alongside the batch.
///
/// Conversion happens after the caller has gated on the parse result, so
/// this block is always clean here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkValidation {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Canonical bulk payload consumed by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkQuestionData {
    pub questions: Vec<BulkQuestion>,
    pub metadata: BulkMetadata,
    pub validation: BulkValidation,
}

/// Convert parsed questions into canonical records.
///
/// Every record gets a freshly generated id and conversion-time
/// timestamps; ownership of the batch transfers to the caller.
pub fn convert_to_bulk(questions: &[ParsedQuestion]) -> BulkQuestionData {
    let now = Utc::now();
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    let records: Vec<BulkQuestion> = questions
        .iter()
        .map(|question| BulkQuestion {
            id: generate_id(now.timestamp_millis()),
            title: question.title.clone(),
            content: question.content.clone(),
            question_type: question.question_type.into(),
            difficulty: question.difficulty.into(),
            options: question.options.clone(),
            correct_answers: question.correct_answers.clone(),
            explanation: question.explanation.clone().unwrap_or_default(),
            category: question
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            learning_path: question
                .learning_path
                .clone()
                .unwrap_or_else(|| DEFAULT_LEARNING_PATH.to_string()),
            topic: question
                .topic
                .clone()
                .unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            tags: question.tags.clone(),
            points: question.points,
            is_active: true,
            created_at: timestamp.clone(),
            updated_at: timestamp.clone(),
            created_by: CREATED_BY.to_string(),
        })
        .collect();

    let metadata = BulkMetadata {
        source: CREATED_BY.to_string(),
        version: "1.0.0".to_string(),
        total_count: records.len(),
        categories: dedup_preserving_order(records.iter().map(|r| r.category.clone())),
        difficulties: dedup_preserving_order(
            records.iter().map(|r| r.difficulty.as_str().to_string()),
        ),
        learning_paths: dedup_preserving_order(records.iter().map(|r| r.learning_path.clone())),
    };

    BulkQuestionData {
        questions: records,
        metadata,
        validation: BulkValidation {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        },
    }
}

/// Time-based prefix plus random suffix. Uniqueness is probabilistic,
/// which is acceptable at authoring-time batch sizes.
fn generate_id(millis: i64) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("md_{}_{}", millis, &suffix[..ID_SUFFIX_LEN])
}

fn dedup_preserving_order(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values.filter(|value| seen.insert(value.clone())).collect()
}
