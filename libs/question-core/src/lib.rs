//! Core markdown question parsing library for the platform's quiz engine.
//!
//! Converts free-form markdown written by content authors into validated,
//! typed question records and canonical bulk payloads for persistence.
//!
//! Provides:
//! - Markdown question parser covering four author conventions (two
//!   multiple-choice dialects, true/false, open-ended)
//! - Structural validation with accumulated errors and warnings
//! - Conversion to the canonical bulk question schema
//! - An author-facing markdown template

pub mod convert;
pub mod error;
pub mod parser;
pub mod template;
pub mod types;
mod validate;

pub use convert::{
    convert_to_bulk, BulkDifficulty, BulkMetadata, BulkQuestion, BulkQuestionData,
    BulkQuestionType, BulkValidation,
};
pub use error::{StructuralError, StructuralWarning};
pub use parser::parse_markdown;
pub use template::generate_template;
pub use types::{
    AnswerOption, Difficulty, ParseResult, ParsedQuestion, QuestionKind, QuestionType,
};
