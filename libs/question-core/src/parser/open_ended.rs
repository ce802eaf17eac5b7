//! Open-ended classifier: keyword-triggered stems with no answer options.
//!
//! The emitted question carries a single synthetic option marked correct.
//! That placeholder signals "requires manual grading" to the quiz engine;
//! it is not an auto-gradable answer.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{AnswerOption, ParsedQuestion, QuestionKind};

use super::{build_question, options, sections, true_false};

static TRIGGER_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:Explain|Describe|What|How|Why)").expect("valid pattern"));
static TRAILING_BOOLEAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:True|False|T|F)$").expect("valid pattern"));

pub(crate) fn parse_open_ended(section: &str) -> Vec<ParsedQuestion> {
    sections::split_simple_blocks(section)
        .iter()
        .filter_map(|block| parse_block(block, section))
        .collect()
}

fn parse_block(block: &str, section: &str) -> Option<ParsedQuestion> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let stem = *lines.first()?;
    if !sections::is_numbered_stem(stem) {
        return None;
    }
    // Not a true/false question, in either of its spellings.
    if TRAILING_BOOLEAN.is_match(stem) {
        return None;
    }
    if lines.get(1).is_some_and(|line| true_false::is_boolean_line(line)) {
        return None;
    }
    if !TRIGGER_KEYWORD.is_match(stem) {
        return None;
    }
    // A stem followed by lettered options belongs to the choice classifiers.
    if lines
        .iter()
        .any(|line| options::is_simple_option_line(line) || options::is_github_option_line(line))
    {
        return None;
    }

    let placeholder = vec![AnswerOption::new('a', "Open-ended response", true)];
    Some(build_question(QuestionKind::OpenEnded, stem, section, placeholder))
}
