//! GitHub-style multiple choice classifier.
//!
//! Recognizes blocks shaped like the popular interview-question repos: a
//! numbered heading, an optional fenced code snippet, `- A:` option lines,
//! and the answer hidden either in a collapsible `<details>` block or on a
//! bare `Answer:` line.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Diagnostics;
use crate::types::{ParsedQuestion, QuestionKind};

use super::{build_question, metadata, options, sections};

static ANSWER_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Answer:\s*([A-D])").expect("valid pattern"));

/// How many lines past a `<details>` marker the answer scan looks.
const DETAILS_SCAN_LINES: usize = 10;

/// Line-scanning states for one question block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Normal scanning.
    Seeking,
    /// Inside a fenced code block; content is inert.
    InFence { after_details: bool },
    /// A details block was seen and its bounded answer scan already ran.
    AfterDetails,
}

pub(crate) fn parse_github_multiple_choice(
    section: &str,
    diag: &mut Diagnostics,
) -> Vec<ParsedQuestion> {
    sections::split_github_blocks(section)
        .iter()
        .filter_map(|block| parse_block(block, diag))
        .collect()
}

fn parse_block(block: &str, diag: &mut Diagnostics) -> Option<ParsedQuestion> {
    let lines: Vec<&str> = block.lines().collect();

    let mut state = ScanState::Seeking;
    let mut question_text: Option<String> = None;
    let mut options_text = String::new();
    let mut answer: Option<String> = None;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        if line.starts_with("```") {
            state = match state {
                ScanState::Seeking => ScanState::InFence { after_details: false },
                ScanState::AfterDetails => ScanState::InFence { after_details: true },
                ScanState::InFence { after_details: true } => ScanState::AfterDetails,
                ScanState::InFence { after_details: false } => ScanState::Seeking,
            };
            continue;
        }
        if matches!(state, ScanState::InFence { .. }) {
            continue;
        }

        if sections::is_heading_stem(line) {
            // Only the first heading in a block names the question.
            if question_text.is_none() {
                question_text = Some(metadata::strip_heading_number(line));
            }
            continue;
        }

        if options::is_github_option_line(line) {
            options_text.push_str(line);
            options_text.push('\n');
        }

        if state == ScanState::Seeking
            && (line.contains("<details>") || line.contains("<summary>"))
        {
            if let Some(letter) = scan_details_answer(&lines[i..]) {
                answer = Some(letter);
            }
            state = ScanState::AfterDetails;
        }

        if line.contains("Answer:") {
            if let Some(caps) = ANSWER_LETTER.captures(line) {
                answer = Some(caps[1].to_ascii_lowercase());
            }
        }
    }

    let question_text = question_text.filter(|text| !text.is_empty())?;
    if options_text.is_empty() {
        return None;
    }

    let parsed = options::parse_options(&options_text, answer.as_deref(), diag);
    if parsed.len() < 2 || !parsed.iter().any(|option| option.is_correct) {
        return None;
    }

    Some(build_question(
        QuestionKind::MultipleChoice,
        &question_text,
        block,
        parsed,
    ))
}

/// Bounded forward peek from a `<details>` marker for an `Answer: <letter>`
/// token. The peek does not consume lines; the main scan still sees them.
fn scan_details_answer(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .take(DETAILS_SCAN_LINES)
        .find_map(|line| ANSWER_LETTER.captures(line).map(|caps| caps[1].to_ascii_lowercase()))
}
