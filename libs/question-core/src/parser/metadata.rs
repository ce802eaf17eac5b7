//! Inline metadata extraction from question blocks.
//!
//! Each extractor is an independent single pass over the raw block text,
//! returning the first match or nothing. Authors are loose with these
//! conventions, so the patterns are deliberately forgiving.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Difficulty;

static HEADING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s*\d+\.?\s*").expect("valid pattern"));
static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?\s*").expect("valid pattern"));

/// Collapsible answer structure: `<details><summary>…</summary><p>…</p></details>`.
static DETAILS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?si)<details>.*?<summary>.*?</summary>.*?<p>.*?</p>.*?</details>")
        .expect("valid pattern")
});
static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?si)<p>(.*?)</p>").expect("valid pattern"));
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid pattern"));
/// A `<` opened but never closed before the end of the text.
static TRUNCATED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*$").expect("valid pattern"));
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid pattern"));

static EXPLANATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^explanation[:\s]+(.*)$").expect("valid pattern"));
static CATEGORY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)category[:\s]+([^\n]*)").expect("valid pattern"));
static LEARNING_PATH_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:learning[_\s]?path|learningpath)[:\s]+([^\n]*)").expect("valid pattern")
});
static TOPIC_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)topic[:\s]+([^\n]*)").expect("valid pattern"));
static DIFFICULTY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^difficulty[:\s]+([^\n]*)").expect("valid pattern"));

static TAG_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("valid pattern"));
static POINTS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(\d+)\s*points?\]").expect("valid pattern"));

/// Maximum title length before truncation.
const TITLE_MAX_CHARS: usize = 100;

/// Strip a heading-numbered prefix (`### 3.`) from a stem line.
pub(crate) fn strip_heading_number(line: &str) -> String {
    HEADING_PREFIX.replace(line.trim(), "").trim().to_string()
}

/// Short label derived from the stem: numbering stripped, truncated with
/// an ellipsis marker when long.
pub(crate) fn extract_title(stem: &str) -> String {
    let title = strip_heading_number(stem);
    let title = NUMBER_PREFIX.replace(&title, "");
    let title = title.trim();

    if title.chars().count() > TITLE_MAX_CHARS {
        let truncated: String = title.chars().take(TITLE_MAX_CHARS).collect();
        truncated + "..."
    } else {
        title.to_string()
    }
}

/// Explanation text, preferring a collapsible details structure over a
/// bare `explanation:` line.
pub(crate) fn extract_explanation(block: &str) -> Option<String> {
    if let Some(details) = DETAILS_BLOCK.find(block) {
        if let Some(caps) = PARAGRAPH.captures(details.as_str()) {
            let cleaned = strip_html_tags(&caps[1]);
            let collapsed = BLANK_RUN.replace_all(&cleaned, "\n");
            return Some(collapsed.trim().to_string());
        }
    }

    EXPLANATION_LINE
        .captures(block)
        .map(|caps| caps[1].trim().to_string())
}

pub(crate) fn extract_category(block: &str) -> Option<String> {
    CATEGORY_LINE
        .captures(block)
        .map(|caps| caps[1].trim().to_string())
}

pub(crate) fn extract_learning_path(block: &str) -> Option<String> {
    LEARNING_PATH_LINE
        .captures(block)
        .map(|caps| caps[1].trim().to_string())
}

pub(crate) fn extract_topic(block: &str) -> Option<String> {
    TOPIC_LINE
        .captures(block)
        .map(|caps| caps[1].trim().to_string())
}

/// Every `#word` token in the block, in order, duplicates preserved.
pub(crate) fn extract_tags(block: &str) -> Vec<String> {
    TAG_TOKEN
        .captures_iter(block)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// `[N points]` in the stem, defaulting to 1.
pub(crate) fn extract_points(stem: &str) -> u32 {
    POINTS_TOKEN
        .captures(stem)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(1)
}

/// Difficulty for a question: an explicit `difficulty:` line wins,
/// otherwise a keyword scan of the stem.
pub(crate) fn extract_difficulty(stem: &str, block: &str) -> Difficulty {
    if let Some(caps) = DIFFICULTY_LINE.captures(block) {
        if let Some(difficulty) = parse_difficulty_value(caps[1].trim()) {
            return difficulty;
        }
    }
    infer_difficulty(stem)
}

fn parse_difficulty_value(value: &str) -> Option<Difficulty> {
    match value.to_lowercase().as_str() {
        "easy" | "beginner" => Some(Difficulty::Easy),
        "medium" | "intermediate" => Some(Difficulty::Medium),
        "hard" | "advanced" => Some(Difficulty::Hard),
        _ => None,
    }
}

fn infer_difficulty(text: &str) -> Difficulty {
    let lower = text.to_lowercase();
    if lower.contains("easy") || lower.contains("beginner") {
        Difficulty::Easy
    } else if lower.contains("hard") || lower.contains("advanced") {
        Difficulty::Hard
    } else {
        Difficulty::Medium
    }
}

/// Remove well-formed and truncated HTML tags from captured text.
fn strip_html_tags(text: &str) -> String {
    let cleaned = HTML_TAG.replace_all(text, "");
    let cleaned = TRUNCATED_TAG.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}
