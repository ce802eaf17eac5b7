//! Option-line parsing for the two authoring dialects.
//!
//! GitHub dialect: `- A: text`, answer resolved externally via an
//! `Answer:` line or collapsible details block. Simple dialect: `a) text`,
//! correctness marked inline with `[correct]`, `[x]` or `[✓]`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Diagnostics, StructuralWarning};
use crate::types::AnswerOption;

/// `- A: text` (the dash is optional).
static GITHUB_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^-?\s*([A-Z]):\s*(.*)$").expect("valid pattern"));

/// `a) text [correct]`, with the trailing marker stripped from the text.
static SIMPLE_OPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([a-zA-Z])\)\s*(.*?)(?:\s*\[(?:correct|x|✓)\])?\s*$").expect("valid pattern")
});

/// Line filter used by the simple-format classifier.
static SIMPLE_OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]\)\s").expect("valid pattern"));

const INLINE_MARKERS: [&str; 3] = ["[correct]", "[x]", "[✓]"];

/// Does this line look like a GitHub-dialect option?
pub(crate) fn is_github_option_line(line: &str) -> bool {
    GITHUB_OPTION.is_match(line)
}

/// Does this line look like a simple-dialect option?
pub(crate) fn is_simple_option_line(line: &str) -> bool {
    SIMPLE_OPTION_LINE.is_match(line)
}

/// Parse option lines into ordered options, resolving correctness.
///
/// The GitHub dialect is tried first; if it matches at all it is used
/// exclusively. An externally resolved answer letter overrides inline
/// markers; when both are present and disagree, the override is kept but
/// surfaced as a warning rather than applied silently.
pub(crate) fn parse_options(
    options_text: &str,
    external_answer: Option<&str>,
    diag: &mut Diagnostics,
) -> Vec<AnswerOption> {
    let external = external_answer.map(str::to_ascii_lowercase);

    let mut options = Vec::new();
    let mut inline_marked = Vec::new();

    for caps in GITHUB_OPTION.captures_iter(options_text) {
        let id = caps[1].to_ascii_lowercase();
        let text = caps[2].trim().to_string();
        let marked = INLINE_MARKERS.iter().any(|m| text.contains(m)) || text.contains("Answer:");
        if marked {
            inline_marked.push(id.clone());
        }
        let is_correct = match &external {
            Some(letter) => id == *letter,
            None => marked,
        };
        options.push(AnswerOption { id, text, is_correct });
    }

    if options.is_empty() {
        for caps in SIMPLE_OPTION.captures_iter(options_text) {
            let id = caps[1].to_ascii_lowercase();
            let text = caps[2].trim().to_string();
            let marked = INLINE_MARKERS.iter().any(|m| caps[0].contains(m));
            if marked {
                inline_marked.push(id.clone());
            }
            let is_correct = match &external {
                Some(letter) => id == *letter,
                None => marked,
            };
            options.push(AnswerOption { id, text, is_correct });
        }
    }

    if let Some(letter) = &external {
        if inline_marked.iter().any(|id| id != letter) {
            diag.warning(StructuralWarning::AnswerSourcesDiverge {
                external: letter.clone(),
                inline: inline_marked.join(", "),
            });
        }
    }

    options
}
