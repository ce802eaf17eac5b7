//! Section splitting: carve raw markdown into candidate question blocks.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Diagnostics, StructuralWarning};

/// Heading-numbered delimiter, e.g. `###### 12.`
static GITHUB_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s*\d+\.").expect("valid pattern"));

/// Plain-numbered delimiter, e.g. `12.` at line start.
static SIMPLE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\.").expect("valid pattern"));

/// Split markdown into candidate question blocks.
///
/// The heading-numbered delimiter takes priority whenever it yields more
/// than one section, regardless of content. A document that also splits
/// plausibly on the plain delimiter gets a warning, since the tie-break
/// can misread mixed-style documents.
pub(crate) fn split_into_sections(markdown: &str, diag: &mut Diagnostics) -> Vec<String> {
    let github = split_before(markdown, &GITHUB_DELIMITER);
    if github.len() > 1 {
        if split_before(markdown, &SIMPLE_DELIMITER).len() > 1 {
            diag.warning(StructuralWarning::MixedDelimiters);
        }
        return github;
    }

    split_before(markdown, &SIMPLE_DELIMITER)
}

/// Re-split a section on heading-numbered boundaries. Used by the
/// GitHub-style classifier, whose blocks may arrive embedded in a
/// plain-delimited section.
pub(crate) fn split_github_blocks(text: &str) -> Vec<String> {
    split_before(text, &GITHUB_DELIMITER)
}

/// Re-split a section on plain-numbered boundaries.
pub(crate) fn split_simple_blocks(text: &str) -> Vec<String> {
    split_before(text, &SIMPLE_DELIMITER)
}

/// Does this line open a plain-numbered question stem?
pub(crate) fn is_numbered_stem(line: &str) -> bool {
    SIMPLE_DELIMITER.is_match(line)
}

/// Does this line open a heading-numbered question stem?
pub(crate) fn is_heading_stem(line: &str) -> bool {
    GITHUB_DELIMITER.is_match(line)
}

/// Split on boundaries preceding each delimiter match, keeping the
/// delimiter line at the head of its section. Whitespace-only fragments
/// are dropped.
fn split_before(text: &str, delimiter: &Regex) -> Vec<String> {
    let mut starts: Vec<usize> = delimiter.find_iter(text).map(|m| m.start()).collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }
    starts.push(text.len());

    starts
        .windows(2)
        .map(|bounds| &text[bounds[0]..bounds[1]])
        .filter(|section| !section.trim().is_empty())
        .map(str::to_string)
        .collect()
}
