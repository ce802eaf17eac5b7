//! Simple-format multiple choice classifier: a plain-numbered stem
//! followed by `a) text` option lines.

use crate::error::Diagnostics;
use crate::types::{ParsedQuestion, QuestionKind};

use super::{build_question, options, sections};

pub(crate) fn parse_simple_multiple_choice(
    section: &str,
    diag: &mut Diagnostics,
) -> Vec<ParsedQuestion> {
    sections::split_simple_blocks(section)
        .iter()
        .filter_map(|block| parse_block(block, diag))
        .collect()
}

fn parse_block(block: &str, diag: &mut Diagnostics) -> Option<ParsedQuestion> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 2 {
        return None;
    }

    let stem = lines[0];
    if !sections::is_numbered_stem(stem) {
        return None;
    }

    let option_lines: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| options::is_simple_option_line(line))
        .collect();
    if option_lines.len() < 2 {
        return None;
    }

    let parsed = options::parse_options(&option_lines.join("\n"), None, diag);
    if parsed.len() < 2 || !parsed.iter().any(|option| option.is_correct) {
        return None;
    }

    Some(build_question(QuestionKind::MultipleChoice, stem, block, parsed))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::{AnswerOption, QuestionType};

    #[test]
    fn parses_numbered_stem_with_lettered_options() {
        let mut diag = Diagnostics::new();
        let section = "1. Q?\na) x\nb) y [correct]\n";
        let questions = parse_simple_multiple_choice(section, &mut diag);

        assert_eq!(questions.len(), 1);
        let question = &questions[0];
        assert_eq!(question.question_type, QuestionType::Single);
        assert_eq!(
            question.options,
            vec![
                AnswerOption::new('a', "x", false),
                AnswerOption::new('b', "y", true),
            ]
        );
        assert_eq!(question.correct_answers, vec!["b"]);
    }

    #[test]
    fn multiple_marked_options_yield_multiple_type() {
        let mut diag = Diagnostics::new();
        let section = "1. Pick all primes.\na) 2 [correct]\nb) 3 [correct]\nc) 4\n";
        let questions = parse_simple_multiple_choice(section, &mut diag);
        assert_eq!(questions[0].question_type, QuestionType::Multiple);
        assert_eq!(questions[0].correct_answers, vec!["a", "b"]);
    }

    #[test]
    fn stem_must_be_numbered() {
        let mut diag = Diagnostics::new();
        let section = "Not a stem\na) x [correct]\nb) y\n";
        assert!(parse_simple_multiple_choice(section, &mut diag).is_empty());
    }

    #[test]
    fn single_option_block_is_rejected() {
        let mut diag = Diagnostics::new();
        let section = "1. Q?\na) only one [correct]\n";
        assert!(parse_simple_multiple_choice(section, &mut diag).is_empty());
    }

    #[test]
    fn unmarked_options_are_rejected() {
        let mut diag = Diagnostics::new();
        let section = "1. Q?\na) x\nb) y\n";
        assert!(parse_simple_multiple_choice(section, &mut diag).is_empty());
    }

    #[test]
    fn surrounding_metadata_lines_are_ignored() {
        let mut diag = Diagnostics::new();
        let section = "1. Q?\na) x\nb) y [correct]\n\nCategory: Geography\nExplanation: because\n";
        let questions = parse_simple_multiple_choice(section, &mut diag);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].category.as_deref(), Some("Geography"));
        assert_eq!(questions[0].explanation.as_deref(), Some("because"));
    }
}
