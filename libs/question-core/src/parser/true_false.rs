//! True/false classifier: a numbered stem immediately followed by a bare
//! boolean answer line naming the correct choice.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{AnswerOption, ParsedQuestion, QuestionKind};

use super::{build_question, sections};

static BOOLEAN_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:True|False|T|F)$").expect("valid pattern"));
static TRUE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:True|T)$").expect("valid pattern"));

/// Is this line a bare boolean answer?
pub(crate) fn is_boolean_line(line: &str) -> bool {
    BOOLEAN_LINE.is_match(line)
}

pub(crate) fn parse_true_false(section: &str) -> Vec<ParsedQuestion> {
    let lines: Vec<&str> = section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut questions = Vec::new();
    for pair in lines.windows(2) {
        let (stem, answer) = (pair[0], pair[1]);
        if !sections::is_numbered_stem(stem) || !is_boolean_line(answer) {
            continue;
        }

        let is_true = TRUE_LINE.is_match(answer);
        let options = vec![
            AnswerOption::new('a', "True", is_true),
            AnswerOption::new('b', "False", !is_true),
        ];
        questions.push(build_question(QuestionKind::TrueFalse, stem, section, options));
    }
    questions
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::QuestionType;

    #[test]
    fn false_answer_selects_second_option() {
        let questions = parse_true_false("2. The sky is green.\nFalse\n");

        assert_eq!(questions.len(), 1);
        let question = &questions[0];
        assert_eq!(question.kind, QuestionKind::TrueFalse);
        assert_eq!(question.question_type, QuestionType::Single);
        assert_eq!(question.options.len(), 2);
        assert_eq!(question.correct_answers, vec!["b"]);
    }

    #[test]
    fn accepts_single_letter_and_mixed_case_booleans() {
        assert_eq!(parse_true_false("1. Stem.\nT\n")[0].correct_answers, vec!["a"]);
        assert_eq!(parse_true_false("1. Stem.\nf\n")[0].correct_answers, vec!["b"]);
        assert_eq!(parse_true_false("1. Stem.\ntrue\n")[0].correct_answers, vec!["a"]);
    }

    #[test]
    fn answer_must_be_the_whole_line() {
        assert!(parse_true_false("1. Stem.\nFalse alarm\n").is_empty());
    }

    #[test]
    fn stem_must_be_numbered() {
        assert!(parse_true_false("The sky is green.\nFalse\n").is_empty());
    }

    #[test]
    fn blank_lines_between_pair_are_tolerated() {
        let questions = parse_true_false("3. Water is wet.\n\nTrue\n");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answers, vec!["a"]);
    }
}
