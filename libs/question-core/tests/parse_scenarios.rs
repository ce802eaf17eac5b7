//! End-to-end parsing scenarios across the four supported formats.

use pretty_assertions::assert_eq;
use question_core::{parse_markdown, QuestionKind, QuestionType};

#[test]
fn simple_format_single_answer() {
    let result = parse_markdown("1. Q?\na) x\nb) y [correct]");

    assert_eq!(result.questions.len(), 1);
    assert!(result.errors.is_empty());

    let question = &result.questions[0];
    assert_eq!(question.question_type, QuestionType::Single);
    assert_eq!(question.options.len(), 2);
    assert_eq!(question.options[0].id, "a");
    assert_eq!(question.options[0].text, "x");
    assert!(!question.options[0].is_correct);
    assert_eq!(question.options[1].id, "b");
    assert_eq!(question.options[1].text, "y");
    assert!(question.options[1].is_correct);
    assert_eq!(question.correct_answers, vec!["b"]);
}

#[test]
fn github_format_with_code_fence_and_details_answer() {
    let input = r#"###### 1. What's logged?

```js
- A: not an option, just code
console.log(3);
```

- A: `1`
- B: `2`
- C: `3`
- D: `4`

<details><summary><b>Answer</b></summary>
<p>

#### Answer: C

Because the snippet logs 3.

</p>
</details>
"#;
    let result = parse_markdown(input);

    assert_eq!(result.questions.len(), 1);
    assert!(result.errors.is_empty());

    let question = &result.questions[0];
    assert_eq!(question.title, "What's logged?");
    // The fenced snippet contributes nothing to the option list.
    assert_eq!(question.options.len(), 4);
    assert_eq!(question.options[0].text, "`1`");
    assert_eq!(question.correct_answers, vec!["c"]);
    assert_eq!(question.explanation.as_deref(), Some("#### Answer: C\nBecause the snippet logs 3."));
}

#[test]
fn true_false_selects_the_stated_boolean() {
    let result = parse_markdown("2. The sky is green.\nFalse");

    assert_eq!(result.questions.len(), 1);
    assert!(result.errors.is_empty());

    let question = &result.questions[0];
    assert_eq!(question.kind, QuestionKind::TrueFalse);
    assert_eq!(question.options.len(), 2);
    assert_eq!(question.options[0].text, "True");
    assert_eq!(question.options[1].text, "False");
    assert_eq!(question.correct_answers, vec!["b"]);
}

#[test]
fn open_ended_produces_manual_grading_placeholder() {
    let result = parse_markdown("3. Explain closures in JavaScript.");

    assert_eq!(result.questions.len(), 1);
    assert!(result.errors.is_empty());

    let question = &result.questions[0];
    assert_eq!(question.kind, QuestionKind::OpenEnded);
    assert_eq!(question.options.len(), 1);
    assert_eq!(question.options[0].text, "Open-ended response");
    assert!(question.options[0].is_correct);
    assert_eq!(question.correct_answers, vec!["a"]);
}

#[test]
fn single_option_block_yields_error_not_question() {
    let result = parse_markdown("1. Lonely question?\na) the only option");

    assert!(result.questions.is_empty());
    assert!(result.errors.iter().any(|e| e.contains("at least 2 options")));
}

#[test]
fn one_bad_block_never_discards_the_good_ones() {
    let input = "1. Good?\na) x\nb) y [correct]\n\n2. Bad block with no options\n\n3. Also good?\na) yes [correct]\nb) no\n";
    let result = parse_markdown(input);

    assert_eq!(result.questions.len(), 2);
    assert!(!result.errors.is_empty());
}

#[test]
fn conflicting_answer_sources_warn_and_answer_line_wins() {
    let input = "### 1. Q?\n- A: first [correct]\n- B: second\n\nAnswer: B\n";
    let result = parse_markdown(input);

    assert_eq!(result.questions.len(), 1);
    assert_eq!(result.questions[0].correct_answers, vec!["b"]);
    assert!(result.warnings.iter().any(|w| w.contains("the answer line wins")));
}

#[test]
fn stem_metadata_reaches_the_parsed_question() {
    let input = "1. How does the borrow checker work? [3 points] #rust #ownership\na) It doesn't\nb) Statically [correct]\n\nCategory: Rust\nLearning Path: Systems Programming\nTopic: Ownership\nDifficulty: hard\n";
    let result = parse_markdown(input);

    let question = &result.questions[0];
    assert_eq!(question.points, 3);
    assert_eq!(question.tags, vec!["rust", "ownership"]);
    assert_eq!(question.category.as_deref(), Some("Rust"));
    assert_eq!(question.learning_path.as_deref(), Some("Systems Programming"));
    assert_eq!(question.topic.as_deref(), Some("Ownership"));
}

#[test]
fn parsing_twice_yields_identical_results() {
    let input = "1. Q?\na) x\nb) y [correct]\n\n2. The sky is green.\nFalse\n\n3. Describe ownership in your own words.\n";
    assert_eq!(parse_markdown(input), parse_markdown(input));
}

#[test]
fn every_question_satisfies_the_answer_invariants() {
    let input = "1. Pick both evens.\na) 2 [correct]\nb) 3\nc) 4 [correct]\n\n2. Water is wet.\nTrue\n\n3. Explain the event loop in detail.\n";
    let result = parse_markdown(input);
    assert_eq!(result.questions.len(), 3);

    for question in &result.questions {
        assert!(!question.correct_answers.is_empty());
        for id in &question.correct_answers {
            assert!(question.options.iter().any(|option| &option.id == id));
        }
        let expected = if question.correct_answers.len() == 1 {
            QuestionType::Single
        } else {
            QuestionType::Multiple
        };
        assert_eq!(question.question_type, expected);
    }

    assert_eq!(result.questions[0].question_type, QuestionType::Multiple);
}
