//! Scripted end-to-end sessions: fixed stdin, fixed random draws.

use std::io::Cursor;

use mathquiz_core::config::Preset;
use mathquiz_core::console::Console;
use mathquiz_core::model::{OperationType, QuestionLevel, SymbolStyle};
use mathquiz_core::random::ScriptedRandom;
use mathquiz_core::report::QuizSummary;
use mathquiz_core::session::{
    Session, SessionOptions, COUNT_PROMPT, LEVEL_PROMPT, OPERATION_PROMPT, REPLAY_PROMPT,
};

fn play(input: &str, draws: Vec<i64>, options: SessionOptions) -> (Vec<QuizSummary>, String) {
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut session = Session::new(console, ScriptedRandom::new(draws), options);
    let summaries = session.run().unwrap();
    let (_, out) = session.into_console().into_inner();
    (summaries, String::from_utf8(out).unwrap())
}

#[test]
fn single_easy_addition_answered_correctly() {
    // count=1, Easy, Addition, answer 9, then decline replay
    let (summaries, out) = play("1\n1\n1\n9\nn\n", vec![4, 5], SessionOptions::default());

    assert_eq!(summaries.len(), 1);
    let s = &summaries[0];
    assert_eq!(s.correct_answers, 1);
    assert_eq!(s.incorrect_answers, 0);
    assert!(s.passed);

    assert!(out.contains("Question 1/1"));
    assert!(out.contains(" 4\n   +\n 5\n-----------------"));
    assert!(out.contains("Correct :-)"));
    assert!(out.contains("Final: Pass :-)"));
    assert!(out.contains("Questions Level       : Easy"));
    assert!(out.contains("Operation Type        : Addition"));
}

#[test]
fn hard_division_tie_passes() {
    // count=2, Hard, Division; answers 4 (right) and 0 (wrong)
    let (summaries, out) = play(
        "2\n3\n4\n4\n0\nN\n",
        vec![80, 20, 99, 33],
        SessionOptions::default(),
    );

    let s = &summaries[0];
    assert_eq!((s.correct_answers, s.incorrect_answers), (1, 1));
    assert!(s.passed);
    assert!(out.contains(" 80\n   /\n 20"));
    assert!(out.contains("Question 2/2"));
    assert!(out.contains("Incorrect :-( Correct Answer: 3"));
    assert!(out.contains("Final: Pass :-)"));
}

#[test]
fn malformed_count_reprompts_twice() {
    // "abc" and "-3" are rejected, 5 is accepted
    let input = "abc\n-3\n5\n1\n1\n";
    let (summaries, out) = play(input, vec![], SessionOptions::default());

    assert_eq!(out.matches(COUNT_PROMPT).count(), 3);
    assert_eq!(out.matches(LEVEL_PROMPT).count(), 1);
    assert_eq!(out.matches(OPERATION_PROMPT).count(), 1);
    assert!(out.contains("Question 1/5"));
    // input ran out before any answer
    assert!(summaries.is_empty());
    assert!(!out.contains("Final:"));
}

#[test]
fn out_of_range_selectors_reprompt() {
    let (summaries, out) = play("1\n0\n5\n2\n6\n3\n300\nn\n", vec![12, 25], SessionOptions::default());
    assert_eq!(out.matches(LEVEL_PROMPT).count(), 3);
    assert_eq!(out.matches(OPERATION_PROMPT).count(), 2);
    assert_eq!(summaries[0].level, QuestionLevel::Medium);
    assert_eq!(summaries[0].operation, OperationType::Multiplication);
    assert!(summaries[0].passed);
}

#[test]
fn lowercase_y_replays_and_empty_line_ends() {
    let input = "1\n1\n1\n9\ny\n1\n1\n2\n0\n\n";
    let (summaries, out) = play(input, vec![4, 5, 3, 1], SessionOptions::default());

    assert_eq!(summaries.len(), 2);
    assert!(summaries[0].passed);
    assert!(!summaries[1].passed);
    assert_eq!(out.matches(COUNT_PROMPT).count(), 2);
    assert_eq!(out.matches(REPLAY_PROMPT).count(), 2);
    assert!(out.contains("Incorrect :-( Correct Answer: 2"));
}

#[test]
fn n_ends_session() {
    let (summaries, out) = play("1\n1\n1\n9\nn\n1\n", vec![4, 5], SessionOptions::default());
    assert_eq!(summaries.len(), 1);
    assert_eq!(out.matches(COUNT_PROMPT).count(), 1);
}

#[test]
fn malformed_answers_are_reread() {
    let (summaries, _) = play("1\n1\n1\nnine\n9\nn\n", vec![4, 5], SessionOptions::default());
    assert_eq!(summaries[0].correct_answers, 1);
}

#[test]
fn mixed_selection_reported_as_mixed() {
    // level draw 1 (Easy), op draw 2 (Subtraction), operands 9 and 3
    let (summaries, out) = play("1\n4\n5\n6\nn\n", vec![1, 2, 9, 3], SessionOptions::default());
    assert!(summaries[0].passed);
    assert!(out.contains(" 9\n   -\n 3"));
    assert!(out.contains("Questions Level       : Mixed"));
    assert!(out.contains("Operation Type        : Mixed"));
}

#[test]
fn preset_skips_prompts() {
    let options = SessionOptions {
        preset: Preset {
            questions: Some(1),
            level: Some(QuestionLevel::Easy),
            operation: Some(OperationType::Multiplication),
        },
        symbols: SymbolStyle::Unicode,
        ..SessionOptions::default()
    };
    let (summaries, out) = play("42\nn\n", vec![7, 6], options);

    assert!(!out.contains(COUNT_PROMPT));
    assert!(!out.contains(LEVEL_PROMPT));
    assert!(!out.contains(OPERATION_PROMPT));
    assert!(out.contains("   ×"));
    assert!(summaries[0].passed);
}

#[test]
fn review_table_follows_report() {
    let options = SessionOptions {
        review: true,
        ..SessionOptions::default()
    };
    let (_, out) = play("2\n3\n4\n4\n0\nn\n", vec![80, 20, 99, 33], options);
    let report_at = out.find("Final:").unwrap();
    let table_at = out.find("Correct answer").unwrap();
    assert!(table_at > report_at);
    assert!(out.contains("99 / 33"));
}

#[test]
fn clear_screen_emits_escape_each_round() {
    let options = SessionOptions {
        clear_screen: true,
        ..SessionOptions::default()
    };
    let (_, out) = play("1\n1\n1\n9\ny\n1\n1\n1\n9\nn\n", vec![4, 5, 4, 5], options);
    assert_eq!(out.matches("\x1b[2J").count(), 2);
}

#[test]
fn immediate_eof_ends_quietly() {
    let (summaries, out) = play("", vec![], SessionOptions::default());
    assert!(summaries.is_empty());
    assert_eq!(out.matches(COUNT_PROMPT).count(), 1);
}

#[test]
fn largest_question_count_asks_lazily() {
    // count=i32::MAX, Easy, Addition; answer the first question, then EOF
    let (summaries, out) = play(
        "2147483647\n1\n1\n9\n",
        vec![4, 5, 6, 7],
        SessionOptions::default(),
    );

    assert!(summaries.is_empty());
    assert!(out.contains("Question 1/2147483647"));
    assert!(out.contains("Correct :-)"));
    assert!(out.contains("Question 2/2147483647"));
    assert!(out.contains(" 6\n   +\n 7\n"));
    assert!(!out.contains("Question 3/"));
}
