//! Quiz summaries and tabular renderings.

use comfy_table::{Cell, Table};
use serde::{Deserialize, Serialize};

use crate::model::{Level, Operation, OperationType, QuestionLevel, SymbolStyle};
use crate::question::Question;
use crate::quiz::{Entry, Quiz};

/// Final tally of one play-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub number_of_questions: usize,
    /// Level as configured; may be `Mixed`.
    pub level: QuestionLevel,
    /// Operation as configured; may be `Mixed`.
    pub operation: OperationType,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    pub passed: bool,
}

impl QuizSummary {
    /// Report lines shown after the last question.
    pub fn lines(&self) -> Vec<String> {
        let verdict = if self.passed { "Pass :-)" } else { "Fail :-(" };
        vec![
            "------------------".to_string(),
            format!("Final: {verdict}"),
            "------------------".to_string(),
            format!("Number Of Questions   : {}", self.number_of_questions),
            format!("Questions Level       : {}", self.level),
            format!("Operation Type        : {}", self.operation),
            format!("Number Of Correct Answers : {}", self.correct_answers),
            format!("Number Of Incorrect Answers: {}", self.incorrect_answers),
            "------------------".to_string(),
        ]
    }
}

/// A question as printed on a worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetRow {
    pub index: usize,
    pub number1: i64,
    pub operation: Operation,
    pub number2: i64,
    pub level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<i64>,
}

impl WorksheetRow {
    pub fn from_question(index: usize, question: &Question, with_answer: bool) -> Self {
        Self {
            index,
            number1: question.number1(),
            operation: question.operation(),
            number2: question.number2(),
            level: question.level(),
            answer: with_answer.then(|| question.correct_answer()),
        }
    }
}

/// Render a per-question review of a finished quiz.
pub fn review_table(quiz: &Quiz, symbols: SymbolStyle) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your answer", "Correct answer", "Result"]);

    for (i, entry) in quiz.entries().iter().enumerate() {
        let question = entry.question();
        let (given, result) = match entry {
            Entry::Answered(a) => (
                a.player_answer.to_string(),
                if a.is_correct() { "correct" } else { "incorrect" },
            ),
            Entry::Posed(_) => ("-".to_string(), "skipped"),
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format_question(question, symbols)),
            Cell::new(given),
            Cell::new(question.correct_answer()),
            Cell::new(result),
        ]);
    }

    table
}

/// Render worksheet rows as a table.
pub fn worksheet_table(rows: &[WorksheetRow], symbols: SymbolStyle) -> Table {
    let show_answers = rows.iter().any(|r| r.answer.is_some());
    let mut header = vec!["#", "Level", "Question"];
    if show_answers {
        header.push("Answer");
    }

    let mut table = Table::new();
    table.set_header(header);
    for row in rows {
        let mut cells = vec![
            Cell::new(row.index),
            Cell::new(row.level),
            Cell::new(format!(
                "{} {} {}",
                row.number1,
                row.operation.symbol(symbols),
                row.number2
            )),
        ];
        if show_answers {
            cells.push(Cell::new(
                row.answer.map(|a| a.to_string()).unwrap_or_default(),
            ));
        }
        table.add_row(cells);
    }
    table
}

/// One-line form of a question, e.g. `80 / 20`.
pub fn format_question(question: &Question, symbols: SymbolStyle) -> String {
    format!(
        "{} {} {}",
        question.number1(),
        question.operation().symbol(symbols),
        question.number2()
    )
}
