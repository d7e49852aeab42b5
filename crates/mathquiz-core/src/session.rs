//! The interactive quiz loop.
//!
//! A session walks `Configure -> Generate -> Collect -> Report -> Replay` and
//! returns to `Configure` while the player answers `Y`. End of input at any
//! read finishes the session.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::config::{Preset, QuizConfig};
use crate::console::{Color, Console};
use crate::generator::QuestionGenerator;
use crate::model::{OperationType, QuestionLevel, SymbolStyle};
use crate::question::Question;
use crate::quiz::{Quiz, QuizSettings};
use crate::random::RandomSource;
use crate::report::{review_table, QuizSummary};

pub const COUNT_PROMPT: &str = "How many questions do you want to answer?";
pub const LEVEL_PROMPT: &str = "Enter Question Level: [1] Easy, [2] Medium, [3] Hard, [4] Mixed";
pub const OPERATION_PROMPT: &str =
    "Enter Operation Type: [1] Addition, [2] Subtraction, [3] Multiplication, [4] Division, [5] Mixed";
pub const REPLAY_PROMPT: &str = "Do you want to play again? (Y/N)";

const RULE: &str = "-----------------";

/// Presentation and preset options for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub clear_screen: bool,
    pub symbols: SymbolStyle,
    pub review: bool,
    pub preset: Preset,
}

impl From<&QuizConfig> for SessionOptions {
    fn from(config: &QuizConfig) -> Self {
        Self {
            clear_screen: config.clear_screen,
            symbols: config.symbols,
            review: config.review,
            preset: config.preset,
        }
    }
}

enum Stage {
    Configure,
    Generate(QuizSettings),
    Collect(Quiz),
    Report(Quiz),
    Replay,
    Finished,
}

/// One interactive session, possibly spanning several quizzes.
pub struct Session<R, W, S> {
    console: Console<R, W>,
    generator: QuestionGenerator<S>,
    options: SessionOptions,
}

impl<R: BufRead, W: Write, S: RandomSource> Session<R, W, S> {
    pub fn new(console: Console<R, W>, rng: S, options: SessionOptions) -> Self {
        Self {
            console,
            generator: QuestionGenerator::new(rng),
            options,
        }
    }

    /// Play until the player declines to replay or input runs out.
    ///
    /// Returns the summaries of every quiz that reached its report.
    pub fn run(&mut self) -> Result<Vec<QuizSummary>> {
        let mut summaries = Vec::new();
        let mut stage = Stage::Configure;

        loop {
            stage = match stage {
                Stage::Configure => {
                    if self.options.clear_screen {
                        self.console.clear()?;
                    }
                    match self.configure()? {
                        Some(settings) => Stage::Generate(settings),
                        None => Stage::Finished,
                    }
                }
                Stage::Generate(settings) => {
                    tracing::info!(
                        questions = settings.number_of_questions,
                        level = %settings.level,
                        operation = %settings.operation,
                        "starting quiz"
                    );
                    Stage::Collect(Quiz::new(settings))
                }
                Stage::Collect(mut quiz) => {
                    if self.collect(&mut quiz)? {
                        Stage::Report(quiz)
                    } else {
                        Stage::Finished
                    }
                }
                Stage::Report(quiz) => {
                    let summary = quiz.summary();
                    self.report(&quiz, &summary)?;
                    tracing::info!(
                        correct = summary.correct_answers,
                        incorrect = summary.incorrect_answers,
                        passed = summary.passed,
                        "quiz finished"
                    );
                    summaries.push(summary);
                    Stage::Replay
                }
                Stage::Replay => {
                    self.console.println("")?;
                    self.console.println(REPLAY_PROMPT)?;
                    match self.console.read_line()? {
                        Some(reply) if wants_replay(&reply) => Stage::Configure,
                        _ => Stage::Finished,
                    }
                }
                Stage::Finished => break,
            };
        }

        Ok(summaries)
    }

    /// Ask for whatever the preset does not already answer.
    fn configure(&mut self) -> Result<Option<QuizSettings>> {
        let preset = self.options.preset;

        let count = match preset.questions {
            Some(n) => n,
            None => match self
                .console
                .prompt_integer(COUNT_PROMPT, 1, i64::from(i32::MAX))?
            {
                Some(n) => n as usize,
                None => return Ok(None),
            },
        };

        let level = match preset.level {
            Some(level) => level,
            None => match self.console.prompt_integer(LEVEL_PROMPT, 1, 4)? {
                Some(n) => QuestionLevel::from_selector(n).unwrap_or(QuestionLevel::Mixed),
                None => return Ok(None),
            },
        };

        let operation = match preset.operation {
            Some(op) => op,
            None => match self.console.prompt_integer(OPERATION_PROMPT, 1, 5)? {
                Some(n) => OperationType::from_selector(n).unwrap_or(OperationType::Mixed),
                None => return Ok(None),
            },
        };

        Ok(Some(QuizSettings::new(count, level, operation)?))
    }

    /// Generate and present each question in turn. Returns `false` if input
    /// ran out.
    fn collect(&mut self, quiz: &mut Quiz) -> Result<bool> {
        let settings = *quiz.settings();
        let total = settings.number_of_questions;

        for index in 0..total {
            let question = self.generator.generate(settings.operation, settings.level);
            quiz.add_question(question);
            self.present(&question, index, total)?;

            let Some(answer) = self.console.read_integer()? else {
                tracing::info!(answered = index, total, "input closed mid-quiz");
                return Ok(false);
            };

            if quiz.record_answer(index, answer)? {
                self.console.println_colored("Correct :-)", Color::Green)?;
            } else {
                let line = format!("Incorrect :-( Correct Answer: {}", question.correct_answer());
                self.console.println_colored(&line, Color::Red)?;
            }
        }
        Ok(true)
    }

    fn present(&mut self, question: &Question, index: usize, total: usize) -> Result<()> {
        self.console.println("")?;
        self.console
            .println(&format!("Question {}/{}", index + 1, total))?;
        self.console.println(&format!(" {}", question.number1()))?;
        self.console.println(&format!(
            "   {}",
            question.operation().symbol(self.options.symbols)
        ))?;
        self.console.println(&format!(" {}", question.number2()))?;
        self.console.println(RULE)
    }

    fn report(&mut self, quiz: &Quiz, summary: &QuizSummary) -> Result<()> {
        self.console.println("")?;
        for line in summary.lines() {
            self.console.println(&line)?;
        }
        if self.options.review {
            let table = review_table(quiz, self.options.symbols);
            self.console.println(&table.to_string())?;
        }
        Ok(())
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

/// A replay happens only on a case-insensitive `Y`, surrounding whitespace
/// ignored.
pub fn wants_replay(reply: &str) -> bool {
    reply.trim().eq_ignore_ascii_case("y")
}
