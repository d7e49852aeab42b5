//! Quiz state for one play-through.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::{OperationType, QuestionLevel};
use crate::question::{AnsweredQuestion, Question};
use crate::report::QuizSummary;

/// Quiz configuration as the player entered it. Level and operation may
/// still be `Mixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    pub number_of_questions: usize,
    pub level: QuestionLevel,
    pub operation: OperationType,
}

impl QuizSettings {
    pub fn new(
        number_of_questions: usize,
        level: QuestionLevel,
        operation: OperationType,
    ) -> Result<Self, QuizError> {
        if number_of_questions == 0 {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self {
            number_of_questions,
            level,
            operation,
        })
    }
}

/// A question slot in a quiz, before or after the player answers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Posed(Question),
    Answered(AnsweredQuestion),
}

impl Entry {
    pub fn question(&self) -> &Question {
        match self {
            Entry::Posed(q) => q,
            Entry::Answered(a) => &a.question,
        }
    }

    pub fn answered(&self) -> Option<&AnsweredQuestion> {
        match self {
            Entry::Posed(_) => None,
            Entry::Answered(a) => Some(a),
        }
    }
}

/// One play-through: ordered questions plus running counters.
#[derive(Debug, Clone)]
pub struct Quiz {
    settings: QuizSettings,
    entries: Vec<Entry>,
    correct_answers: usize,
    incorrect_answers: usize,
}

impl Quiz {
    /// Create an empty quiz. Questions are added as they are asked, so the
    /// requested count never drives an up-front allocation.
    pub fn new(settings: QuizSettings) -> Self {
        Self {
            settings,
            entries: Vec::new(),
            correct_answers: 0,
            incorrect_answers: 0,
        }
    }

    pub fn add_question(&mut self, question: Question) {
        self.entries.push(Entry::Posed(question));
    }

    /// Record the player's answer for the question at `index`.
    ///
    /// Returns whether the answer was correct and bumps the matching counter.
    pub fn record_answer(&mut self, index: usize, answer: i64) -> Result<bool, QuizError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(QuizError::IndexOutOfRange { index, len })?;

        let question = match entry {
            Entry::Posed(q) => *q,
            Entry::Answered(_) => return Err(QuizError::AlreadyAnswered(index)),
        };

        let answered = question.answer(answer);
        let correct = answered.is_correct();
        *entry = Entry::Answered(answered);

        if correct {
            self.correct_answers += 1;
        } else {
            self.incorrect_answers += 1;
        }
        Ok(correct)
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.entries.iter().map(Entry::question)
    }

    pub fn answered(&self) -> impl Iterator<Item = &AnsweredQuestion> {
        self.entries.iter().filter_map(Entry::answered)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    pub fn incorrect_answers(&self) -> usize {
        self.incorrect_answers
    }

    /// A quiz passes when correct answers are at least the incorrect ones.
    pub fn is_pass(&self) -> bool {
        passes(self.correct_answers, self.incorrect_answers)
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            number_of_questions: self.settings.number_of_questions,
            level: self.settings.level,
            operation: self.settings.operation,
            correct_answers: self.correct_answers,
            incorrect_answers: self.incorrect_answers,
            passed: self.is_pass(),
        }
    }
}

/// Pass rule shared by quizzes and summaries. Ties pass.
pub fn passes(correct: usize, incorrect: usize) -> bool {
    correct >= incorrect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Level, Operation};
    use crate::generator::QuestionGenerator;
    use crate::random::ScriptedRandom;

    fn settings(n: usize) -> QuizSettings {
        QuizSettings::new(n, QuestionLevel::Hard, OperationType::Division).unwrap()
    }

    #[test]
    fn zero_questions_rejected() {
        assert_eq!(
            QuizSettings::new(0, QuestionLevel::Easy, OperationType::Addition),
            Err(QuizError::NoQuestions)
        );
    }

    #[test]
    fn pass_rule_holds_for_small_grid() {
        for correct in 0..20 {
            for incorrect in 0..20 {
                assert_eq!(passes(correct, incorrect), correct >= incorrect);
            }
        }
        assert!(passes(3, 3));
        assert!(passes(0, 0));
        assert!(!passes(2, 3));
    }

    #[test]
    fn questions_keep_insertion_order() {
        let mut gen = QuestionGenerator::new(ScriptedRandom::new([80, 20, 99, 33]));
        let mut quiz = Quiz::new(settings(2));
        for _ in 0..2 {
            quiz.add_question(gen.generate(OperationType::Division, QuestionLevel::Hard));
        }
        assert_eq!(quiz.len(), 2);
        let answers: Vec<i64> = quiz.questions().map(|q| q.correct_answer()).collect();
        assert_eq!(answers, vec![4, 3]);
    }

    #[test]
    fn largest_count_starts_empty() {
        let max = i32::MAX as usize;
        let quiz = Quiz::new(
            QuizSettings::new(max, QuestionLevel::Easy, OperationType::Addition).unwrap(),
        );
        assert!(quiz.is_empty());
        assert_eq!(quiz.settings().number_of_questions, max);
        assert_eq!(quiz.summary().number_of_questions, max);
    }

    #[test]
    fn record_answer_updates_counters() {
        let mut quiz = Quiz::new(settings(2));
        quiz.add_question(Question::new(80, 20, Operation::Division, Level::Hard));
        quiz.add_question(Question::new(99, 33, Operation::Division, Level::Hard));

        assert!(quiz.record_answer(0, 4).unwrap());
        assert!(!quiz.record_answer(1, 0).unwrap());
        assert_eq!(quiz.correct_answers(), 1);
        assert_eq!(quiz.incorrect_answers(), 1);
        assert!(quiz.is_pass());
        assert_eq!(quiz.answered().count(), 2);
        assert_eq!(quiz.answered().nth(1).unwrap().player_answer, 0);
    }

    #[test]
    fn record_answer_rejects_bad_index_and_double_answer() {
        let mut quiz = Quiz::new(settings(1));
        quiz.add_question(Question::new(4, 5, Operation::Addition, Level::Easy));

        assert_eq!(
            quiz.record_answer(3, 9),
            Err(QuizError::IndexOutOfRange { index: 3, len: 1 })
        );
        quiz.record_answer(0, 9).unwrap();
        assert_eq!(quiz.record_answer(0, 9), Err(QuizError::AlreadyAnswered(0)));
        assert_eq!(quiz.correct_answers(), 1);
    }

    #[test]
    fn summary_keeps_configured_selection() {
        let s = QuizSettings::new(1, QuestionLevel::Mixed, OperationType::Mixed).unwrap();
        let mut quiz = Quiz::new(s);
        quiz.add_question(Question::new(2, 3, Operation::Multiplication, Level::Easy));
        quiz.record_answer(0, 5).unwrap();

        let summary = quiz.summary();
        assert_eq!(summary.level, QuestionLevel::Mixed);
        assert_eq!(summary.operation, OperationType::Mixed);
        assert_eq!(summary.incorrect_answers, 1);
        assert!(!summary.passed);
    }
}
