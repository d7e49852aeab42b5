//! Posed and answered questions.

use serde::{Deserialize, Serialize};

use crate::model::{Level, Operation};

/// An immutable generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    number1: i64,
    number2: i64,
    operation: Operation,
    level: Level,
    correct_answer: i64,
}

impl Question {
    /// Build a question; the correct answer is derived from the operands.
    pub fn new(number1: i64, number2: i64, operation: Operation, level: Level) -> Self {
        Self {
            number1,
            number2,
            operation,
            level,
            correct_answer: operation.apply(number1, number2),
        }
    }

    pub fn number1(&self) -> i64 {
        self.number1
    }

    pub fn number2(&self) -> i64 {
        self.number2
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn correct_answer(&self) -> i64 {
        self.correct_answer
    }

    /// Attach the player's answer.
    pub fn answer(self, player_answer: i64) -> AnsweredQuestion {
        AnsweredQuestion {
            question: self,
            player_answer,
        }
    }
}

/// A question together with the answer the player gave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: Question,
    pub player_answer: i64,
}

impl AnsweredQuestion {
    pub fn is_correct(&self) -> bool {
        self.player_answer == self.question.correct_answer
    }
}
