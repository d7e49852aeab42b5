//! Core data model types for mathquiz.
//!
//! Selection enums (`QuestionLevel`, `OperationType`) describe what the player
//! asked for and may be `Mixed`. Concrete enums (`Level`, `Operation`) are what
//! a generated question actually carries, so a stored `Mixed` cannot exist.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::random::RandomSource;

/// Difficulty level as selected by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionLevel {
    Easy,
    Medium,
    Hard,
    Mixed,
}

/// Concrete difficulty level of a generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

/// Arithmetic operation as selected by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Mixed,
}

/// Concrete arithmetic operation of a generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

/// How operation glyphs are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolStyle {
    #[default]
    Ascii,
    Unicode,
}

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    /// Map a 1-based menu selector to a level.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Level::Easy),
            2 => Some(Level::Medium),
            3 => Some(Level::Hard),
            _ => None,
        }
    }

    /// Half-open range both operands are drawn from.
    pub fn operand_range(self) -> Range<i64> {
        match self {
            Level::Easy => 1..10,
            Level::Medium => 11..30,
            Level::Hard => 31..100,
        }
    }
}

impl QuestionLevel {
    /// Map a 1-based menu selector (`1..=4`) to a level selection.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            4 => Some(QuestionLevel::Mixed),
            other => Level::from_selector(other).map(QuestionLevel::from),
        }
    }

    /// Resolve the selection to a concrete level.
    ///
    /// Only `Mixed` consumes a draw from `rng`, picking uniformly among the
    /// three concrete levels.
    pub fn resolve<R: RandomSource + ?Sized>(self, rng: &mut R) -> Level {
        match self {
            QuestionLevel::Easy => Level::Easy,
            QuestionLevel::Medium => Level::Medium,
            QuestionLevel::Hard => Level::Hard,
            QuestionLevel::Mixed => {
                let pick = rng.next_in_range(1, Level::ALL.len() as i64 + 1);
                Level::from_selector(pick).unwrap_or(Level::Easy)
            }
        }
    }
}

impl From<Level> for QuestionLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => QuestionLevel::Easy,
            Level::Medium => QuestionLevel::Medium,
            Level::Hard => QuestionLevel::Hard,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Easy => write!(f, "Easy"),
            Level::Medium => write!(f, "Medium"),
            Level::Hard => write!(f, "Hard"),
        }
    }
}

impl fmt::Display for QuestionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionLevel::Easy => write!(f, "Easy"),
            QuestionLevel::Medium => write!(f, "Medium"),
            QuestionLevel::Hard => write!(f, "Hard"),
            QuestionLevel::Mixed => write!(f, "Mixed"),
        }
    }
}

impl FromStr for QuestionLevel {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(selector) = s.parse::<i64>() {
            return QuestionLevel::from_selector(selector).ok_or(QuizError::InvalidLevel(selector));
        }
        match s.to_lowercase().as_str() {
            "easy" => Ok(QuestionLevel::Easy),
            "medium" => Ok(QuestionLevel::Medium),
            "hard" => Ok(QuestionLevel::Hard),
            "mixed" | "any" => Ok(QuestionLevel::Mixed),
            other => Err(QuizError::UnknownName {
                kind: "level",
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Map a 1-based menu selector to an operation.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Operation::Addition),
            2 => Some(Operation::Subtraction),
            3 => Some(Operation::Multiplication),
            4 => Some(Operation::Division),
            _ => None,
        }
    }

    /// Apply the operation. Division truncates toward zero.
    ///
    /// Generated operands are always at least 1, so the divisor is never zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operation::Addition => lhs + rhs,
            Operation::Subtraction => lhs - rhs,
            Operation::Multiplication => lhs * rhs,
            Operation::Division => lhs / rhs,
        }
    }

    pub fn symbol(self, style: SymbolStyle) -> &'static str {
        match (self, style) {
            (Operation::Addition, _) => "+",
            (Operation::Subtraction, SymbolStyle::Ascii) => "-",
            (Operation::Subtraction, SymbolStyle::Unicode) => "\u{2212}",
            (Operation::Multiplication, SymbolStyle::Ascii) => "*",
            (Operation::Multiplication, SymbolStyle::Unicode) => "\u{00d7}",
            (Operation::Division, SymbolStyle::Ascii) => "/",
            (Operation::Division, SymbolStyle::Unicode) => "\u{00f7}",
        }
    }
}

impl OperationType {
    /// Map a 1-based menu selector (`1..=5`) to an operation selection.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            5 => Some(OperationType::Mixed),
            other => Operation::from_selector(other).map(OperationType::from),
        }
    }

    /// Resolve the selection to a concrete operation.
    ///
    /// Only `Mixed` consumes a draw from `rng`, picking uniformly among the
    /// four concrete operations.
    pub fn resolve<R: RandomSource + ?Sized>(self, rng: &mut R) -> Operation {
        match self {
            OperationType::Addition => Operation::Addition,
            OperationType::Subtraction => Operation::Subtraction,
            OperationType::Multiplication => Operation::Multiplication,
            OperationType::Division => Operation::Division,
            OperationType::Mixed => {
                let pick = rng.next_in_range(1, Operation::ALL.len() as i64 + 1);
                Operation::from_selector(pick).unwrap_or(Operation::Addition)
            }
        }
    }
}

impl From<Operation> for OperationType {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Addition => OperationType::Addition,
            Operation::Subtraction => OperationType::Subtraction,
            Operation::Multiplication => OperationType::Multiplication,
            Operation::Division => OperationType::Division,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        OperationType::from(*self).fmt(f)
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationType::Addition => write!(f, "Addition"),
            OperationType::Subtraction => write!(f, "Subtraction"),
            OperationType::Multiplication => write!(f, "Multiplication"),
            OperationType::Division => write!(f, "Division"),
            OperationType::Mixed => write!(f, "Mixed"),
        }
    }
}

impl FromStr for OperationType {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(selector) = s.parse::<i64>() {
            return OperationType::from_selector(selector)
                .ok_or(QuizError::InvalidOperation(selector));
        }
        match s.to_lowercase().as_str() {
            "addition" | "add" | "+" => Ok(OperationType::Addition),
            "subtraction" | "sub" | "-" => Ok(OperationType::Subtraction),
            "multiplication" | "mul" | "*" => Ok(OperationType::Multiplication),
            "division" | "div" | "/" => Ok(OperationType::Division),
            "mixed" | "any" => Ok(OperationType::Mixed),
            other => Err(QuizError::UnknownName {
                kind: "operation",
                value: other.to_string(),
            }),
        }
    }
}
