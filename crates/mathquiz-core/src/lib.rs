//! mathquiz-core — question generation, scoring, and the interactive loop.
//!
//! This crate defines the quiz data model, the random source abstraction,
//! the question generator, and the console session that drives a game.

pub mod config;
pub mod console;
pub mod error;
pub mod generator;
pub mod model;
pub mod question;
pub mod quiz;
pub mod random;
pub mod report;
pub mod session;

pub use error::QuizError;
