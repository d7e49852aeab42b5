//! Question generation.

use crate::model::{OperationType, QuestionLevel};
use crate::question::Question;
use crate::random::RandomSource;

/// Draws questions from a random source.
///
/// Each call resolves `Mixed` selections first (level, then operation), then
/// draws both operands independently from the resolved level's range.
pub struct QuestionGenerator<R> {
    rng: R,
}

impl<R: RandomSource> QuestionGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, operation: OperationType, level: QuestionLevel) -> Question {
        let level = level.resolve(&mut self.rng);
        let operation = operation.resolve(&mut self.rng);

        let range = level.operand_range();
        let number1 = self.rng.next_in_range(range.start, range.end);
        let number2 = self.rng.next_in_range(range.start, range.end);

        let question = Question::new(number1, number2, operation, level);
        tracing::debug!(
            number1,
            number2,
            %operation,
            %level,
            answer = question.correct_answer(),
            "generated question"
        );
        question
    }

    /// Generate exactly `count` questions, each resolving `Mixed` on its own.
    pub fn generate_batch(
        &mut self,
        count: usize,
        operation: OperationType,
        level: QuestionLevel,
    ) -> Vec<Question> {
        (0..count).map(|_| self.generate(operation, level)).collect()
    }
}
