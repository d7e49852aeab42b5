//! Random number sources.
//!
//! The generator only needs uniform integers in a half-open range, so the
//! trait stays that small. Production play uses an entropy-seeded `StdRng`;
//! `--seed` swaps in a seeded one, and tests script exact draws.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Return an integer in `[from, to)`. Callers guarantee `from < to`.
    fn next_in_range(&mut self, from: i64, to: i64) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, from: i64, to: i64) -> i64 {
        (**self).next_in_range(from, to)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_in_range(&mut self, from: i64, to: i64) -> i64 {
        (**self).next_in_range(from, to)
    }
}

/// System randomness from an entropy-seeded RNG.
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn next_in_range(&mut self, from: i64, to: i64) -> i64 {
        self.rng.gen_range(from..to)
    }
}

/// Deterministic randomness for reproducible quizzes.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, from: i64, to: i64) -> i64 {
        self.rng.gen_range(from..to)
    }
}

/// Replays a fixed sequence of draws.
///
/// Values outside the requested range, or draws past the end of the script,
/// yield the lower bound and log a warning.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<i64>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, from: i64, to: i64) -> i64 {
        match self.values.pop_front() {
            Some(value) if (from..to).contains(&value) => value,
            Some(value) => {
                tracing::warn!("scripted value {value} outside [{from}, {to}), using {from}");
                from
            }
            None => {
                tracing::warn!("random script exhausted, using {from}");
                from
            }
        }
    }
}
