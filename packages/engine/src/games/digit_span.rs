//! Memory Challenge bookkeeping
//!
//! Digit-span rounds: show `level` digits, let the player type them back.
//! A correct answer moves up one level, a wrong one costs a life. Display
//! pacing (countdown, one digit per second, feedback delay) belongs to the UI.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::GameError;
use crate::types::MemoryResult;

/// Digits shown in the first round
pub const START_LEVEL: u32 = 2;

pub const STARTING_LIVES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptOutcome {
    pub correct: bool,
    /// Level of the next round
    pub level: u32,
    pub lives: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct DigitSpanTracker {
    rng: ChaCha8Rng,
    level: u32,
    max_level: u32,
    lives: u32,
    total_correct: u32,
    total_attempts: u32,
    pending: Option<Vec<u8>>,
}

impl DigitSpanTracker {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            level: START_LEVEL,
            max_level: 0,
            lives: STARTING_LIVES,
            total_correct: 0,
            total_attempts: 0,
            pending: None,
        }
    }

    /// Start over with fresh lives and counters; the RNG stream continues.
    pub fn restart(&mut self) {
        self.level = START_LEVEL;
        self.max_level = 0;
        self.lives = STARTING_LIVES;
        self.total_correct = 0;
        self.total_attempts = 0;
        self.pending = None;
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn is_over(&self) -> bool {
        self.lives == 0
    }

    pub fn pending_sequence(&self) -> Option<&[u8]> {
        self.pending.as_deref()
    }

    /// Draw the next `level` digits (1..=9) for the player to memorize
    pub fn next_sequence(&mut self) -> Result<&[u8], GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.pending.is_some() {
            return Err(GameError::SequencePending);
        }
        let digits: Vec<u8> = (0..self.level).map(|_| self.rng.gen_range(1..=9)).collect();
        debug!(level = self.level, "digit sequence drawn");
        Ok(self.pending.insert(digits).as_slice())
    }

    /// Check the typed answer against the pending sequence
    pub fn submit(&mut self, answer: &str) -> Result<AttemptOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let sequence = self.pending.take().ok_or(GameError::NoPendingSequence)?;
        let expected: String = sequence.iter().map(|&d| char::from(b'0' + d)).collect();
        let correct = answer == expected;

        self.total_attempts += 1;
        if correct {
            self.total_correct += 1;
            self.max_level = self.max_level.max(self.level);
            self.level += 1;
        } else {
            self.lives = self.lives.saturating_sub(1);
        }

        debug!(
            correct,
            level = self.level,
            lives = self.lives,
            "digit span attempt"
        );

        Ok(AttemptOutcome {
            correct,
            level: self.level,
            lives: self.lives,
            game_over: self.is_over(),
        })
    }

    /// Result for the session. The reported span is at least `level - 1`, so a
    /// player who never answers correctly is still credited with one digit.
    pub fn finish(&self) -> MemoryResult {
        MemoryResult {
            max_level: self.max_level.max(self.level.saturating_sub(1)),
            total_correct: self.total_correct,
            total_attempts: self.total_attempts,
        }
    }
}
