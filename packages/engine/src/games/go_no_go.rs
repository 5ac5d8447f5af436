//! Animal Safari bookkeeping
//!
//! Go/no-go: animals are targets to click, fruits are distractors to ignore.
//! Each stimulus is shown for a fixed window. The UI owns the clock and the
//! timers; this tracker scores clicks and window expiries.
//!
//! Every window carries a token. A timer callback passes its token back to
//! `expire`, and tokens from a closed window or a previous run are ignored, so
//! a late timer cannot touch the counts once the game has moved on.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::GameError;
use crate::types::SafariResult;

pub const TOTAL_STIMULI: usize = 20;

/// How long each stimulus stays on screen (ms)
pub const STIMULUS_DURATION_MS: u64 = 2000;

/// Share of stimuli that are animals
pub const TARGET_PROBABILITY: f64 = 0.65;

pub const ANIMALS: [&str; 10] = ["🐶", "🐱", "🐰", "🦁", "🐸", "🐼", "🐵", "🐻", "🦊", "🐯"];
pub const FRUITS: [&str; 10] = ["🍎", "🍊", "🍇", "🍓", "🍋", "🍉", "🍌", "🍑", "🥝", "🍒"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StimulusKind {
    /// Animal, click it
    Target,
    /// Fruit, leave it
    Distractor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stimulus {
    pub id: u32,
    pub kind: StimulusKind,
    pub emoji: &'static str,
}

impl Stimulus {
    pub fn is_target(&self) -> bool {
        self.kind == StimulusKind::Target
    }
}

/// Random stimulus sequence, ~65% targets
pub fn generate_stimuli<R: Rng>(rng: &mut R, count: usize) -> Vec<Stimulus> {
    (0..count)
        .map(|i| {
            let (kind, pool) = if rng.gen_bool(TARGET_PROBABILITY) {
                (StimulusKind::Target, &ANIMALS)
            } else {
                (StimulusKind::Distractor, &FRUITS)
            };
            Stimulus {
                id: i as u32,
                kind,
                emoji: pool[rng.gen_range(0..pool.len())],
            }
        })
        .collect()
}

/// Handle for an open stimulus window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StimulusWindow {
    pub index: u32,
    pub token: u64,
    pub stimulus: Stimulus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResponseOutcome {
    Hit {
        #[serde(rename = "reactionTime")]
        reaction_time: u32,
    },
    FalseAlarm,
    /// No open window, or the window was already clicked
    Ignored,
}

#[derive(Debug, Clone, Copy)]
struct OpenWindow {
    index: usize,
    token: u64,
    shown_at_ms: u64,
    responded: bool,
}

#[derive(Debug, Clone)]
pub struct GoNoGoTracker {
    rng: ChaCha8Rng,
    stimuli: Vec<Stimulus>,
    /// False for caller-supplied sequences, which survive `restart`
    generated: bool,
    /// Index of the next stimulus to present
    cursor: usize,
    window: Option<OpenWindow>,
    /// Never reset, so tokens stay unique across restarts
    next_token: u64,
    hits: u32,
    misses: u32,
    false_alarms: u32,
    reaction_times: Vec<u32>,
}

impl GoNoGoTracker {
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let stimuli = generate_stimuli(&mut rng, TOTAL_STIMULI);
        Self::from_parts(rng, stimuli, true)
    }

    /// Tracker over a caller-supplied sequence
    pub fn with_stimuli(stimuli: Vec<Stimulus>) -> Self {
        Self::from_parts(ChaCha8Rng::seed_from_u64(0), stimuli, false)
    }

    fn from_parts(rng: ChaCha8Rng, stimuli: Vec<Stimulus>, generated: bool) -> Self {
        Self {
            rng,
            stimuli,
            generated,
            cursor: 0,
            window: None,
            next_token: 0,
            hits: 0,
            misses: 0,
            false_alarms: 0,
            reaction_times: Vec::new(),
        }
    }

    /// Zeroed counts, and a fresh sequence unless the caller supplied one.
    /// Tokens handed out before the restart become stale.
    pub fn restart(&mut self) {
        if self.generated {
            self.stimuli = generate_stimuli(&mut self.rng, TOTAL_STIMULI);
        }
        self.cursor = 0;
        self.window = None;
        self.hits = 0;
        self.misses = 0;
        self.false_alarms = 0;
        self.reaction_times.clear();
        debug!(next_token = self.next_token, "safari restarted");
    }

    pub fn stimuli(&self) -> &[Stimulus] {
        &self.stimuli
    }

    pub fn total_targets(&self) -> u32 {
        self.stimuli.iter().filter(|s| s.is_target()).count() as u32
    }

    pub fn total_distractors(&self) -> u32 {
        self.stimuli.len() as u32 - self.total_targets()
    }

    /// Stimuli presented so far, including an open one
    pub fn presented(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<StimulusWindow> {
        self.window.map(|w| StimulusWindow {
            index: w.index as u32,
            token: w.token,
            stimulus: self.stimuli[w.index],
        })
    }

    pub fn is_finished(&self) -> bool {
        self.window.is_none() && self.cursor >= self.stimuli.len()
    }

    /// Open the next stimulus window. `Ok(None)` once the sequence is exhausted.
    pub fn present_next(&mut self, now_ms: u64) -> Result<Option<StimulusWindow>, GameError> {
        if self.window.is_some() {
            return Err(GameError::WindowOpen);
        }
        if self.cursor >= self.stimuli.len() {
            return Ok(None);
        }

        let window = OpenWindow {
            index: self.cursor,
            token: self.next_token,
            shown_at_ms: now_ms,
            responded: false,
        };
        self.next_token += 1;
        self.cursor += 1;
        self.window = Some(window);
        Ok(self.current())
    }

    /// Register a click on the open stimulus. Only the first click counts.
    pub fn respond(&mut self, now_ms: u64) -> ResponseOutcome {
        let Some(window) = self.window.as_mut() else {
            return ResponseOutcome::Ignored;
        };
        if window.responded {
            return ResponseOutcome::Ignored;
        }
        window.responded = true;

        if self.stimuli[window.index].is_target() {
            let elapsed = now_ms.saturating_sub(window.shown_at_ms);
            let reaction_time = u32::try_from(elapsed).unwrap_or(u32::MAX);
            self.hits += 1;
            self.reaction_times.push(reaction_time);
            debug!(index = window.index, reaction_time, "target hit");
            ResponseOutcome::Hit { reaction_time }
        } else {
            self.false_alarms += 1;
            debug!(index = window.index, "false alarm");
            ResponseOutcome::FalseAlarm
        }
    }

    /// Close the window identified by `token`; an unclicked target is a miss.
    /// Returns false for stale tokens, which change nothing.
    pub fn expire(&mut self, token: u64) -> bool {
        let window = match self.window {
            Some(window) if window.token == token => window,
            _ => {
                debug!(token, "stale stimulus timer ignored");
                return false;
            }
        };
        if !window.responded && self.stimuli[window.index].is_target() {
            self.misses += 1;
        }
        self.window = None;
        true
    }

    /// Drop the open window without scoring it, e.g. when the page leaves the
    /// playing phase. Its token goes stale. An unclicked stimulus is shown
    /// again by the next `present_next`. Returns false when no window was open.
    pub fn cancel(&mut self) -> bool {
        let Some(window) = self.window.take() else {
            return false;
        };
        if !window.responded {
            self.cursor = window.index;
        }
        debug!(token = window.token, index = window.index, "stimulus window cancelled");
        true
    }

    pub fn finish(&self) -> Result<SafariResult, GameError> {
        if !self.is_finished() {
            return Err(GameError::NotFinished);
        }
        Ok(SafariResult {
            hits: self.hits,
            misses: self.misses,
            false_alarms: self.false_alarms,
            total_targets: self.total_targets(),
            total_distractors: self.total_distractors(),
            reaction_times: self.reaction_times.clone(),
        })
    }
}
