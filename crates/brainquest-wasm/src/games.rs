use brainquest_engine::games::go_no_go::STIMULUS_DURATION_MS;
use brainquest_engine::{DigitSpanTracker, GoNoGoTracker};
use wasm_bindgen::prelude::*;

use crate::{engine_error, random_seed, to_js};

/// Memory Challenge rules; the page drives countdowns and digit display.
#[wasm_bindgen]
pub struct DigitSpanGame {
    tracker: DigitSpanTracker,
}

#[wasm_bindgen]
impl DigitSpanGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>) -> Self {
        let seed = seed.map(|s| s as u64).unwrap_or_else(random_seed);
        Self {
            tracker: DigitSpanTracker::with_seed(seed),
        }
    }

    pub fn restart(&mut self) {
        self.tracker.restart();
    }

    #[wasm_bindgen(getter)]
    pub fn level(&self) -> u32 {
        self.tracker.level()
    }

    #[wasm_bindgen(getter)]
    pub fn lives(&self) -> u32 {
        self.tracker.lives()
    }

    #[wasm_bindgen(getter, js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.tracker.is_over()
    }

    /// Digits to show this round
    #[wasm_bindgen(js_name = nextSequence)]
    pub fn next_sequence(&mut self) -> Result<Vec<u8>, JsValue> {
        self.tracker
            .next_sequence()
            .map(|digits| digits.to_vec())
            .map_err(engine_error)
    }

    /// `{ correct, level, lives, gameOver }`
    pub fn submit(&mut self, answer: &str) -> Result<JsValue, JsValue> {
        let outcome = self.tracker.submit(answer).map_err(engine_error)?;
        to_js(&outcome)
    }

    /// `MemoryResult` to hand to `GameSession.recordMemoryResult`
    pub fn finish(&self) -> Result<JsValue, JsValue> {
        to_js(&self.tracker.finish())
    }
}

/// Animal Safari rules. Timestamps are `performance.now()`/`Date.now()` ms;
/// pass each window's token back from its timer so late timers are ignored.
#[wasm_bindgen]
pub struct SafariGame {
    tracker: GoNoGoTracker,
}

#[wasm_bindgen]
impl SafariGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>) -> Self {
        let seed = seed.map(|s| s as u64).unwrap_or_else(random_seed);
        Self {
            tracker: GoNoGoTracker::with_seed(seed),
        }
    }

    pub fn restart(&mut self) {
        self.tracker.restart();
    }

    /// Display window per stimulus (ms)
    #[wasm_bindgen(js_name = stimulusDurationMs)]
    pub fn stimulus_duration_ms() -> f64 {
        STIMULUS_DURATION_MS as f64
    }

    #[wasm_bindgen(getter, js_name = totalStimuli)]
    pub fn total_stimuli(&self) -> u32 {
        self.tracker.stimuli().len() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn presented(&self) -> u32 {
        self.tracker.presented() as u32
    }

    #[wasm_bindgen(getter, js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.tracker.is_finished()
    }

    /// `{ index, token, stimulus: { id, kind, emoji } }`, or `null` when done
    #[wasm_bindgen(js_name = presentNext)]
    pub fn present_next(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        match self.tracker.present_next(now_ms as u64).map_err(engine_error)? {
            Some(window) => to_js(&window),
            None => Ok(JsValue::NULL),
        }
    }

    /// `{ kind: "hit", reactionTime }`, `{ kind: "false-alarm" }` or `{ kind: "ignored" }`
    pub fn respond(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        to_js(&self.tracker.respond(now_ms as u64))
    }

    /// False when the token belongs to a window that already closed
    pub fn expire(&mut self, token: f64) -> bool {
        self.tracker.expire(token as u64)
    }

    /// Drop the open window on phase change or unmount; its token goes stale
    pub fn cancel(&mut self) -> bool {
        self.tracker.cancel()
    }

    /// `SafariResult` to hand to `GameSession.recordSafariResult`
    pub fn finish(&self) -> Result<JsValue, JsValue> {
        let result = self.tracker.finish().map_err(engine_error)?;
        to_js(&result)
    }
}
