use brainquest_engine::{MemoryResult, SafariResult, ScoringConfig, Session};
use wasm_bindgen::prelude::*;

use crate::{engine_error, to_js};

/// Screening session handle owned by the page; views call into it.
#[wasm_bindgen]
pub struct GameSession {
    inner: Session,
}

#[wasm_bindgen]
impl GameSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Session::new(),
        }
    }

    /// Session with scoring parameters parsed from JSON; missing fields keep defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<GameSession, JsValue> {
        let config = ScoringConfig::from_json(json).map_err(engine_error)?;
        Ok(Self {
            inner: Session::with_config(config),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn age(&self) -> i32 {
        self.inner.age()
    }

    #[wasm_bindgen(js_name = setAge)]
    pub fn set_age(&mut self, age: i32) {
        self.inner.set_age(age);
    }

    #[wasm_bindgen(getter, js_name = playerName)]
    pub fn player_name(&self) -> String {
        self.inner.player_name().to_string()
    }

    #[wasm_bindgen(js_name = setPlayerName)]
    pub fn set_player_name(&mut self, name: String) {
        self.inner.set_player_name(name);
    }

    #[wasm_bindgen(getter, js_name = displayName)]
    pub fn display_name(&self) -> String {
        self.inner.display_name().to_string()
    }

    /// Store a `{ maxLevel, totalCorrect, totalAttempts }` record; throws if malformed.
    #[wasm_bindgen(js_name = recordMemoryResult)]
    pub fn record_memory_result(&mut self, result: JsValue) -> Result<(), JsValue> {
        let result: MemoryResult = serde_wasm_bindgen::from_value(result)?;
        self.inner
            .try_record_memory_result(result)
            .map_err(engine_error)
    }

    /// Store a safari record; throws if its counts are inconsistent.
    #[wasm_bindgen(js_name = recordSafariResult)]
    pub fn record_safari_result(&mut self, result: JsValue) -> Result<(), JsValue> {
        let result: SafariResult = serde_wasm_bindgen::from_value(result)?;
        self.inner
            .try_record_safari_result(result)
            .map_err(engine_error)
    }

    /// Assessment object, or `null` until both games are done
    #[wasm_bindgen(js_name = computeAssessment)]
    pub fn compute_assessment(&mut self) -> Result<JsValue, JsValue> {
        match self.inner.compute_assessment() {
            Some(assessment) => to_js(assessment),
            None => Ok(JsValue::NULL),
        }
    }

    /// Cached assessment without computing, or `null`
    pub fn assessment(&self) -> Result<JsValue, JsValue> {
        match self.inner.assessment() {
            Some(assessment) => to_js(assessment),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(getter, js_name = memoryCompleted)]
    pub fn memory_completed(&self) -> bool {
        self.inner.memory_completed()
    }

    #[wasm_bindgen(getter, js_name = safariCompleted)]
    pub fn safari_completed(&self) -> bool {
        self.inner.safari_completed()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.snapshot())
    }

    /// Norm band for the current age
    pub fn norm(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.norm())
    }

    #[wasm_bindgen(js_name = technicalSummary)]
    pub fn technical_summary(&self) -> Option<String> {
        self.inner.technical_summary()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
