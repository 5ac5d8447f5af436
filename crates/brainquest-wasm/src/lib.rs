mod games;
mod norms;
mod session;

pub use games::*;
pub use norms::*;
pub use session::*;

use brainquest_engine::EngineError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    tracing_wasm::set_as_global_default();
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Seed for the game RNGs, drawn from `Math.random`
pub(crate) fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    // Plain objects rather than ES Maps so the UI can read fields directly.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(JsValue::from)
}

pub(crate) fn engine_error(err: impl Into<EngineError>) -> JsValue {
    let err = err.into();
    tracing::warn!(error = %err, "rejected call from UI");
    JsError::new(&err.to_string()).into()
}
