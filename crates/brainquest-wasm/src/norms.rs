use brainquest_engine::{is_supported_age, norm_for_age, AGE_NORMS};
use wasm_bindgen::prelude::*;

use crate::to_js;

/// Norm band for `age`; ages outside 6..=18 get the youngest band
#[wasm_bindgen(js_name = normForAge)]
pub fn norm_for_age_js(age: i32) -> Result<JsValue, JsValue> {
    to_js(norm_for_age(age))
}

#[wasm_bindgen(js_name = ageNorms)]
pub fn age_norms() -> Result<JsValue, JsValue> {
    to_js(&AGE_NORMS[..])
}

#[wasm_bindgen(js_name = isSupportedAge)]
pub fn is_supported_age_js(age: i32) -> bool {
    is_supported_age(age)
}
