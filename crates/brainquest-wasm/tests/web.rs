//! Web tests for brainquest-wasm
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use brainquest_wasm::*;

fn record(session: &mut GameSession, memory: &str, safari: &str) {
    let memory = js_sys::JSON::parse(memory).expect("valid json");
    let safari = js_sys::JSON::parse(safari).expect("valid json");
    session.record_memory_result(memory).expect("memory accepted");
    session.record_safari_result(safari).expect("safari accepted");
}

fn field(value: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(name)).expect("field present")
}

// ============================================================================
// GameSession
// ============================================================================

#[wasm_bindgen_test]
fn test_session_defaults() {
    let session = GameSession::new();
    assert_eq!(session.age(), 10);
    assert_eq!(session.player_name(), "");
    assert_eq!(session.display_name(), "Player");
    assert!(!session.memory_completed());
    assert!(!session.safari_completed());
}

#[wasm_bindgen_test]
fn test_assessment_null_until_both_games() {
    let mut session = GameSession::new();
    assert!(session.compute_assessment().unwrap().is_null());
}

#[wasm_bindgen_test]
fn test_scenario_excellent() {
    let mut session = GameSession::new();
    record(
        &mut session,
        r#"{"maxLevel":5,"totalCorrect":4,"totalAttempts":5}"#,
        r#"{"hits":13,"misses":0,"falseAlarms":1,"totalTargets":13,"totalDistractors":7,
            "reactionTimes":[600,600,600,600,600,600,600,600,600,600,600,600,600]}"#,
    );
    let assessment = session.compute_assessment().unwrap();
    assert_eq!(field(&assessment, "status").as_string().unwrap(), "excellent");
    assert_eq!(field(&assessment, "attentionScore").as_f64().unwrap(), 97.0);
    assert_eq!(field(&assessment, "accuracy").as_f64().unwrap(), 95.0);
    assert!(session.technical_summary().is_some());
}

#[wasm_bindgen_test]
fn test_malformed_safari_is_rejected() {
    let mut session = GameSession::new();
    let bad = js_sys::JSON::parse(
        r#"{"hits":3,"misses":0,"falseAlarms":0,"totalTargets":5,"totalDistractors":2,"reactionTimes":[1,2,3]}"#,
    )
    .unwrap();
    assert!(session.record_safari_result(bad).is_err());
    assert!(!session.safari_completed());
}

#[wasm_bindgen_test]
fn test_reset_keeps_age() {
    let mut session = GameSession::new();
    session.set_age(12);
    record(
        &mut session,
        r#"{"maxLevel":3,"totalCorrect":2,"totalAttempts":4}"#,
        r#"{"hits":0,"misses":0,"falseAlarms":0,"totalTargets":0,"totalDistractors":0,"reactionTimes":[]}"#,
    );
    session.reset();
    assert!(!session.memory_completed());
    assert!(session.assessment().unwrap().is_null());
    assert_eq!(session.age(), 12);
}

#[wasm_bindgen_test]
fn test_with_config_rejects_bad_weights() {
    assert!(GameSession::with_config(r#"{"attentionWeights":{"accuracy":2}}"#).is_err());
    assert!(GameSession::with_config(r#"{"tipThreshold":60}"#).is_ok());
}

// ============================================================================
// Norms
// ============================================================================

#[wasm_bindgen_test]
fn test_norm_for_age() {
    let norm = norm_for_age_js(7).unwrap();
    assert_eq!(field(&norm, "memorySpan").as_f64().unwrap(), 3.0);
    assert_eq!(field(&norm, "label").as_string().unwrap(), "Building Blocks");

    let fallback = norm_for_age_js(40).unwrap();
    assert_eq!(field(&fallback, "minAge").as_f64().unwrap(), 6.0);
}

// ============================================================================
// Games
// ============================================================================

#[wasm_bindgen_test]
fn test_digit_span_game_round() {
    let mut game = DigitSpanGame::new(Some(1.0));
    let digits = game.next_sequence().unwrap();
    assert_eq!(digits.len(), 2);
    let answer: String = digits.iter().map(|d| d.to_string()).collect();
    let outcome = game.submit(&answer).unwrap();
    assert_eq!(field(&outcome, "correct").as_bool(), Some(true));
    assert_eq!(game.level(), 3);
}

#[wasm_bindgen_test]
fn test_safari_game_stale_token() {
    let mut game = SafariGame::new(Some(5.0));
    let first = game.present_next(0.0).unwrap();
    let token = field(&first, "token").as_f64().unwrap();
    assert!(game.expire(token));
    game.present_next(2000.0).unwrap();
    assert!(!game.expire(token));
}

#[wasm_bindgen_test]
fn test_safari_game_cancel() {
    let mut game = SafariGame::new(Some(8.0));
    let first = game.present_next(0.0).unwrap();
    let token = field(&first, "token").as_f64().unwrap();
    assert!(game.cancel());
    assert!(!game.expire(token));
    assert_eq!(game.presented(), 0);
}
