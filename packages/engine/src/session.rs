//! Session State
//!
//! One screening session: the player's age and name, the two game results and
//! the assessment derived from them. The session is an owned value created at
//! setup and dropped when the player leaves; views borrow it.

use serde::Serialize;
use tracing::{debug, info};

use crate::assessment::assess_with;
use crate::config::ScoringConfig;
use crate::error::ValidationError;
use crate::norms::{norm_for_age, AgeNorm};
use crate::types::{Assessment, MemoryResult, SafariResult, DEFAULT_AGE, DEFAULT_PLAYER_NAME};

/// Everything the presentation layer reads, in one serializable value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub age: i32,
    pub player_name: String,
    pub memory_result: Option<MemoryResult>,
    pub safari_result: Option<SafariResult>,
    pub assessment: Option<Assessment>,
    pub memory_completed: bool,
    pub safari_completed: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    age: i32,
    player_name: String,
    memory_result: Option<MemoryResult>,
    safari_result: Option<SafariResult>,
    /// Cached output of `assess_with`; cleared whenever its inputs change
    assessment: Option<Assessment>,
    config: ScoringConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            age: DEFAULT_AGE,
            player_name: String::new(),
            memory_result: None,
            safari_result: None,
            assessment: None,
            config,
        }
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// No range check: the setup slider only offers 6..=18, and ages outside
    /// the table score against the youngest band.
    pub fn set_age(&mut self, age: i32) {
        if age != self.age && self.assessment.take().is_some() {
            debug!(from = self.age, to = age, "age changed, assessment invalidated");
        }
        self.age = age;
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
    }

    /// Name to greet the player with; blank names become "Player"
    pub fn display_name(&self) -> &str {
        let trimmed = self.player_name.trim();
        if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME
        } else {
            trimmed
        }
    }

    pub fn norm(&self) -> &'static AgeNorm {
        norm_for_age(self.age)
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn memory_result(&self) -> Option<&MemoryResult> {
        self.memory_result.as_ref()
    }

    pub fn safari_result(&self) -> Option<&SafariResult> {
        self.safari_result.as_ref()
    }

    /// Store the digit-span result. Does not compute the assessment.
    pub fn record_memory_result(&mut self, result: MemoryResult) {
        debug!(max_level = result.max_level, "memory result recorded");
        self.memory_result = Some(result);
        self.assessment = None;
    }

    /// Store the go/no-go result. Does not compute the assessment.
    pub fn record_safari_result(&mut self, result: SafariResult) {
        debug!(hits = result.hits, false_alarms = result.false_alarms, "safari result recorded");
        self.safari_result = Some(result);
        self.assessment = None;
    }

    pub fn try_record_memory_result(&mut self, result: MemoryResult) -> Result<(), ValidationError> {
        result.validate()?;
        self.record_memory_result(result);
        Ok(())
    }

    pub fn try_record_safari_result(&mut self, result: SafariResult) -> Result<(), ValidationError> {
        result.validate()?;
        self.record_safari_result(result);
        Ok(())
    }

    pub fn memory_completed(&self) -> bool {
        self.memory_result.is_some()
    }

    pub fn safari_completed(&self) -> bool {
        self.safari_result.is_some()
    }

    /// Cached assessment, if one has been computed. Never computes.
    pub fn assessment(&self) -> Option<&Assessment> {
        self.assessment.as_ref()
    }

    /// Compute the assessment once both games are done, then keep returning the
    /// cached value until a result, the age, or `reset` invalidates it.
    ///
    /// Returns `None` while either game is incomplete.
    pub fn compute_assessment(&mut self) -> Option<&Assessment> {
        if self.assessment.is_none() {
            let (memory, safari) = match (&self.memory_result, &self.safari_result) {
                (Some(memory), Some(safari)) => (memory, safari),
                _ => {
                    debug!(
                        memory_completed = self.memory_completed(),
                        safari_completed = self.safari_completed(),
                        "assessment not ready"
                    );
                    return None;
                }
            };
            self.assessment = Some(assess_with(&self.config, self.age, memory, safari));
        }
        self.assessment.as_ref()
    }

    /// Clear both results and the assessment. Age and name survive.
    pub fn reset(&mut self) {
        self.memory_result = None;
        self.safari_result = None;
        self.assessment = None;
        info!(age = self.age, "session reset");
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            age: self.age,
            player_name: self.player_name.clone(),
            memory_result: self.memory_result.clone(),
            safari_result: self.safari_result.clone(),
            assessment: self.assessment.clone(),
            memory_completed: self.memory_completed(),
            safari_completed: self.safari_completed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn memory() -> MemoryResult {
        MemoryResult { max_level: 5, total_correct: 4, total_attempts: 5 }
    }

    fn safari() -> SafariResult {
        SafariResult {
            hits: 13,
            misses: 0,
            false_alarms: 1,
            total_targets: 13,
            total_distractors: 7,
            reaction_times: vec![600; 13],
        }
    }

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new();
        assert_eq!(session.age(), 10);
        assert_eq!(session.player_name(), "");
        assert_eq!(session.display_name(), "Player");
        assert!(!session.memory_completed());
        assert!(!session.safari_completed());
        assert!(session.assessment().is_none());
    }

    #[test]
    fn test_compute_requires_both_results() {
        let mut session = Session::new();
        assert!(session.compute_assessment().is_none());

        session.record_memory_result(memory());
        assert!(session.memory_completed());
        assert!(session.compute_assessment().is_none());

        session.record_safari_result(safari());
        assert!(session.safari_completed());
        let assessment = session.compute_assessment().expect("both results recorded");
        assert_eq!(assessment.status, Status::Excellent);
    }

    #[test]
    fn test_recording_does_not_compute() {
        let mut session = Session::new();
        session.record_memory_result(memory());
        session.record_safari_result(safari());
        assert!(session.assessment().is_none());
    }

    #[test]
    fn test_compute_is_cached() {
        let mut session = Session::new();
        session.record_memory_result(memory());
        session.record_safari_result(safari());

        let first = session.compute_assessment().map(|a| a as *const Assessment);
        let first_value = session.assessment().cloned();
        let second = session.compute_assessment().map(|a| a as *const Assessment);
        assert_eq!(first, second);
        assert_eq!(session.assessment().cloned(), first_value);
    }

    #[test]
    fn test_new_result_invalidates_cache() {
        let mut session = Session::new();
        session.record_memory_result(memory());
        session.record_safari_result(safari());
        assert_eq!(session.compute_assessment().map(|a| a.memory_score), Some(100));

        session.record_memory_result(MemoryResult { max_level: 1, total_correct: 0, total_attempts: 3 });
        assert!(session.assessment().is_none());
        assert_eq!(session.compute_assessment().map(|a| a.memory_score), Some(20));
    }

    #[test]
    fn test_age_change_invalidates_cache() {
        let mut session = Session::new();
        session.record_memory_result(memory());
        session.record_safari_result(safari());
        session.compute_assessment();

        session.set_age(10);
        assert!(session.assessment().is_some());

        session.set_age(16);
        assert!(session.assessment().is_none());
        assert_eq!(session.compute_assessment().map(|a| a.memory_score), Some(71));
    }

    #[test]
    fn test_reset_keeps_age_and_name() {
        let mut session = Session::new();
        session.set_age(8);
        session.set_player_name("Mia");
        session.record_memory_result(memory());
        session.record_safari_result(safari());
        session.compute_assessment();

        session.reset();
        assert!(!session.memory_completed());
        assert!(!session.safari_completed());
        assert!(session.assessment().is_none());
        assert_eq!(session.age(), 8);
        assert_eq!(session.player_name(), "Mia");
    }

    #[test]
    fn test_set_age_accepts_any_value() {
        let mut session = Session::new();
        session.set_age(-3);
        assert_eq!(session.age(), -3);
        assert_eq!(session.norm().label, "Building Blocks");
    }

    #[test]
    fn test_display_name_trims_whitespace() {
        let mut session = Session::new();
        session.set_player_name("   ");
        assert_eq!(session.display_name(), "Player");
        session.set_player_name("  Leo ");
        assert_eq!(session.display_name(), "Leo");
    }

    #[test]
    fn test_try_record_rejects_malformed() {
        let mut session = Session::new();
        let mut bad = safari();
        bad.misses = 2;
        assert!(session.try_record_safari_result(bad).is_err());
        assert!(!session.safari_completed());

        let bad_memory = MemoryResult { max_level: 2, total_correct: 5, total_attempts: 1 };
        assert!(session.try_record_memory_result(bad_memory).is_err());
        assert!(!session.memory_completed());

        assert!(session.try_record_safari_result(safari()).is_ok());
        assert!(session.safari_completed());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = Session::new();
        session.set_player_name("Ava");
        session.record_memory_result(memory());

        let snapshot = session.snapshot();
        assert_eq!(snapshot.player_name, "Ava");
        assert!(snapshot.memory_completed);
        assert!(!snapshot.safari_completed);
        assert!(snapshot.assessment.is_none());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["memoryResult"]["maxLevel"], 5);
        assert!(json["safariResult"].is_null());
        assert_eq!(json["memoryCompleted"], true);
    }
}
