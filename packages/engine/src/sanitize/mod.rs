//! Record Validation
//!
//! Structural checks for result records arriving from outside the crate.
//!
//! Functions:
//! - Memory result invariants
//! - Safari result invariants
//!
//! Scoring never depends on these checks; they guard the browser boundary
//! where records arrive as untyped JS objects.

use crate::error::ValidationError;
use crate::types::{MemoryResult, SafariResult};

/// Memory record: correct answers cannot exceed attempts
pub fn validate_memory_result(result: &MemoryResult) -> Result<(), ValidationError> {
    if result.total_correct > result.total_attempts {
        return Err(ValidationError::CorrectExceedsAttempts {
            correct: result.total_correct,
            attempts: result.total_attempts,
        });
    }
    Ok(())
}

/// Safari record: hits + misses = targets, one reaction time per hit,
/// false alarms bounded by distractors
pub fn validate_safari_result(result: &SafariResult) -> Result<(), ValidationError> {
    let hits_and_misses = result.hits as u64 + result.misses as u64;
    if hits_and_misses != result.total_targets as u64 {
        return Err(ValidationError::TargetCountMismatch {
            hits: result.hits,
            misses: result.misses,
            targets: result.total_targets,
        });
    }

    if result.reaction_times.len() != result.hits as usize {
        return Err(ValidationError::ReactionTimeCountMismatch {
            times: result.reaction_times.len(),
            hits: result.hits,
        });
    }

    if result.false_alarms > result.total_distractors {
        return Err(ValidationError::FalseAlarmsExceedDistractors {
            false_alarms: result.false_alarms,
            distractors: result.total_distractors,
        });
    }

    Ok(())
}

impl MemoryResult {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_memory_result(self)
    }
}

impl SafariResult {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_safari_result(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn safari(hits: u32, misses: u32, false_alarms: u32, targets: u32, distractors: u32) -> SafariResult {
        SafariResult {
            hits,
            misses,
            false_alarms,
            total_targets: targets,
            total_distractors: distractors,
            reaction_times: vec![600; hits as usize],
        }
    }

    // ==================== validate_memory_result ====================

    #[test]
    fn test_memory_result_valid() {
        let result = MemoryResult { max_level: 4, total_correct: 3, total_attempts: 6 };
        assert!(result.validate().is_ok());
        assert!(MemoryResult::default().validate().is_ok());
    }

    #[test]
    fn test_memory_result_correct_exceeds_attempts() {
        let result = MemoryResult { max_level: 4, total_correct: 7, total_attempts: 6 };
        assert_eq!(
            result.validate(),
            Err(ValidationError::CorrectExceedsAttempts { correct: 7, attempts: 6 })
        );
    }

    // ==================== validate_safari_result ====================

    #[test]
    fn test_safari_result_valid() {
        assert!(safari(13, 0, 1, 13, 7).validate().is_ok());
        assert!(safari(0, 0, 0, 0, 0).validate().is_ok());
    }

    #[test]
    fn test_safari_result_target_mismatch() {
        let err = safari(10, 1, 0, 13, 7).validate().unwrap_err();
        assert!(matches!(err, ValidationError::TargetCountMismatch { targets: 13, .. }));
    }

    #[test]
    fn test_safari_result_reaction_time_mismatch() {
        let mut result = safari(3, 0, 0, 3, 2);
        result.reaction_times.pop();
        assert_eq!(
            result.validate(),
            Err(ValidationError::ReactionTimeCountMismatch { times: 2, hits: 3 })
        );
    }

    #[test]
    fn test_safari_result_false_alarm_overflow() {
        let err = safari(3, 0, 4, 3, 2).validate().unwrap_err();
        assert!(matches!(err, ValidationError::FalseAlarmsExceedDistractors { .. }));
    }

    #[test]
    fn test_error_message_names_fields() {
        let err = safari(1, 1, 0, 3, 0).validate().unwrap_err();
        assert_eq!(err.to_string(), "hits (1) + misses (1) != totalTargets (3)");
    }
}
