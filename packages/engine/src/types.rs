//! Common Types and Constants
//!
//! Result records produced by the two games and the assessment derived from them.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Age a fresh session starts with
pub const DEFAULT_AGE: i32 = 10;

/// Youngest age the setup slider offers
pub const MIN_SUPPORTED_AGE: i32 = 6;

/// Oldest age the setup slider offers
pub const MAX_SUPPORTED_AGE: i32 = 18;

/// Greeting name used when the player leaves the name blank
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Subject label used by the examiner report when the name is blank
pub const ANONYMOUS_SUBJECT: &str = "Anonymous";

/// Upper bound of every percentage score
pub const MAX_SCORE: u32 = 100;

// ==================== Game Results ====================

/// Outcome of one Memory Challenge (digit span) game
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryResult {
    /// Longest digit sequence reproduced correctly
    pub max_level: u32,
    /// Sequences reproduced correctly across all levels
    pub total_correct: u32,
    /// Sequences attempted across all levels
    pub total_attempts: u32,
}

/// Outcome of one Animal Safari (go/no-go) game
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafariResult {
    /// Animals clicked inside their display window
    pub hits: u32,
    /// Animals left unclicked until their window closed
    pub misses: u32,
    /// Fruits clicked (impulsivity indicator)
    pub false_alarms: u32,
    pub total_targets: u32,
    pub total_distractors: u32,
    /// One entry per hit, in hit order (ms)
    #[serde(default)]
    pub reaction_times: Vec<u32>,
}

impl SafariResult {
    /// Number of stimuli shown in the game
    pub fn total_stimuli(&self) -> u32 {
        self.total_targets.saturating_add(self.total_distractors)
    }
}

// ==================== Assessment ====================

/// Overall verdict of an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Excellent,
    Good,
    NeedsSupport,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Excellent => "excellent",
            Status::Good => "good",
            Status::NeedsSupport => "needs-support",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Status::Excellent => "Super Brain Champion",
            Status::Good => "Rising Star",
            Status::NeedsSupport => "Focus Power Explorer",
        }
    }

    pub fn badge_icon(&self) -> &'static str {
        match self {
            Status::Excellent => "🏆",
            Status::Good => "⭐",
            Status::NeedsSupport => "🌟",
        }
    }

    /// Encouragement shown to the child; positive for every status
    pub fn child_message(&self) -> &'static str {
        match self {
            Status::Excellent => "Awesome work! Your brain is super powerful! Keep being amazing!",
            Status::Good => "Great job! You're doing really well! Practice makes perfect!",
            Status::NeedsSupport => {
                "You did great trying! Every superhero trains their powers. Keep practicing!"
            }
        }
    }
}

/// Age-normalized verdict derived from both game results
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub badge: String,
    pub badge_icon: String,
    pub status: Status,
    pub memory_tips: Vec<String>,
    pub attention_tips: Vec<String>,
    /// Share of the age-expected span achieved [0, 100]
    pub memory_score: u32,
    /// Accuracy and speed blend [0, 100]
    pub attention_score: u32,
    /// Mean reaction time over hits (ms), 0 without hits
    pub avg_reaction_time: u32,
    /// Correct go/no-go decisions [0, 100]
    pub accuracy: u32,
    pub child_message: String,
}

impl Assessment {
    /// Unrounded mean of memory and attention scores
    pub fn overall_score(&self) -> f64 {
        (self.memory_score as f64 + self.attention_score as f64) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&Status::NeedsSupport).unwrap();
        assert_eq!(json, "\"needs-support\"");
        let parsed: Status = serde_json::from_str("\"excellent\"").unwrap();
        assert_eq!(parsed, Status::Excellent);
    }

    #[test]
    fn test_status_as_str_matches_serde() {
        for status in [Status::Excellent, Status::Good, Status::NeedsSupport] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_safari_result_uses_camel_case_fields() {
        let json = r#"{
            "hits": 2, "misses": 1, "falseAlarms": 0,
            "totalTargets": 3, "totalDistractors": 2,
            "reactionTimes": [500, 700]
        }"#;
        let result: SafariResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.false_alarms, 0);
        assert_eq!(result.reaction_times, vec![500, 700]);
        assert_eq!(result.total_stimuli(), 5);
    }

    #[test]
    fn test_missing_reaction_times_default_to_empty() {
        let json = r#"{"hits":0,"misses":0,"falseAlarms":0,"totalTargets":0,"totalDistractors":0}"#;
        let result: SafariResult = serde_json::from_str(json).unwrap();
        assert!(result.reaction_times.is_empty());
    }
}
