//! Scoring Parameters
//!
//! Weights and thresholds used by the assessment. The defaults are the values
//! the norm table was calibrated against.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttentionWeights {
    pub accuracy: f64,
    pub reaction_time: f64,
}

impl Default for AttentionWeights {
    fn default() -> Self {
        Self {
            accuracy: 0.6,
            reaction_time: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusThresholds {
    /// Overall score at or above which the status is excellent
    pub excellent: f64,
    /// Overall score at or above which the status is good
    pub good: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            excellent: 80.0,
            good: 55.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    pub attention_weights: AttentionWeights,
    pub status_thresholds: StatusThresholds,
    /// Scores below this get the three improvement tips
    pub tip_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            attention_weights: AttentionWeights::default(),
            status_thresholds: StatusThresholds::default(),
            tip_threshold: 70,
        }
    }
}

impl ScoringConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.attention_weights;
        for (name, value) in [("accuracy", w.accuracy), ("reactionTime", w.reaction_time)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "attention weight {name} must be finite and non-negative, got {value}"
                )));
            }
        }
        let sum = w.accuracy + w.reaction_time;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::Invalid(format!(
                "attention weights must sum to 1, got {sum}"
            )));
        }

        let t = &self.status_thresholds;
        for (name, value) in [("excellent", t.excellent), ("good", t.good)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "status threshold {name} must be within 0..=100, got {value}"
                )));
            }
        }
        if t.good > t.excellent {
            return Err(ConfigError::Invalid(format!(
                "good threshold {} is above excellent threshold {}",
                t.good, t.excellent
            )));
        }

        if self.tip_threshold > 100 {
            return Err(ConfigError::Invalid(format!(
                "tip threshold must be within 0..=100, got {}",
                self.tip_threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ScoringConfig::default();
        assert_eq!(config.attention_weights.accuracy, 0.6);
        assert_eq!(config.attention_weights.reaction_time, 0.4);
        assert_eq!(config.status_thresholds.excellent, 80.0);
        assert_eq!(config.status_thresholds.good, 55.0);
        assert_eq!(config.tip_threshold, 70);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ScoringConfig::from_json(r#"{"tipThreshold": 60}"#).unwrap();
        assert_eq!(config.tip_threshold, 60);
        assert_eq!(config.attention_weights, AttentionWeights::default());

        let config =
            ScoringConfig::from_json(r#"{"statusThresholds": {"good": 50}}"#).unwrap();
        assert_eq!(config.status_thresholds.good, 50.0);
        assert_eq!(config.status_thresholds.excellent, 80.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = ScoringConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(ScoringConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_weights_not_summing_to_one() {
        let err = ScoringConfig::from_json(
            r#"{"attentionWeights": {"accuracy": 0.7, "reactionTime": 0.4}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let err = ScoringConfig::from_json(
            r#"{"attentionWeights": {"accuracy": 1.5, "reactionTime": -0.5}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let err = ScoringConfig::from_json(
            r#"{"statusThresholds": {"excellent": 50, "good": 60}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = ScoringConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
