//! Assessment Engine
//!
//! Turns the two game results into age-normalized scores, a status badge and
//! practice tips.
//!
//! - Memory score: share of the age-expected digit span reached, capped at 100
//! - Accuracy: targets hit plus distractors left alone, over all stimuli
//! - Reaction-time score: full marks at or under the age limit, inverse
//!   proportional penalty above it
//! - Attention score: accuracy weighted above speed so fast but impulsive
//!   clicking is not rewarded
//!
//! Every function here is pure.

use tracing::debug;

use crate::config::{AttentionWeights, ScoringConfig, StatusThresholds};
use crate::norms::{norm_for_age, AgeNorm};
use crate::types::{Assessment, MemoryResult, SafariResult, Status, MAX_SCORE};

pub const MEMORY_PRACTICE_TIPS: [&str; 3] = [
    "Try memory games like matching cards at home",
    "Practice remembering short lists (like groceries)",
    "Reading stories and retelling them helps build memory",
];

pub const MEMORY_STRONG_TIP: &str =
    "Your memory is strong! Challenge yourself with longer sequences";

pub const ATTENTION_PRACTICE_TIPS: [&str; 3] = [
    "Practice focusing on one task at a time",
    "Try breathing exercises before tasks",
    "Break big tasks into smaller fun steps",
];

pub const ATTENTION_STRONG_TIP: &str = "Great focus skills! Keep up the good work";

/// Half-up rounding for non-negative scores; negatives floor at 0.
fn round_score(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value + 0.5).floor() as u32
}

/// Assess with the default scoring parameters
pub fn assess(age: i32, memory: &MemoryResult, safari: &SafariResult) -> Assessment {
    assess_with(&ScoringConfig::default(), age, memory, safari)
}

pub fn assess_with(
    config: &ScoringConfig,
    age: i32,
    memory: &MemoryResult,
    safari: &SafariResult,
) -> Assessment {
    let norm = norm_for_age(age);

    let memory_score = memory_score(memory, norm);
    let accuracy = accuracy(safari);
    let avg_reaction_time = average_reaction_time(&safari.reaction_times);
    let rt_score = reaction_time_score(avg_reaction_time, norm);
    let attention_score = attention_score(accuracy, rt_score, &config.attention_weights);

    let overall = (memory_score as f64 + attention_score as f64) / 2.0;
    let status = classify(overall, &config.status_thresholds);

    debug!(
        age,
        band = norm.label,
        memory_score,
        accuracy,
        avg_reaction_time,
        rt_score,
        attention_score,
        overall,
        status = status.as_str(),
        "assessment computed"
    );

    Assessment {
        badge: status.badge().to_string(),
        badge_icon: status.badge_icon().to_string(),
        status,
        memory_tips: memory_tips(memory_score, config.tip_threshold),
        attention_tips: attention_tips(attention_score, config.tip_threshold),
        memory_score,
        attention_score,
        avg_reaction_time,
        accuracy,
        child_message: status.child_message().to_string(),
    }
}

/// `max_level / memory_span` as a percentage, capped at 100
pub fn memory_score(memory: &MemoryResult, norm: &AgeNorm) -> u32 {
    if norm.memory_span == 0 {
        return 0;
    }
    let ratio = memory.max_level as f64 / norm.memory_span as f64;
    round_score(ratio * 100.0).min(MAX_SCORE)
}

/// Percentage of correct go/no-go decisions; 0 when nothing was shown
pub fn accuracy(safari: &SafariResult) -> u32 {
    let total = safari.total_targets as u64 + safari.total_distractors as u64;
    if total == 0 {
        return 0;
    }
    let withheld = safari.total_distractors.saturating_sub(safari.false_alarms) as u64;
    let correct = safari.hits as u64 + withheld;
    round_score(correct as f64 / total as f64 * 100.0)
}

/// Rounded mean in ms; 0 for an empty slice
pub fn average_reaction_time(reaction_times: &[u32]) -> u32 {
    if reaction_times.is_empty() {
        return 0;
    }
    let sum: u64 = reaction_times.iter().map(|&rt| rt as u64).sum();
    round_score(sum as f64 / reaction_times.len() as f64)
}

/// Speed sub-score against the band's reaction-time ceiling.
///
/// 0 without hits, 100 at or under the ceiling, `limit / avg * 100` above it.
pub fn reaction_time_score(avg_reaction_time: u32, norm: &AgeNorm) -> u32 {
    if avg_reaction_time == 0 {
        0
    } else if avg_reaction_time <= norm.reaction_time_limit {
        MAX_SCORE
    } else {
        round_score(norm.reaction_time_limit as f64 / avg_reaction_time as f64 * 100.0)
    }
}

pub fn attention_score(accuracy: u32, rt_score: u32, weights: &AttentionWeights) -> u32 {
    let blended = accuracy as f64 * weights.accuracy + rt_score as f64 * weights.reaction_time;
    round_score(blended).min(MAX_SCORE)
}

/// First matching band wins: excellent, then good, else needs support
pub fn classify(overall: f64, thresholds: &StatusThresholds) -> Status {
    if overall >= thresholds.excellent {
        Status::Excellent
    } else if overall >= thresholds.good {
        Status::Good
    } else {
        Status::NeedsSupport
    }
}

pub fn memory_tips(memory_score: u32, threshold: u32) -> Vec<String> {
    if memory_score < threshold {
        MEMORY_PRACTICE_TIPS.iter().map(|tip| tip.to_string()).collect()
    } else {
        vec![MEMORY_STRONG_TIP.to_string()]
    }
}

pub fn attention_tips(attention_score: u32, threshold: u32) -> Vec<String> {
    if attention_score < threshold {
        ATTENTION_PRACTICE_TIPS.iter().map(|tip| tip.to_string()).collect()
    } else {
        vec![ATTENTION_STRONG_TIP.to_string()]
    }
}
