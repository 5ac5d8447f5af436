//! Age-Stratified Norms
//!
//! Expected performance per age band. Reaction-time limits already include the
//! +500ms Fitts' Law allowance for mouse/touch latency.

use serde::Serialize;

use crate::types::{MAX_SUPPORTED_AGE, MIN_SUPPORTED_AGE};

/// Fitts' Law allowance folded into every `reaction_time_limit` (ms)
pub const FITTS_LAW_ADJUSTMENT_MS: u32 = 500;

/// Performance baseline for an inclusive age range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeNorm {
    pub min_age: i32,
    pub max_age: i32,
    /// Expected digit span
    pub memory_span: u32,
    /// Reaction-time ceiling (ms); at or below scores as full speed
    pub reaction_time_limit: u32,
    /// Target accuracy in percent, display only
    pub accuracy_threshold: u32,
    pub icon: &'static str,
    pub label: &'static str,
}

impl AgeNorm {
    pub fn contains(&self, age: i32) -> bool {
        age >= self.min_age && age <= self.max_age
    }
}

/// Bands ordered youngest first; together they cover 6..=18 without overlap.
/// Every `memory_span` is non-zero.
pub const AGE_NORMS: [AgeNorm; 6] = [
    AgeNorm {
        min_age: 6,
        max_age: 7,
        memory_span: 3,
        reaction_time_limit: 1200,
        accuracy_threshold: 60,
        icon: "🧱",
        label: "Building Blocks",
    },
    AgeNorm {
        min_age: 8,
        max_age: 9,
        memory_span: 4,
        reaction_time_limit: 1050,
        accuracy_threshold: 65,
        icon: "🧩",
        label: "Puzzle Solver",
    },
    AgeNorm {
        min_age: 10,
        max_age: 11,
        memory_span: 5,
        reaction_time_limit: 950,
        accuracy_threshold: 70,
        icon: "🚲",
        label: "Explorer",
    },
    AgeNorm {
        min_age: 12,
        max_age: 13,
        memory_span: 5,
        reaction_time_limit: 850,
        accuracy_threshold: 75,
        icon: "🔭",
        label: "Scientist",
    },
    AgeNorm {
        min_age: 14,
        max_age: 15,
        memory_span: 6,
        reaction_time_limit: 800,
        accuracy_threshold: 80,
        icon: "🧪",
        label: "Innovator",
    },
    AgeNorm {
        min_age: 16,
        max_age: 18,
        memory_span: 7,
        reaction_time_limit: 750,
        accuracy_threshold: 85,
        icon: "🚀",
        label: "Ready to Launch",
    },
];

/// Band containing `age`.
///
/// Ages outside every band (negative, under 6, over 18) get the youngest band.
/// Scoring relies on this fallback, so it is kept rather than clamped.
pub fn norm_for_age(age: i32) -> &'static AgeNorm {
    AGE_NORMS
        .iter()
        .find(|norm| norm.contains(age))
        .unwrap_or(&AGE_NORMS[0])
}

/// Whether the setup slider offers `age`
pub fn is_supported_age(age: i32) -> bool {
    (MIN_SUPPORTED_AGE..=MAX_SUPPORTED_AGE).contains(&age)
}
