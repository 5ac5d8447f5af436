//! # brainquest-engine - Brain Quest assessment core
//!
//! Pure Rust scoring for a two-game cognitive screening session for children:
//!
//! - **Memory Challenge** - digit span (working memory)
//! - **Animal Safari** - go/no-go (attention and inhibitory control)
//!
//! Raw game results are normalized against age-band norms into a memory score,
//! an attention score, a status badge and practice tips. This is a screening
//! aid, not a diagnostic instrument.
//!
//! ## Module layout
//!
//! - [`norms`] - age-band norm table and lookup
//! - [`assessment`] - scoring formulas, classification, tips
//! - [`session`] - per-player session state with a cached assessment
//! - [`games`] - rule bookkeeping for both games
//! - [`report`] - examiner text report
//! - [`config`] - scoring weights and thresholds
//! - [`sanitize`] - result record validation
//! - [`types`] - shared records and constants
//!
//! ## Example
//!
//! ```rust
//! use brainquest_engine::{MemoryResult, SafariResult, Session, Status};
//!
//! let mut session = Session::new();
//! session.set_age(10);
//! session.record_memory_result(MemoryResult { max_level: 5, total_correct: 4, total_attempts: 5 });
//! assert!(session.compute_assessment().is_none());
//!
//! session.record_safari_result(SafariResult {
//!     hits: 13,
//!     misses: 0,
//!     false_alarms: 1,
//!     total_targets: 13,
//!     total_distractors: 7,
//!     reaction_times: vec![600; 13],
//! });
//! let assessment = session.compute_assessment().unwrap();
//! assert_eq!(assessment.status, Status::Excellent);
//! assert_eq!(assessment.attention_score, 97);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod assessment;
pub mod config;
pub mod error;
pub mod games;
pub mod norms;
pub mod report;
pub mod sanitize;
pub mod session;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use assessment::{assess, assess_with};

pub use config::{AttentionWeights, ScoringConfig, StatusThresholds};

pub use error::{ConfigError, EngineError, GameError, ValidationError};

pub use norms::{is_supported_age, norm_for_age, AgeNorm, AGE_NORMS};

pub use report::technical_summary;

pub use session::{Session, SessionSnapshot};

pub use games::{DigitSpanTracker, GoNoGoTracker};
