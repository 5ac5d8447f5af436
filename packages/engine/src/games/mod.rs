//! Game telemetry trackers
//!
//! Rule bookkeeping for the two mini-games, free of rendering and timers.
//! Each tracker yields the result record the session stores.
//!
//! - [`digit_span`] - Memory Challenge (digit span)
//! - [`go_no_go`] - Animal Safari (go/no-go)

pub mod digit_span;
pub mod go_no_go;

pub use digit_span::{AttemptOutcome, DigitSpanTracker};
pub use go_no_go::{GoNoGoTracker, ResponseOutcome, Stimulus, StimulusKind, StimulusWindow};
