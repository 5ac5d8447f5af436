//! Examiner report
//!
//! Plain-text technical summary of a finished session.

use std::fmt::{self, Write};

use crate::norms::{AgeNorm, FITTS_LAW_ADJUSTMENT_MS};
use crate::session::Session;
use crate::types::{Assessment, MemoryResult, SafariResult, ANONYMOUS_SUBJECT};

/// Report for a session with both results and a computed assessment;
/// `None` otherwise.
pub fn technical_summary(session: &Session) -> Option<String> {
    let memory = session.memory_result()?;
    let safari = session.safari_result()?;
    let assessment = session.assessment()?;

    let subject = match session.player_name().trim() {
        "" => ANONYMOUS_SUBJECT,
        name => name,
    };

    let mut out = String::new();
    write_report(
        &mut out,
        subject,
        session.age(),
        session.norm(),
        memory,
        safari,
        assessment,
    )
    .ok()?;
    Some(out)
}

fn write_report(
    out: &mut impl Write,
    subject: &str,
    age: i32,
    norm: &AgeNorm,
    memory: &MemoryResult,
    safari: &SafariResult,
    assessment: &Assessment,
) -> fmt::Result {
    writeln!(out, "Clinical Data Report")?;
    writeln!(out, "Subject: {} | Age: {}", subject, age)?;
    writeln!(
        out,
        "Age Group Norms: {} (ages {}-{})",
        norm.label, norm.min_age, norm.max_age
    )?;
    writeln!(out)?;

    writeln!(out, "DIGIT SPAN TEST (Working Memory)")?;
    writeln!(
        out,
        "Max Span Achieved: {} digits (norm: {})",
        memory.max_level, norm.memory_span
    )?;
    writeln!(
        out,
        "Correct Sequences: {}/{}",
        memory.total_correct, memory.total_attempts
    )?;
    writeln!(out, "Memory Score: {}%", assessment.memory_score)?;
    writeln!(out)?;

    writeln!(out, "GO/NO-GO TEST (Inhibitory Control)")?;
    writeln!(
        out,
        "Hits: {}/{} (targets caught)",
        safari.hits, safari.total_targets
    )?;
    writeln!(out, "Misses: {}/{}", safari.misses, safari.total_targets)?;
    writeln!(
        out,
        "False Alarms: {}/{} (impulsivity indicator)",
        safari.false_alarms, safari.total_distractors
    )?;
    writeln!(
        out,
        "Overall Accuracy: {}% (norm: {}%)",
        assessment.accuracy, norm.accuracy_threshold
    )?;
    writeln!(
        out,
        "Avg Reaction Time: {}ms (norm limit: {}ms, Fitts' adjusted)",
        assessment.avg_reaction_time, norm.reaction_time_limit
    )?;
    writeln!(out, "Attention Score: {}%", assessment.attention_score)?;
    writeln!(out)?;

    writeln!(out, "OVERALL ASSESSMENT")?;
    writeln!(out, "Status: {}", assessment.status.as_str().to_uppercase())?;
    writeln!(out, "Badge: {}", assessment.badge)?;
    writeln!(out)?;
    write!(
        out,
        "Note: Reaction times include +{}ms Fitts' Law adjustment for mouse/touch latency. \
         This is a screening tool, not a diagnostic instrument.",
        FITTS_LAW_ADJUSTMENT_MS
    )
}

impl Session {
    pub fn technical_summary(&self) -> Option<String> {
        technical_summary(self)
    }
}
