// src/checker/report.rs
// =============================================================================
// Classifies probe results and sums them up.
//
// The rule is simple:
// - 200-299: ok
// - anything else (3xx, 4xx, 5xx, or no response at all): error
//
// This is a pure function of the results: no I/O, no printing. output.rs
// decides how the report looks.
// =============================================================================

use serde::Serialize;
use std::time::Duration;

use super::http::{serialize_millis, ProbeResult};

/// Whether a single probe counts as a working link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Error,
}

// Classifies a single result
pub fn classify(result: &ProbeResult) -> Verdict {
    match result.status_code() {
        Some(code) if (200..=299).contains(&code) => Verdict::Ok,
        _ => Verdict::Error,
    }
}

/// Summary of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub total: usize,
    pub ok_count: usize,
    pub error_count: usize,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    /// Every result, in the order it was collected
    pub results: Vec<ProbeResult>,
    /// Just the failures, same order as `results`
    pub errors: Vec<ProbeResult>,
}

impl Report {
    pub fn new(results: Vec<ProbeResult>, elapsed: Duration) -> Self {
        let errors: Vec<ProbeResult> = results
            .iter()
            .filter(|r| classify(r) == Verdict::Error)
            .cloned()
            .collect();

        Report {
            total: results.len(),
            ok_count: results.len() - errors.len(),
            error_count: errors.len(),
            elapsed,
            results,
            errors,
        }
    }

    /// True when every probe came back 2xx
    pub fn is_success(&self) -> bool {
        self.error_count == 0
    }
}
