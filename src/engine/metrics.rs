//! Scan run metrics.
//!
//! Timing is opt-in: `Scan::run` returns only the deterministic result, while
//! `Scan::run_with_metrics` also measures each stage. Durations never end up
//! in `AnalysisResult`, so two runs over the same input still compare equal.

use std::time::Duration;

/// Timing for a whole scan.
#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for `Scan::run_with_metrics`.
    pub total: Duration,
    /// Per-profile compile + match + evaluate timings, in profile order.
    pub profiles: Vec<ProfileMetrics>,
    /// Time spent building the match index and overall status.
    pub aggregate: Duration,
}

/// Timing and counts for one profile.
#[derive(Debug, Default, Clone)]
pub struct ProfileMetrics {
    pub profile_id: String,
    /// Number of candidate terms after resolving the profile.
    pub candidate_terms: usize,
    /// Number of patterns searched per token.
    pub patterns: usize,
    /// Number of match records produced.
    pub matches: usize,
    pub duration: Duration,
}
