//! Scan orchestration.
//!
//! A `Scan` holds one scan's tokens and the dictionary, and evaluates every
//! active profile against them:
//!
//! ```text
//! for profile in profiles:            (independent, no shared state)
//!     compile ─▶ match ─▶ evaluate ─▶ ProfileResult
//! merge:
//!     MatchIndex = ∪ records           (commutative)
//!     status     = max(profile status)
//! ```

use std::time::Instant;

use crate::api::AnalysisResult;
use crate::dictionary::TermDictionary;
use crate::{IngredientToken, MatchRecord, Profile};

use super::aggregate::{MatchIndex, overall_status};
use super::compiled_terms::CompiledProfile;
use super::evaluate::evaluate;
use super::matcher::match_profile;
use super::metrics::{ProfileMetrics, RunMetrics};

/// Scan output bundled with the raw match records and timing.
#[derive(Debug, Clone)]
pub(crate) struct ScanRun {
    pub result: AnalysisResult,
    /// Every match record of every profile, in profile order.
    pub records: Vec<MatchRecord>,
    pub metrics: RunMetrics,
}

#[derive(Debug)]
pub(crate) struct Scan<'a> {
    tokens: Vec<IngredientToken>,
    dictionary: &'a TermDictionary,
}

impl<'a> Scan<'a> {
    pub fn new(tokens: Vec<IngredientToken>, dictionary: &'a TermDictionary) -> Self {
        Scan { tokens, dictionary }
    }

    /// Evaluate `profiles` and return the result only.
    pub fn run(self, profiles: &[Profile]) -> AnalysisResult {
        self.run_with_metrics(profiles).result
    }

    /// Evaluate `profiles`, keeping match records and stage timings.
    pub fn run_with_metrics(self, profiles: &[Profile]) -> ScanRun {
        let total_start = Instant::now();
        let mut metrics = RunMetrics::default();
        let mut records: Vec<MatchRecord> = Vec::new();
        let mut results = Vec::with_capacity(profiles.len());

        for profile in profiles {
            let start = Instant::now();
            let compiled = CompiledProfile::new(profile, self.dictionary);
            let matches = match_profile(&self.tokens, &compiled);
            results.push(evaluate(&compiled, &matches));

            metrics.profiles.push(ProfileMetrics {
                profile_id: compiled.id.clone(),
                candidate_terms: compiled.terms.len(),
                patterns: compiled.terms.iter().map(|t| t.patterns.len()).sum(),
                matches: matches.len(),
                duration: start.elapsed(),
            });
            records.extend(matches);
        }

        let aggregate_start = Instant::now();
        let match_index = MatchIndex::from_records(&records);
        let status = overall_status(&results);
        metrics.aggregate = aggregate_start.elapsed();

        tracing::debug!(
            tokens = self.tokens.len(),
            profiles = results.len(),
            matches = records.len(),
            status = %status,
            "scan complete"
        );

        let result = AnalysisResult { tokens: self.tokens, profiles: results, match_index, status };
        metrics.total = total_start.elapsed();

        ScanRun { result, records, metrics }
    }
}
