//! Matching and classification engine.
//!
//! This module is the internal entry point for the safety matcher. It is split
//! into focused submodules under `src/engine/`:
//!
//! ```text
//! text ── normalize ──▶ Vec<IngredientToken>          (normalize.rs)
//!                               │
//! Profile + TermDictionary ─────┼─ CompiledProfile::new (compiled_terms.rs)
//!                               │
//!                               v
//!                     match_profile (matcher.rs)
//!                       - substring search per pattern
//!                       - word-boundary guard
//!                               │
//!                               v
//!                     evaluate (evaluate.rs)
//!                       - dedup term names (dedup.rs)
//!                       - status + reasons
//!                               │
//!                               v
//!                     Scan::run (scan.rs)
//!                       - every profile, same tokens
//!                       - MatchIndex + overall status (aggregate.rs)
//!                               │
//!                               v
//!                        AnalysisResult
//! ```
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: splits raw ingredient text into tokens, keeping original
//!   text for display and a folded form for matching (`fold`, shared with the
//!   dictionary).
//! - `compiled_terms.rs`: resolves one `Profile` against the dictionary into
//!   the flat list of candidate terms the matcher walks.
//! - `matcher.rs`: finds every accepted pattern occurrence per token.
//! - `dedup.rs`: case-insensitive, order-preserving term lists.
//! - `evaluate.rs`: turns one profile's matches into a `ProfileResult`.
//! - `aggregate.rs`: the cross-profile `MatchIndex` and overall status.
//! - `scan.rs`: runs the above for every profile of a scan.
//! - `metrics.rs`: optional timing data for verbose runs.
//!
//! Profiles never share mutable state during a scan; the only merge step
//! (the `MatchIndex`) is a commutative union, so profile order cannot change
//! the result.

#[path = "engine/aggregate.rs"]
mod aggregate;
#[path = "engine/compiled_terms.rs"]
mod compiled_terms;
#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/evaluate.rs"]
mod evaluate;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/scan.rs"]
mod scan;

pub use aggregate::MatchIndex;
pub(crate) use compiled_terms::CompiledProfile;
pub use compiled_terms::CategorySet;
pub(crate) use dedup::{TermList, term_key};
pub(crate) use matcher::match_profile;
pub use metrics::ProfileMetrics;
pub use normalize::normalize;
pub(crate) use normalize::{fold, tokens_from_list};
pub(crate) use scan::Scan;
