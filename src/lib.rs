//! Deterministic dietary safety matching.
//!
//! `safebite` takes free-form ingredient text (or a dish's inferred ingredient
//! list) and a set of per-person dietary profiles, and decides for each
//! profile whether the item is `safe`, needs `caution`, or is `unsafe`, with a
//! human-readable reason per matched term.
//!
//! ```text
//! text ── normalize ──▶ tokens ──┬─ match(profile A) ─▶ evaluate ─┐
//!                                ├─ match(profile B) ─▶ evaluate ─┼─▶ AnalysisResult
//!                                └─ ...                           ┘   (status + MatchIndex)
//! ```
//!
//! The engine is pure: same tokens, profiles and dictionary always give the
//! same result. See [`analyze_with`] and [`evaluate_menu_with`].

use serde::{Deserialize, Serialize};

#[macro_use]
mod macros;
mod api;
mod dictionary;
mod dish;
mod engine;
mod error;
mod history;
mod product;
mod profile;
mod terms;

pub use api::{
    AnalysisDetails, AnalysisReport, AnalysisResult, ProfileResult, Status, analyze, analyze_product_with,
    analyze_verbose_with, analyze_with, evaluate_menu, evaluate_menu_with,
};
pub use dictionary::{BUILTIN_TERMS_VERSION, DictionaryBuilder, RestrictionTerm, TermDictionary, TermKind};
pub use dish::{ConflictKind, ConflictRecord, Dish, DishResult, DishVerdict};
pub use engine::{CategorySet, MatchIndex, ProfileMetrics, normalize};
pub use error::{Error, Result};
pub use history::HistoryRecord;
pub use product::ProductLabel;
pub use profile::{Profile, ProfileDocument, RestrictionField};

// --- Core types -------------------------------------------------------------

/// Restriction category a match belongs to.
///
/// Ordered by severity: `PreferenceConflict < ForbiddenKeyword < Allergen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    PreferenceConflict,
    ForbiddenKeyword,
    Allergen,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Allergen => "allergen",
            Category::ForbiddenKeyword => "forbiddenKeyword",
            Category::PreferenceConflict => "preferenceConflict",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte span inside an [`IngredientToken::comparison`] string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

/// One candidate ingredient produced by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientToken {
    /// Position of the token in the scan.
    pub index: usize,
    /// Original (trimmed) text, kept for display.
    pub text: String,
    /// Folded form used for matching: lower-cased, single-spaced, with
    /// typographic apostrophes replaced by `'`.
    pub comparison: String,
}

impl IngredientToken {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let comparison = engine::fold(&text);
        IngredientToken { index, text, comparison }
    }
}

/// A single accepted pattern occurrence for one profile.
///
/// Records are produced fresh for every scan and never outlive the result
/// they were computed for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Index of the token that matched.
    pub token_index: usize,
    /// Display text of the ingredient that matched.
    pub ingredient: String,
    /// Canonical (or user-authored) name of the matched term.
    pub term: String,
    /// The pattern that was found inside the ingredient.
    pub pattern: String,
    /// Where the pattern was found in the ingredient's comparison form.
    pub span: Range,
    pub category: Category,
    /// Id of the profile the term belongs to.
    pub profile_id: String,
}
