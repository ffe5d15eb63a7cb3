use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::dictionary::TermDictionary;
use crate::dish::{Dish, DishResult, evaluate_dishes};
use crate::engine::{self, MatchIndex, ProfileMetrics, Scan};
use crate::error::{Error, Result};
use crate::product::ProductLabel;
use crate::{IngredientToken, MatchRecord, Profile};

/// Safety status of an item for one profile (or a whole scan).
///
/// Ordered by severity: `Safe < Caution < Unsafe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Safe,
    Caution,
    Unsafe,
}

impl Status {
    /// Fixed precedence: hard signals (allergens, forbidden keywords) always
    /// dominate soft ones (preferences).
    pub fn from_lists(has_allergens: bool, has_keywords: bool, has_preferences: bool) -> Self {
        if has_allergens || has_keywords {
            Status::Unsafe
        } else if has_preferences {
            Status::Caution
        } else {
            Status::Safe
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Safe => "safe",
            Status::Caution => "caution",
            Status::Unsafe => "unsafe",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResult {
    pub profile_id: String,
    pub profile_name: String,
    pub status: Status,
    /// Matched allergen names, deduplicated (case-insensitive).
    pub matched_allergens: Vec<String>,
    /// Matched forbidden keywords, deduplicated (case-insensitive).
    pub matched_keywords: Vec<String>,
    /// Violated preference names, deduplicated (case-insensitive).
    pub matched_preferences: Vec<String>,
    /// One line per matched term: allergens, then keywords, then preferences.
    pub reasons: Vec<String>,
}

impl ProfileResult {
    pub fn is_safe(&self) -> bool {
        self.status == Status::Safe
    }
}

/// Result of one ingredient scan across every active profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Every ingredient token, in input order (for display).
    pub tokens: Vec<IngredientToken>,
    /// One result per profile, in the order the profiles were given.
    pub profiles: Vec<ProfileResult>,
    /// Ingredient → categories, merged over all profiles (for highlighting).
    pub match_index: MatchIndex,
    /// Most severe profile status; drives the scan-level badge.
    pub status: Status,
}

impl AnalysisResult {
    /// Result for the profile with `id`.
    pub fn profile(&self, id: &str) -> Option<&ProfileResult> {
        self.profiles.iter().find(|p| p.profile_id == id)
    }

    /// Ingredient display texts, in input order.
    pub fn ingredients(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Number of profiles with `status`.
    pub fn count(&self, status: Status) -> usize {
        self.profiles.iter().filter(|p| p.status == status).count()
    }
}

/// Extra details returned by [`analyze_verbose_with`].
///
/// Meant for debugging dictionaries and profiles; the default [`analyze_with`]
/// path does not collect these.
#[derive(Debug, Clone)]
pub struct AnalysisDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent splitting the input.
    pub normalize: Duration,
    /// Time spent merging profile results.
    pub aggregate: Duration,
    /// Per-profile timings and counts.
    pub profiles: Vec<ProfileMetrics>,
    /// Every match record, in profile order.
    pub records: Vec<MatchRecord>,
    /// Version of the dictionary used.
    pub dictionary_version: String,
}

/// Result from [`analyze_verbose_with`].
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub details: AnalysisDetails,
}

/// Analyze `text` against `profiles` using the built-in dictionary.
///
/// # Example
/// ```
/// use safebite::{Profile, Status, analyze};
///
/// let me = Profile::new("me", "Sam").with_allergies(["Milk"]).with_forbidden_keywords(["MSG"]);
/// let result = analyze("Wheat flour, Sugar, Milk, Eggs, Salt, MSG", &[me]).unwrap();
///
/// assert_eq!(result.status, Status::Unsafe);
/// assert_eq!(result.profiles[0].matched_allergens, vec!["Milk"]);
/// assert_eq!(result.profiles[0].matched_keywords, vec!["MSG"]);
/// ```
pub fn analyze(text: &str, profiles: &[Profile]) -> Result<AnalysisResult> {
    analyze_with(text, profiles, TermDictionary::builtin())
}

/// Analyze `text` against `profiles` using `dictionary`.
///
/// Fails with [`Error::EmptyInput`] when the text holds no ingredients, so
/// that "nothing was read" is never reported as "safe".
pub fn analyze_with(text: &str, profiles: &[Profile], dictionary: &TermDictionary) -> Result<AnalysisResult> {
    let tokens = tokenize(text)?;
    Ok(Scan::new(tokens, dictionary).run(profiles))
}

/// Analyze `text` and return extra (compact) debug details.
pub fn analyze_verbose_with(text: &str, profiles: &[Profile], dictionary: &TermDictionary) -> Result<AnalysisReport> {
    let start = Instant::now();
    let tokens = tokenize(text)?;
    let normalize = start.elapsed();

    let run = Scan::new(tokens, dictionary).run_with_metrics(profiles);

    let details = AnalysisDetails {
        total: normalize + run.metrics.total,
        normalize,
        aggregate: run.metrics.aggregate,
        profiles: run.metrics.profiles,
        records: run.records,
        dictionary_version: dictionary.version().to_string(),
    };

    Ok(AnalysisReport { result: run.result, details })
}

/// Analyze a structured product label (ingredients plus declared allergens).
pub fn analyze_product_with(
    label: &ProductLabel,
    profiles: &[Profile],
    dictionary: &TermDictionary,
) -> Result<AnalysisResult> {
    analyze_with(&label.to_text(), profiles, dictionary)
}

/// Evaluate menu dishes against the union of `profiles`, using the built-in
/// dictionary.
pub fn evaluate_menu(dishes: &[Dish], profiles: &[Profile]) -> Vec<DishResult> {
    evaluate_menu_with(dishes, profiles, TermDictionary::builtin())
}

/// Evaluate menu dishes against the union of `profiles`.
///
/// Menu scanning is not separated per person: every selected profile's
/// restrictions apply to every dish.
pub fn evaluate_menu_with(dishes: &[Dish], profiles: &[Profile], dictionary: &TermDictionary) -> Vec<DishResult> {
    evaluate_dishes(dishes, profiles, dictionary)
}

fn tokenize(text: &str) -> Result<Vec<IngredientToken>> {
    let tokens = engine::normalize(text);
    if tokens.is_empty() {
        tracing::debug!("no ingredients in input");
        return Err(Error::EmptyInput);
    }
    Ok(tokens)
}
