//! Menu dishes.
//!
//! Menus are checked against every selected profile at once: the profiles
//! are merged into one union profile and each dish's inferred ingredients are
//! matched against it. The outcome is bi-state. Any conflict, including a
//! preference mismatch, makes the dish `Unsafe`; the conflict kind keeps the
//! softer signal visible.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dictionary::TermDictionary;
use crate::engine::{CompiledProfile, match_profile, term_key, tokens_from_list};
use crate::error::{Error, Result};
use crate::{Category, Profile};

/// A dish as extracted from a menu.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dish {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<String>,
    /// Ingredients inferred from the dish name and description.
    pub ingredients: Vec<String>,
}

#[derive(Deserialize)]
struct MenuObject {
    dishes: Vec<Dish>,
}

impl Dish {
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dish { name: name.into(), ingredients: ingredients.into_iter().map(Into::into).collect(), ..Default::default() }
    }

    /// Parse a JSON array of dishes, or an object with a `dishes` array.
    pub fn from_json_list(json: &str) -> Result<Vec<Dish>> {
        if json.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Dish>>(json).map_err(Error::Menu)
        } else {
            serde_json::from_str::<MenuObject>(json).map(|menu| menu.dishes).map_err(Error::Menu)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DishVerdict {
    Safe,
    Unsafe,
}

/// Why a dish was flagged. Ordered most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    AllergyRisk,
    ForbiddenKeyword,
    PreferenceMismatch,
}

impl ConflictKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictKind::AllergyRisk => "allergy_risk",
            ConflictKind::ForbiddenKeyword => "forbidden_keyword",
            ConflictKind::PreferenceMismatch => "preference_mismatch",
        }
    }
}

impl From<Category> for ConflictKind {
    fn from(category: Category) -> Self {
        match category {
            Category::Allergen => ConflictKind::AllergyRisk,
            Category::ForbiddenKeyword => ConflictKind::ForbiddenKeyword,
            Category::PreferenceConflict => ConflictKind::PreferenceMismatch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    pub kind: ConflictKind,
    /// Matched allergen, keyword or preference name.
    pub term: String,
    pub detail: String,
}

/// Verdict for one dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishResult {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub verdict: DishVerdict,
    pub ingredients: Vec<String>,
    /// One entry per (kind, term), allergy risks first.
    pub conflicts: Vec<ConflictRecord>,
}

impl DishResult {
    /// True when no ingredient could be inferred. Such a dish is reported
    /// `Safe` only because nothing was checked.
    pub fn is_inconclusive(&self) -> bool {
        self.ingredients.iter().all(|i| i.trim().is_empty())
    }

    pub fn is_safe(&self) -> bool {
        self.verdict == DishVerdict::Safe
    }
}

pub(crate) fn evaluate_dishes(dishes: &[Dish], profiles: &[Profile], dictionary: &TermDictionary) -> Vec<DishResult> {
    let union = Profile::union("menu", "everyone", profiles);
    let compiled = CompiledProfile::new(&union, dictionary);

    dishes.iter().map(|dish| evaluate_dish(dish, &compiled)).collect()
}

fn evaluate_dish(dish: &Dish, profile: &CompiledProfile) -> DishResult {
    let tokens = tokens_from_list(&dish.ingredients);
    let records = match_profile(&tokens, profile);

    let mut seen: HashSet<(ConflictKind, String)> = HashSet::new();
    let mut conflicts: Vec<ConflictRecord> = Vec::new();
    for record in &records {
        let kind = ConflictKind::from(record.category);
        if !seen.insert((kind, term_key(&record.term))) {
            continue;
        }
        conflicts.push(ConflictRecord {
            kind,
            term: record.term.clone(),
            detail: detail(kind, &record.term, &record.ingredient),
        });
    }
    conflicts.sort_by_key(|c| c.kind);

    let verdict = if conflicts.is_empty() { DishVerdict::Safe } else { DishVerdict::Unsafe };
    if tokens.is_empty() {
        tracing::debug!(dish = %dish.name, "no ingredients inferred");
    }
    tracing::debug!(dish = %dish.name, verdict = ?verdict, conflicts = conflicts.len(), "dish evaluated");

    DishResult {
        name: dish.name.clone(),
        description: dish.description.clone(),
        price: dish.price.clone(),
        verdict,
        ingredients: dish.ingredients.clone(),
        conflicts,
    }
}

fn detail(kind: ConflictKind, term: &str, ingredient: &str) -> String {
    match kind {
        ConflictKind::AllergyRisk => format!("{ingredient} may contain {term}"),
        ConflictKind::ForbiddenKeyword => format!("{ingredient} matches forbidden keyword {term}"),
        ConflictKind::PreferenceMismatch => format!("{ingredient} conflicts with {term} preference"),
    }
}
