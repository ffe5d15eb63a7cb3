//! Cross-profile aggregation.
//!
//! After every profile of a scan has been evaluated, two things are merged:
//!
//! - the `MatchIndex`: which ingredients triggered which categories, across
//!   all profiles, for highlighting;
//! - the overall status: the most severe profile status.
//!
//! Both merges are commutative unions, so the order in which profiles were
//! evaluated cannot change the result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::{ProfileResult, Status};
use crate::{Category, MatchRecord};

use super::compiled_terms::CategorySet;
use super::normalize::fold;

/// Ingredient → categories it triggered, across every profile of a scan.
///
/// Keys are the ingredients' folded comparison forms; lookups fold the same
/// way, so `"Palm\toil"` and `"palm oil"` share an entry.
///
/// When an ingredient triggered several categories (an allergen for one
/// person, a preference conflict for another) the reported
/// [`category`](MatchIndex::category) is the most severe one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, Vec<Category>>", from = "BTreeMap<String, Vec<Category>>")]
pub struct MatchIndex {
    entries: BTreeMap<String, CategorySet>,
}

impl MatchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from match records of any number of profiles.
    pub fn from_records<'r>(records: impl IntoIterator<Item = &'r MatchRecord>) -> Self {
        let mut index = MatchIndex::new();
        for record in records {
            index.insert(&record.ingredient, record.category);
        }
        index
    }

    pub(crate) fn insert(&mut self, ingredient: &str, category: Category) {
        let set = self.entries.entry(fold(ingredient)).or_insert(CategorySet::empty());
        *set |= CategorySet::of(category);
    }

    /// Union `other` into this index.
    pub fn merge(&mut self, other: &MatchIndex) {
        for (ingredient, set) in &other.entries {
            let entry = self.entries.entry(ingredient.clone()).or_insert(CategorySet::empty());
            *entry |= *set;
        }
    }

    /// Every category `ingredient` triggered (empty when it matched nothing).
    pub fn categories(&self, ingredient: &str) -> CategorySet {
        self.entries.get(&fold(ingredient)).copied().unwrap_or(CategorySet::empty())
    }

    /// Most severe category `ingredient` triggered.
    pub fn category(&self, ingredient: &str) -> Option<Category> {
        self.categories(ingredient).most_severe()
    }

    /// `(ingredient, most severe category)` pairs in ingredient order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> + '_ {
        self.entries.iter().filter_map(|(ingredient, set)| set.most_severe().map(|c| (ingredient.as_str(), c)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<MatchIndex> for BTreeMap<String, Vec<Category>> {
    fn from(index: MatchIndex) -> Self {
        index.entries.into_iter().map(|(ingredient, set)| (ingredient, set.categories())).collect()
    }
}

impl From<BTreeMap<String, Vec<Category>>> for MatchIndex {
    fn from(map: BTreeMap<String, Vec<Category>>) -> Self {
        let mut index = MatchIndex::new();
        for (ingredient, categories) in map {
            for category in categories {
                index.insert(&ingredient, category);
            }
        }
        index
    }
}

/// Most severe status among `results`; `Safe` when there are none.
pub(crate) fn overall_status(results: &[ProfileResult]) -> Status {
    results.iter().map(|r| r.status).max().unwrap_or(Status::Safe)
}
