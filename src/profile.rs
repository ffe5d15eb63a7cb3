//! Dietary profiles.
//!
//! A [`Profile`] is the engine's read-only view of one person's restrictions.
//! Entries are plain names; the dictionary decides whether a name expands to
//! synonyms (a known allergen or preference) or stays a single literal
//! pattern (a custom entry).
//!
//! The profile store's JSON shapes are reconciled into this flat form by
//! [`ProfileDocument`] before anything reaches the matcher.

#[path = "profile/document.rs"]
mod document;

use serde::{Deserialize, Serialize};

use crate::engine::TermList;

pub use document::{ProfileDocument, RestrictionField};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub id: String,
    /// Display name used in reason strings.
    pub name: String,
    pub allergies: Vec<String>,
    pub preferences: Vec<String>,
    #[serde(alias = "forbidden_keywords")]
    pub forbidden_keywords: Vec<String>,
}

impl Profile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Profile { id: id.into(), name: name.into(), ..Default::default() }
    }

    pub fn with_allergies<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergies.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_preferences<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_forbidden_keywords<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_keywords.extend(items.into_iter().map(Into::into));
        self
    }

    /// True when the profile has nothing to check.
    pub fn is_empty(&self) -> bool {
        self.allergies.is_empty() && self.preferences.is_empty() && self.forbidden_keywords.is_empty()
    }

    /// Merge several profiles into one carrying every restriction.
    ///
    /// Entries keep first-seen order and are deduplicated case-insensitively.
    /// Used by the menu adapter, which checks dishes against everyone at once.
    pub fn union(id: impl Into<String>, name: impl Into<String>, profiles: &[Profile]) -> Profile {
        let mut allergies = TermList::new();
        let mut preferences = TermList::new();
        let mut keywords = TermList::new();

        for profile in profiles {
            push_all(&mut allergies, &profile.allergies);
            push_all(&mut preferences, &profile.preferences);
            push_all(&mut keywords, &profile.forbidden_keywords);
        }

        Profile {
            id: id.into(),
            name: name.into(),
            allergies: allergies.into_vec(),
            preferences: preferences.into_vec(),
            forbidden_keywords: keywords.into_vec(),
        }
    }
}

fn push_all(list: &mut TermList, items: &[String]) {
    for item in items.iter().filter(|item| !item.trim().is_empty()) {
        list.push(item.trim());
    }
}
