//! Profile store documents.
//!
//! The store has written restrictions in two shapes over time:
//!
//! ```text
//! "allergies": ["Milk", "Kiwi"]                                   flat
//! "allergies": { "common": ["Milk"], "custom": ["Kiwi"], "none": false }  grouped
//! ```
//!
//! Both become one flat list on the [`Profile`]: common entries first, then
//! custom ones. Missing or `null` fields are empty, blank entries are dropped.
//! A grouped field with `none: true` and listed items keeps the items; an
//! explicit restriction always wins over the "none" flag.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::Profile;

/// One restriction field as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RestrictionField {
    Flat(Vec<String>),
    Grouped {
        #[serde(default)]
        common: Option<Vec<String>>,
        #[serde(default)]
        custom: Option<Vec<String>>,
        #[serde(default)]
        none: Option<bool>,
    },
}

impl Default for RestrictionField {
    fn default() -> Self {
        RestrictionField::Flat(Vec::new())
    }
}

impl RestrictionField {
    /// Flatten into trimmed, non-blank entries.
    pub fn into_items(self) -> Vec<String> {
        let items = match self {
            RestrictionField::Flat(items) => items,
            RestrictionField::Grouped { common, custom, none } => {
                let items: Vec<String> = common.into_iter().chain(custom).flatten().collect();
                if none == Some(true) && !items.is_empty() {
                    tracing::debug!(items = items.len(), "restriction marked 'none' but lists items; keeping items");
                }
                items
            }
        };

        items.into_iter().map(|item| item.trim().to_string()).filter(|item| !item.is_empty()).collect()
    }
}

/// A profile as read from the profile store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDocument {
    pub id: Option<String>,
    pub name: Option<String>,
    pub allergies: Option<RestrictionField>,
    pub preferences: Option<RestrictionField>,
    #[serde(alias = "forbidden_keywords")]
    pub forbidden_keywords: Option<RestrictionField>,
}

impl ProfileDocument {
    /// Convert into the engine's profile. `fallback_id` is used when the
    /// document carries no id.
    pub fn into_profile(self, fallback_id: &str) -> Profile {
        let id = self.id.filter(|id| !id.trim().is_empty()).unwrap_or_else(|| fallback_id.to_string());
        Profile {
            name: self.name.unwrap_or_default(),
            allergies: self.allergies.unwrap_or_default().into_items(),
            preferences: self.preferences.unwrap_or_default().into_items(),
            forbidden_keywords: self.forbidden_keywords.unwrap_or_default().into_items(),
            id,
        }
    }

    /// Parse a JSON document holding one profile or an array of profiles.
    ///
    /// Profiles without an id are numbered by position (`profile-1`, ...).
    pub fn parse_many(json: &str) -> Result<Vec<Profile>> {
        let documents = if json.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<ProfileDocument>>(json).map_err(Error::Profile)?
        } else {
            vec![serde_json::from_str::<ProfileDocument>(json).map_err(Error::Profile)?]
        };

        Ok(documents
            .into_iter()
            .enumerate()
            .map(|(i, document)| document.into_profile(&format!("profile-{}", i + 1)))
            .collect())
    }
}
