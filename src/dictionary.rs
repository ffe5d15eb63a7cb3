//! Term dictionary: canonical restriction names → match patterns.
//!
//! A [`TermDictionary`] is an immutable configuration object passed to the
//! engine at call time. The built-in one ([`TermDictionary::builtin`]) is
//! created once per process and never mutated; tests and deployments that
//! review synonyms deliberately can build their own with
//! [`TermDictionary::builder`] or load a versioned JSON file with
//! [`TermDictionary::from_json`].
//!
//! Lookup never fails: a name with no entry (a user's custom allergy or
//! preference) resolves to a single-pattern term made of its own lowercase
//! text.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::engine::fold;
use crate::error::{Error, Result};
use crate::terms::TermSpec;
use crate::terms::allergens::ALLERGENS;
use crate::terms::preferences::PREFERENCES;

/// Version of the built-in term tables in `src/terms/`.
pub const BUILTIN_TERMS_VERSION: &str = "2026.11";

static BUILTIN: Lazy<TermDictionary> = Lazy::new(TermDictionary::from_specs);

/// Which table a term lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    /// Patterns indicate the presence of the allergen.
    Allergen,
    /// Patterns are the conflict set that violates the preference.
    Preference,
}

/// A canonical name plus its (never empty) set of lowercase match patterns.
///
/// A term may also carry exclusion phrases: a pattern occurrence that lies
/// inside an exclusion ("butter" inside "cocoa butter") does not count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RestrictionTerm {
    name: String,
    patterns: BTreeSet<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    excludes: BTreeSet<String>,
}

impl RestrictionTerm {
    /// Create a term from a name and its patterns.
    ///
    /// Patterns are trimmed and lower-cased; blank ones are dropped. Fails with
    /// [`Error::EmptyTerm`] when nothing is left.
    pub fn new<I, S>(name: impl Into<String>, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into().trim().to_string();
        let patterns: BTreeSet<String> = patterns
            .into_iter()
            .map(|p| fold(p.as_ref()))
            .filter(|p| !p.is_empty())
            .collect();

        if name.is_empty() || patterns.is_empty() {
            return Err(Error::EmptyTerm { term: name });
        }

        Ok(RestrictionTerm { name, patterns, excludes: BTreeSet::new() })
    }

    /// Add exclusion phrases (folded like patterns; blank ones are dropped).
    pub fn with_excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excludes.extend(excludes.into_iter().map(|e| fold(e.as_ref())).filter(|e| !e.is_empty()));
        self
    }

    /// Single-pattern term made from user-authored text.
    ///
    /// Returns `None` for blank text.
    pub fn literal(text: &str) -> Option<Self> {
        let name = collapse_whitespace(text);
        if name.is_empty() {
            return None;
        }
        let patterns = BTreeSet::from([fold(&name)]);
        Some(RestrictionTerm { name, patterns, excludes: BTreeSet::new() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn patterns(&self) -> &BTreeSet<String> {
        &self.patterns
    }

    pub fn excludes(&self) -> &BTreeSet<String> {
        &self.excludes
    }
}

/// One kind's terms plus a lookup index over names and aliases.
#[derive(Debug, Clone, Default)]
struct TermTable {
    terms: Vec<RestrictionTerm>,
    by_key: HashMap<String, usize>,
}

impl TermTable {
    /// Insert (or replace, matched by name) a term and register its aliases.
    fn insert<A: AsRef<str>>(&mut self, term: RestrictionTerm, aliases: &[A]) {
        let key = lookup_key(term.name());
        let id = match self.by_key.get(&key) {
            Some(&id) if lookup_key(self.terms[id].name()) == key => {
                self.terms[id] = term;
                id
            }
            _ => {
                self.terms.push(term);
                self.terms.len() - 1
            }
        };

        self.by_key.insert(key, id);
        for alias in aliases {
            let alias = lookup_key(alias.as_ref());
            if !alias.is_empty() {
                self.by_key.insert(alias, id);
            }
        }
    }

    fn get(&self, name: &str) -> Option<&RestrictionTerm> {
        self.by_key.get(&lookup_key(name)).map(|&id| &self.terms[id])
    }

    fn aliases_of(&self, id: usize) -> Vec<String> {
        let own = lookup_key(self.terms[id].name());
        let mut aliases: Vec<String> =
            self.by_key.iter().filter(|&(key, &idx)| idx == id && *key != own).map(|(key, _)| key.clone()).collect();
        aliases.sort_unstable();
        aliases
    }
}

/// Immutable mapping from restriction names to match patterns.
#[derive(Debug, Clone)]
pub struct TermDictionary {
    version: String,
    allergens: TermTable,
    preferences: TermTable,
}

impl TermDictionary {
    /// The built-in dictionary, loaded once on first use.
    pub fn builtin() -> &'static TermDictionary {
        &BUILTIN
    }

    /// Start an empty dictionary.
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::default()
    }

    /// Copy this dictionary into a builder so it can be extended.
    pub fn to_builder(&self) -> DictionaryBuilder {
        DictionaryBuilder {
            version: self.version.clone(),
            allergens: self.allergens.clone(),
            preferences: self.preferences.clone(),
        }
    }

    /// Load a versioned dictionary from JSON.
    ///
    /// ```text
    /// {
    ///   "version": "2026.11",
    ///   "allergens":   [{ "name": "Milk", "aliases": ["dairy"], "patterns": ["milk", "butter"],
    ///                     "excludes": ["cocoa butter"] }],
    ///   "preferences": [{ "name": "Vegan", "patterns": ["meat", "honey"] }]
    /// }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let file: DictionaryFile = serde_json::from_str(json).map_err(Error::Dictionary)?;

        let mut builder = TermDictionary::builder().version(file.version);
        for entry in file.allergens {
            let term = RestrictionTerm::new(entry.name, entry.patterns)?.with_excludes(entry.excludes);
            builder = builder.term(TermKind::Allergen, term, entry.aliases.as_slice());
        }
        for entry in file.preferences {
            let term = RestrictionTerm::new(entry.name, entry.patterns)?.with_excludes(entry.excludes);
            builder = builder.term(TermKind::Preference, term, entry.aliases.as_slice());
        }

        Ok(builder.build())
    }

    /// Serialize this dictionary in the format read by [`from_json`](Self::from_json).
    pub fn to_json(&self) -> Result<String> {
        let file = DictionaryFile {
            version: self.version.clone(),
            allergens: table_entries(&self.allergens),
            preferences: table_entries(&self.preferences),
        };
        serde_json::to_string_pretty(&file).map_err(Error::Dictionary)
    }

    fn from_specs() -> Self {
        let mut builder = TermDictionary::builder().version(BUILTIN_TERMS_VERSION);
        for (kind, specs) in [(TermKind::Allergen, ALLERGENS), (TermKind::Preference, PREFERENCES)] {
            for spec in specs {
                match spec_to_term(spec) {
                    Ok(term) => builder = builder.term(kind, term, spec.aliases),
                    Err(err) => tracing::error!(%err, "skipping built-in term"),
                }
            }
        }
        builder.build()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Canonical terms of one kind, in definition order.
    pub fn terms(&self, kind: TermKind) -> &[RestrictionTerm] {
        &self.table(kind).terms
    }

    /// Look up a defined term by canonical name or alias (case-insensitive).
    pub fn get(&self, kind: TermKind, name: &str) -> Option<&RestrictionTerm> {
        self.table(kind).get(name)
    }

    /// Resolve a profile entry to the term the engine matches with.
    ///
    /// Known names borrow the dictionary entry; unknown names become a
    /// single-pattern term on the fly. Blank names resolve to nothing.
    pub fn resolve(&self, kind: TermKind, name: &str) -> Option<Cow<'_, RestrictionTerm>> {
        if let Some(term) = self.get(kind, name) {
            return Some(Cow::Borrowed(term));
        }

        let literal = RestrictionTerm::literal(name)?;
        tracing::debug!(kind = ?kind, term = literal.name(), "no dictionary entry, matching literally");
        Some(Cow::Owned(literal))
    }

    /// Patterns that indicate (allergen) or violate (preference) `name`.
    pub fn patterns_for(&self, kind: TermKind, name: &str) -> BTreeSet<String> {
        self.resolve(kind, name).map(|term| term.patterns().clone()).unwrap_or_default()
    }

    fn table(&self, kind: TermKind) -> &TermTable {
        match kind {
            TermKind::Allergen => &self.allergens,
            TermKind::Preference => &self.preferences,
        }
    }
}

/// Incrementally assemble a [`TermDictionary`].
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    version: String,
    allergens: TermTable,
    preferences: TermTable,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        DictionaryBuilder {
            version: "custom".to_string(),
            allergens: TermTable::default(),
            preferences: TermTable::default(),
        }
    }
}

impl DictionaryBuilder {
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Add (or replace) a term with optional aliases for its name.
    pub fn term<A: AsRef<str>>(mut self, kind: TermKind, term: RestrictionTerm, aliases: &[A]) -> Self {
        match kind {
            TermKind::Allergen => self.allergens.insert(term, aliases),
            TermKind::Preference => self.preferences.insert(term, aliases),
        }
        self
    }

    pub fn allergen<I, S>(self, name: &str, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let term = RestrictionTerm::new(name, patterns)?;
        Ok(self.term::<&str>(TermKind::Allergen, term, &[]))
    }

    pub fn preference<I, S>(self, name: &str, conflicts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let term = RestrictionTerm::new(name, conflicts)?;
        Ok(self.term::<&str>(TermKind::Preference, term, &[]))
    }

    pub fn build(self) -> TermDictionary {
        TermDictionary { version: self.version, allergens: self.allergens, preferences: self.preferences }
    }
}

// --- JSON file format ---------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct DictionaryFile {
    version: String,
    #[serde(default)]
    allergens: Vec<TermEntry>,
    #[serde(default)]
    preferences: Vec<TermEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TermEntry {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<String>,
    patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    excludes: Vec<String>,
}

fn table_entries(table: &TermTable) -> Vec<TermEntry> {
    table
        .terms
        .iter()
        .enumerate()
        .map(|(id, term)| TermEntry {
            name: term.name().to_string(),
            aliases: table.aliases_of(id),
            patterns: term.patterns().iter().cloned().collect(),
            excludes: term.excludes().iter().cloned().collect(),
        })
        .collect()
}

fn spec_to_term(spec: &TermSpec) -> Result<RestrictionTerm> {
    Ok(RestrictionTerm::new(spec.name, spec.patterns.iter().copied())?.with_excludes(spec.excludes.iter().copied()))
}

/// Trim and collapse runs of whitespace to a single space.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive lookup key for names and aliases.
fn lookup_key(name: &str) -> String {
    fold(name)
}
