//! Profile compilation.
//!
//! A `Profile` names restrictions ("Milk", "Vegan", "MSG"); the matcher needs
//! the patterns behind them. Compiling a profile resolves every entry against
//! the dictionary once, before any token is looked at:
//!
//! ```text
//! Profile { allergies: [Milk], keywords: [MSG], preferences: [Vegan] }
//!   ──▶ CandidateTerm { Milk,  Allergen,           [casein, dairy, milk, whey, ..] }
//!       CandidateTerm { MSG,   ForbiddenKeyword,   [msg] }
//!       CandidateTerm { Vegan, PreferenceConflict, [dairy, eggs, gelatin, honey, ..] }
//! ```
//!
//! ## Invariants
//!
//! - Terms are ordered allergens → forbidden keywords → preferences, each in
//!   profile order. The evaluator relies on this for reason ordering.
//! - A term appears at most once per category (case-insensitive on its
//!   resolved name), so a profile listing "Milk" and "dairy" matches once.
//! - Every candidate has at least one pattern.

use crate::dictionary::{RestrictionTerm, TermDictionary, TermKind};
use crate::{Category, Profile};

use super::dedup::term_key;

bitflags::bitflags! {
    /// Set of restriction categories an ingredient triggered across a scan.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategorySet: u8 {
        const PREFERENCE_CONFLICT = 1 << 0;
        const FORBIDDEN_KEYWORD   = 1 << 1;
        const ALLERGEN            = 1 << 2;
    }
}

impl CategorySet {
    pub fn of(category: Category) -> Self {
        match category {
            Category::Allergen => CategorySet::ALLERGEN,
            Category::ForbiddenKeyword => CategorySet::FORBIDDEN_KEYWORD,
            Category::PreferenceConflict => CategorySet::PREFERENCE_CONFLICT,
        }
    }

    pub fn has(self, category: Category) -> bool {
        self.contains(CategorySet::of(category))
    }

    /// Most severe category in the set (allergen > forbidden keyword > preference).
    pub fn most_severe(self) -> Option<Category> {
        self.categories().into_iter().next()
    }

    /// Categories in the set, most severe first.
    pub fn categories(self) -> Vec<Category> {
        [Category::Allergen, Category::ForbiddenKeyword, Category::PreferenceConflict]
            .into_iter()
            .filter(|&c| self.has(c))
            .collect()
    }
}

/// One restriction ready for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTerm {
    /// Name reported in results (canonical, or the user's text for custom terms).
    pub name: String,
    pub category: Category,
    /// Folded patterns in sorted order.
    pub patterns: Vec<String>,
    /// Folded phrases inside which a pattern occurrence is ignored.
    pub excludes: Vec<String>,
}

impl CandidateTerm {
    fn from_term(term: &RestrictionTerm, category: Category) -> Self {
        CandidateTerm {
            name: term.name().to_string(),
            category,
            patterns: term.patterns().iter().cloned().collect(),
            excludes: term.excludes().iter().cloned().collect(),
        }
    }
}

/// A profile resolved against a dictionary.
#[derive(Debug, Clone)]
pub(crate) struct CompiledProfile {
    pub id: String,
    /// Name used in reason strings (falls back to the id).
    pub display_name: String,
    pub terms: Vec<CandidateTerm>,
}

impl CompiledProfile {
    pub fn new(profile: &Profile, dictionary: &TermDictionary) -> Self {
        let mut terms: Vec<CandidateTerm> = Vec::new();

        let mut push = |candidate: CandidateTerm| {
            let key = term_key(&candidate.name);
            if !terms.iter().any(|t| t.category == candidate.category && term_key(&t.name) == key) {
                terms.push(candidate);
            }
        };

        for allergy in &profile.allergies {
            if let Some(term) = dictionary.resolve(TermKind::Allergen, allergy) {
                push(CandidateTerm::from_term(&term, Category::Allergen));
            }
        }
        // Forbidden keywords are user-authored and never expanded.
        for keyword in &profile.forbidden_keywords {
            if let Some(term) = RestrictionTerm::literal(keyword) {
                push(CandidateTerm::from_term(&term, Category::ForbiddenKeyword));
            }
        }
        for preference in &profile.preferences {
            if let Some(term) = dictionary.resolve(TermKind::Preference, preference) {
                push(CandidateTerm::from_term(&term, Category::PreferenceConflict));
            }
        }

        let display_name = if profile.name.trim().is_empty() { profile.id.clone() } else { profile.name.clone() };

        CompiledProfile { id: profile.id.clone(), display_name, terms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(compiled: &CompiledProfile) -> Vec<(&str, Category)> {
        compiled.terms.iter().map(|t| (t.name.as_str(), t.category)).collect()
    }

    #[test]
    fn orders_allergens_keywords_preferences() {
        let profile = Profile::new("p1", "Ana")
            .with_preferences(["Vegan"])
            .with_forbidden_keywords(["MSG"])
            .with_allergies(["Milk", "Peanuts"]);
        let compiled = CompiledProfile::new(&profile, TermDictionary::builtin());

        assert_eq!(
            names(&compiled),
            vec![
                ("Milk", Category::Allergen),
                ("Peanuts", Category::Allergen),
                ("MSG", Category::ForbiddenKeyword),
                ("Vegan", Category::PreferenceConflict),
            ]
        );
    }

    #[test]
    fn keywords_are_not_expanded() {
        let profile = Profile::new("p1", "Ana").with_forbidden_keywords(["Milk"]);
        let compiled = CompiledProfile::new(&profile, TermDictionary::builtin());
        assert_eq!(compiled.terms[0].patterns, vec!["milk".to_string()]);
    }

    #[test]
    fn aliases_collapse_to_one_term() {
        let profile = Profile::new("p1", "Ana").with_allergies(["Milk", "dairy", "MILK", " "]);
        let compiled = CompiledProfile::new(&profile, TermDictionary::builtin());
        assert_eq!(names(&compiled), vec![("Milk", Category::Allergen)]);
    }

    #[test]
    fn same_name_in_two_categories_is_kept_twice() {
        let profile = Profile::new("p1", "Ana").with_allergies(["Honey"]).with_forbidden_keywords(["honey"]);
        let compiled = CompiledProfile::new(&profile, TermDictionary::builtin());
        assert_eq!(compiled.terms.len(), 2);
    }

    #[test]
    fn exclusions_travel_with_dictionary_terms_only() {
        let profile = Profile::new("p1", "Ana").with_allergies(["Milk"]).with_forbidden_keywords(["butter"]);
        let compiled = CompiledProfile::new(&profile, TermDictionary::builtin());

        assert!(compiled.terms[0].excludes.contains(&"cocoa butter".to_string()));
        assert!(compiled.terms[1].excludes.is_empty());
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let compiled = CompiledProfile::new(&Profile::new("kid-2", "  "), TermDictionary::builtin());
        assert_eq!(compiled.display_name, "kid-2");
        assert!(compiled.terms.is_empty());
    }

    #[test]
    fn category_set_severity() {
        let set = CategorySet::PREFERENCE_CONFLICT | CategorySet::FORBIDDEN_KEYWORD;
        assert_eq!(set.most_severe(), Some(Category::ForbiddenKeyword));
        assert_eq!(CategorySet::empty().most_severe(), None);
        assert_eq!(
            CategorySet::all().categories(),
            vec![Category::Allergen, Category::ForbiddenKeyword, Category::PreferenceConflict]
        );
    }
}
