//! Pattern matching with a word-boundary guard.
//!
//! For every token and every candidate term of a compiled profile, the matcher
//! searches each of the term's patterns inside the token's lower-cased form.
//! An occurrence is accepted only when it is not glued to another
//! alphanumeric character on either side:
//!
//! ```text
//! pattern "pea"
//!   "peaches"        pea|ches   ✗  followed by 'c'
//!   "chickpea flour" chick|pea  ✗  preceded by 'k'
//!   "split pea soup" ' 'pea' '  ✓
//!
//! pattern "milk"
//!   "milk chocolate"  milk' '   ✓
//!   "powdered milk"   ' 'milk   ✓
//! ```
//!
//! Both sides are folded the same way (lowercase, single spaces, straight
//! apostrophes), so "Brazil  nuts" meets the pattern "brazil nuts".
//!
//! A term may list exclusion phrases. An occurrence that lies entirely inside
//! a bounded exclusion occurrence is rejected: "butter" in "cocoa butter"
//! does not indicate Milk, but the bare "butter" after it still does.
//!
//! Preferences need no special casing here: their compiled patterns already
//! are the conflict set, so a hit means the preference is violated.
//!
//! ## Output
//!
//! One `MatchRecord` per (token, term) pair that matched, recording the first
//! accepted occurrence of the first matching pattern (patterns are sorted).
//! A token can still produce several records when it matches several terms,
//! possibly in different categories.

use crate::{IngredientToken, MatchRecord, Range};

use super::compiled_terms::{CandidateTerm, CompiledProfile};

/// Find every match of `profile`'s terms in `tokens`.
///
/// Records are ordered by token, then by the profile's term order.
pub(crate) fn match_profile(tokens: &[IngredientToken], profile: &CompiledProfile) -> Vec<MatchRecord> {
    let mut records = Vec::new();

    if profile.terms.is_empty() {
        return records;
    }

    for token in tokens {
        for term in &profile.terms {
            if let Some((pattern, span)) = match_term(&token.comparison, term) {
                tracing::trace!(
                    profile = %profile.id,
                    ingredient = %token.text,
                    term = %term.name,
                    pattern,
                    category = %term.category,
                    "match"
                );
                records.push(MatchRecord {
                    token_index: token.index,
                    ingredient: token.text.clone(),
                    term: term.name.clone(),
                    pattern: pattern.to_string(),
                    span,
                    category: term.category,
                    profile_id: profile.id.clone(),
                });
            }
        }
    }

    records
}

/// First pattern of `term` with an accepted occurrence in `haystack`.
///
/// An occurrence lying inside one of the term's exclusion phrases is not
/// accepted, but a later occurrence of the same pattern still can be
/// ("peanut butter with butter" still hits "butter" for Milk).
fn match_term<'t>(haystack: &str, term: &'t CandidateTerm) -> Option<(&'t str, Range)> {
    let excluded: Vec<Range> = term.excludes.iter().flat_map(|phrase| bounded_occurrences(haystack, phrase)).collect();

    term.patterns.iter().find_map(|pattern| {
        bounded_occurrences(haystack, pattern)
            .find(|span| !excluded.iter().any(|ex| ex.start <= span.start && span.end <= ex.end))
            .map(|span| (pattern.as_str(), span))
    })
}

/// Every occurrence of `pattern` in `haystack` that passes the word-boundary
/// guard, left to right.
///
/// Overlapping candidates are considered: after each candidate the search
/// resumes one character later.
pub(crate) fn bounded_occurrences<'h>(haystack: &'h str, pattern: &'h str) -> impl Iterator<Item = Range> + 'h {
    let mut from = 0;
    std::iter::from_fn(move || {
        if pattern.is_empty() {
            return None;
        }
        while from < haystack.len() {
            let start = from + haystack[from..].find(pattern)?;
            let end = start + pattern.len();
            from = start + haystack[start..].chars().next().map(char::len_utf8).unwrap_or(1);

            if is_bounded(haystack, start, end) {
                return Some(Range { start, end });
            }
        }
        None
    })
}

/// True when `haystack[start..end]` is not preceded or followed by an
/// alphanumeric character.
fn is_bounded(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    before.is_none_or(|c| !c.is_alphanumeric()) && after.is_none_or(|c| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalize;
    use crate::{Category, Profile, TermDictionary};

    fn compile(profile: &Profile) -> CompiledProfile {
        CompiledProfile::new(profile, TermDictionary::builtin())
    }

    #[test]
    fn word_boundary_guard() {
        // Array of (haystack, pattern, expected match)
        let cases: Vec<(&str, &str, bool)> = vec![
            ("peaches", "pea", false),
            ("chickpea flour", "pea", false),
            ("split pea soup", "pea", true),
            ("pea", "pea", true),
            ("peanut butter", "peanut", true),
            ("peanuts", "peanut", false),
            ("milk chocolate", "milk", true),
            ("powdered milk", "milk", true),
            ("buttermilk", "milk", false),
            ("milk-based sauce", "milk", true),
            ("(milk)", "milk", true),
            ("e220", "e220", true),
            ("e2201", "e220", false),
            ("crème fraîche", "crème", true),
            ("écrème", "crème", false),
            ("brazil nuts", "brazil nuts", true),
            ("brazil nutshell", "brazil nuts", false),
            ("brewer's yeast", "brewer's yeast", true),
            ("rice flour", "flour", true),
        ];

        for (haystack, pattern, expected) in cases {
            assert_eq!(
                bounded_occurrences(haystack, pattern).next().is_some(),
                expected,
                "pattern '{}' in '{}' should {}match",
                pattern,
                haystack,
                if expected { "" } else { "not " }
            );
        }
    }

    #[test]
    fn rejected_occurrence_does_not_hide_a_later_one() {
        let span = bounded_occurrences("peach and pea", "pea").next().unwrap();
        assert_eq!(span, Range { start: 10, end: 13 });
    }

    #[test]
    fn records_carry_span_and_owner() {
        let profile = Profile::new("p1", "Ana").with_allergies(["Peanuts"]);
        let tokens = normalize("Sugar, Roasted Peanut butter");
        let records = match_profile(&tokens, &compile(&profile));

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.token_index, 1);
        assert_eq!(record.ingredient, "Roasted Peanut butter");
        assert_eq!(record.term, "Peanuts");
        assert_eq!(record.pattern, "peanut");
        assert_eq!(record.span, Range { start: 8, end: 14 });
        assert_eq!(record.category, Category::Allergen);
        assert_eq!(record.profile_id, "p1");
    }

    #[test]
    fn peaches_do_not_match_custom_pea_allergy() {
        let profile = Profile::new("p1", "Ana").with_allergies(["Pea"]);
        let records = match_profile(&normalize("Peaches, Sugar"), &compile(&profile));
        assert!(records.is_empty());

        let records = match_profile(&normalize("Green pea protein"), &compile(&profile));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].term, "Pea");
    }

    #[test]
    fn token_can_match_several_terms() {
        let profile = Profile::new("p1", "Ana")
            .with_allergies(["Milk"])
            .with_forbidden_keywords(["whey"])
            .with_preferences(["Vegan"]);
        let records = match_profile(&normalize("Whey protein"), &compile(&profile));

        let categories: Vec<Category> = records.iter().map(|r| r.category).collect();
        assert_eq!(categories, vec![Category::Allergen, Category::ForbiddenKeyword, Category::PreferenceConflict]);
    }

    #[test]
    fn one_record_per_token_and_term() {
        // "milk" and "cream" both indicate Milk; only one record for the token.
        let profile = Profile::new("p1", "Ana").with_allergies(["Milk"]);
        let records = match_profile(&normalize("Milk cream"), &compile(&profile));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pattern, "cream");
    }

    #[test]
    fn occurrence_inside_an_exclusion_phrase_is_skipped() {
        let profile = Profile::new("p1", "Ana").with_allergies(["Milk"]);
        let compiled = compile(&profile);

        // Array of (ingredient, expected pattern)
        let cases: Vec<(&str, Option<&str>)> = vec![
            ("Cocoa butter", None),
            ("Peanut butter", None),
            ("Coconut cream", None),
            ("Butter", Some("butter")),
            ("Peanut butter and butter", Some("butter")),
            ("Cocoa butter, whey", Some("whey")),
        ];

        for (ingredient, expected) in cases {
            let records = match_profile(&normalize(ingredient), &compiled);
            let pattern = records.first().map(|r| r.pattern.as_str());
            assert_eq!(pattern, expected, "ingredient {ingredient:?}");
        }
    }

    #[test]
    fn folded_token_matches_spaced_pattern() {
        let profile = Profile::new("p1", "Ana").with_allergies(["Tree Nuts"]).with_forbidden_keywords(["palm oil"]);
        let records = match_profile(&normalize("Brazil  nuts, Palm\toil"), &compile(&profile));

        let hits: Vec<(&str, &str)> = records.iter().map(|r| (r.ingredient.as_str(), r.pattern.as_str())).collect();
        assert_eq!(hits, vec![("Brazil  nuts", "brazil nuts"), ("Palm\toil", "palm oil")]);
    }

    #[test]
    fn preference_name_itself_is_not_a_conflict() {
        let profile = Profile::new("p1", "Ana").with_preferences(["Vegan"]);
        let records = match_profile(&normalize("Vegan cheese alternative, Vegan spread"), &compile(&profile));
        // "cheese" conflicts, "vegan" does not.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].token_index, 0);
        assert_eq!(records[0].pattern, "cheese");
    }
}
