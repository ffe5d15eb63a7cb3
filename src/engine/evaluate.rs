//! Profile evaluation.
//!
//! Turns the match records of one profile into its `ProfileResult`:
//!
//! ```text
//! MatchRecords ──┬─ Allergen           ─▶ matched_allergens   ─┐
//!                ├─ ForbiddenKeyword   ─▶ matched_keywords    ─┼─▶ Status + reasons
//!                └─ PreferenceConflict ─▶ matched_preferences ─┘
//! ```
//!
//! The precedence is fixed: any allergen or forbidden keyword makes the
//! profile `unsafe`; otherwise any preference conflict makes it `caution`;
//! otherwise it is `safe`. The status depends only on which lists are
//! non-empty, never on how many matches there were.

use crate::api::{ProfileResult, Status};
use crate::{Category, MatchRecord};

use super::compiled_terms::CompiledProfile;
use super::dedup::TermList;

/// Aggregate `records` (all belonging to `profile`) into a result.
pub(crate) fn evaluate(profile: &CompiledProfile, records: &[MatchRecord]) -> ProfileResult {
    let mut allergens = TermList::new();
    let mut keywords = TermList::new();
    let mut preferences = TermList::new();

    for record in records.iter().filter(|r| r.profile_id == profile.id) {
        match record.category {
            Category::Allergen => allergens.push(&record.term),
            Category::ForbiddenKeyword => keywords.push(&record.term),
            Category::PreferenceConflict => preferences.push(&record.term),
        };
    }

    let status = Status::from_lists(!allergens.is_empty(), !keywords.is_empty(), !preferences.is_empty());

    let matched_allergens = allergens.into_vec();
    let matched_keywords = keywords.into_vec();
    let matched_preferences = preferences.into_vec();

    let name = &profile.display_name;
    let reasons: Vec<String> = matched_allergens
        .iter()
        .map(|term| format!("Contains {term} (allergen for {name})"))
        .chain(matched_keywords.iter().map(|term| format!("Contains {term} (forbidden for {name})")))
        .chain(matched_preferences.iter().map(|term| format!("violates {term} preference")))
        .collect();

    tracing::debug!(
        profile = %profile.id,
        status = %status,
        allergens = matched_allergens.len(),
        keywords = matched_keywords.len(),
        preferences = matched_preferences.len(),
        "profile evaluated"
    );

    ProfileResult {
        profile_id: profile.id.clone(),
        profile_name: profile.display_name.clone(),
        status,
        matched_allergens,
        matched_keywords,
        matched_preferences,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Range;

    fn profile() -> CompiledProfile {
        CompiledProfile {
            id: "p1".to_string(),
            display_name: "Ana".to_string(),
            terms: Vec::new(),
        }
    }

    fn record(term: &str, category: Category) -> MatchRecord {
        MatchRecord {
            token_index: 0,
            ingredient: term.to_string(),
            term: term.to_string(),
            pattern: term.to_lowercase(),
            span: Range { start: 0, end: term.len() },
            category,
            profile_id: "p1".to_string(),
        }
    }

    #[test]
    fn no_matches_is_safe() {
        let result = evaluate(&profile(), &[]);
        assert_eq!(result.status, Status::Safe);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn preference_only_is_caution() {
        let result = evaluate(&profile(), &[record("Vegan", Category::PreferenceConflict)]);
        assert_eq!(result.status, Status::Caution);
        assert_eq!(result.reasons, vec!["violates Vegan preference".to_string()]);
    }

    #[test]
    fn keyword_alone_is_unsafe() {
        let result = evaluate(&profile(), &[record("MSG", Category::ForbiddenKeyword)]);
        assert_eq!(result.status, Status::Unsafe);
        assert_eq!(result.reasons, vec!["Contains MSG (forbidden for Ana)".to_string()]);
    }

    #[test]
    fn allergen_dominates_many_preferences() {
        let records = vec![
            record("Vegan", Category::PreferenceConflict),
            record("Keto", Category::PreferenceConflict),
            record("Halal", Category::PreferenceConflict),
            record("Milk", Category::Allergen),
        ];
        let result = evaluate(&profile(), &records);
        assert_eq!(result.status, Status::Unsafe);
    }

    #[test]
    fn adding_an_allergen_never_lowers_status() {
        let base = vec![
            vec![],
            vec![record("Vegan", Category::PreferenceConflict)],
            vec![record("MSG", Category::ForbiddenKeyword)],
            vec![record("Vegan", Category::PreferenceConflict), record("Eggs", Category::Allergen)],
        ];

        for records in base {
            let before = evaluate(&profile(), &records).status;
            let mut more = records.clone();
            more.push(record("Milk", Category::Allergen));
            let after = evaluate(&profile(), &more).status;
            assert!(after >= before, "{:?} -> {:?}", before, after);
            assert_eq!(after, Status::Unsafe);
        }
    }

    #[test]
    fn reasons_follow_category_order_and_dedup() {
        let records = vec![
            record("Vegan", Category::PreferenceConflict),
            record("msg", Category::ForbiddenKeyword),
            record("Milk", Category::Allergen),
            record("MSG", Category::ForbiddenKeyword),
            record("milk", Category::Allergen),
        ];
        let result = evaluate(&profile(), &records);

        assert_eq!(result.matched_allergens, vec!["Milk".to_string()]);
        assert_eq!(result.matched_keywords, vec!["msg".to_string()]);
        assert_eq!(result.matched_preferences, vec!["Vegan".to_string()]);
        assert_eq!(
            result.reasons,
            vec![
                "Contains Milk (allergen for Ana)".to_string(),
                "Contains msg (forbidden for Ana)".to_string(),
                "violates Vegan preference".to_string(),
            ]
        );
    }

    #[test]
    fn records_of_other_profiles_are_ignored() {
        let mut foreign = record("Milk", Category::Allergen);
        foreign.profile_id = "p2".to_string();
        let result = evaluate(&profile(), &[foreign]);
        assert_eq!(result.status, Status::Safe);
        assert!(result.matched_allergens.is_empty());
    }
}
