use std::collections::HashSet;

use crate::terms::allergens::ALLERGENS;
use crate::terms::preferences::PREFERENCES;
use crate::{Profile, Status, TermDictionary, TermKind, analyze};

#[test]
fn every_builtin_term_has_lowercase_patterns() {
    for spec in ALLERGENS.iter().chain(PREFERENCES.iter()) {
        assert!(!spec.patterns.is_empty(), "term '{}' has no patterns", spec.name);
        for pattern in spec.patterns {
            assert_eq!(*pattern, pattern.trim(), "pattern '{}' of '{}' is not trimmed", pattern, spec.name);
            assert_eq!(pattern.to_lowercase(), *pattern, "pattern '{}' of '{}' is not lowercase", pattern, spec.name);
        }
        for phrase in spec.excludes {
            assert_eq!(*phrase, phrase.trim(), "exclusion '{}' of '{}' is not trimmed", phrase, spec.name);
            assert_eq!(phrase.to_lowercase(), *phrase, "exclusion '{}' of '{}' is not lowercase", phrase, spec.name);
            assert!(
                spec.patterns.iter().any(|p| phrase.split(' ').any(|w| w == *p)),
                "exclusion '{}' of '{}' contains none of its patterns",
                phrase,
                spec.name
            );
        }
    }
}

#[test]
fn builtin_names_and_aliases_are_unique_per_kind() {
    for specs in [ALLERGENS, PREFERENCES] {
        let mut seen = HashSet::new();
        for spec in specs {
            for key in std::iter::once(spec.name).chain(spec.aliases.iter().copied()) {
                assert!(seen.insert(key.to_lowercase()), "name or alias '{}' defined twice", key);
            }
        }
    }
}

#[test]
fn builtin_dictionary_loads_every_spec() {
    let dict = TermDictionary::builtin();
    assert_eq!(dict.terms(TermKind::Allergen).len(), ALLERGENS.len());
    assert_eq!(dict.terms(TermKind::Preference).len(), PREFERENCES.len());
}

#[test]
fn allergen_synonyms() {
    // Array of (canonical term, pattern that must indicate it)
    let cases: Vec<(&str, &str)> = vec![
        ("Milk", "milk"),
        ("Milk", "dairy"),
        ("Milk", "casein"),
        ("Milk", "whey"),
        ("Milk", "lactose"),
        ("Eggs", "egg"),
        ("Eggs", "eggs"),
        ("Eggs", "albumin"),
        ("Peanuts", "peanut"),
        ("Peanuts", "groundnut"),
        ("Tree Nuts", "almond"),
        ("Tree Nuts", "cashews"),
        ("Soy", "soy lecithin"),
        ("Soy", "tofu"),
        ("Gluten", "gluten"),
        ("Gluten", "wheat"),
        ("Gluten", "barley"),
        ("Gluten", "rye"),
        ("Fish", "anchovies"),
        ("Shellfish", "shrimp"),
        ("Molluscs", "squid"),
        ("Sesame", "tahini"),
        ("Sulfites", "sulphur dioxide"),
        ("Corn", "corn syrup"),
    ];

    let dict = TermDictionary::builtin();
    for (term, pattern) in cases {
        let patterns = dict.patterns_for(TermKind::Allergen, term);
        assert!(patterns.contains(pattern), "allergen '{}' does not list '{}' (has {:?})", term, pattern, patterns);
    }
}

#[test]
fn preference_conflict_sets() {
    // Array of (preference, pattern that violates it)
    let cases: Vec<(&str, &str)> = vec![
        ("Vegan", "meat"),
        ("Vegan", "dairy"),
        ("Vegan", "gelatin"),
        ("Vegan", "honey"),
        ("Vegan", "whey"),
        ("Vegan", "eggs"),
        ("Vegan", "milk"),
        ("Vegetarian", "gelatin"),
        ("Vegetarian", "rennet"),
        ("Pescatarian", "chicken"),
        ("Halal", "pork"),
        ("Halal", "wine"),
        ("Kosher", "shrimp"),
        ("Dairy-Free", "butter"),
        ("Gluten-Free", "barley"),
        ("Keto", "sugar"),
    ];

    let dict = TermDictionary::builtin();
    for (preference, pattern) in cases {
        let patterns = dict.patterns_for(TermKind::Preference, preference);
        assert!(patterns.contains(pattern), "preference '{}' does not list '{}'", preference, pattern);
    }
}

#[test]
fn preferences_do_not_conflict_with_compatible_food() {
    let dict = TermDictionary::builtin();
    assert!(!dict.patterns_for(TermKind::Preference, "Vegetarian").contains("milk"));
    assert!(!dict.patterns_for(TermKind::Preference, "Pescatarian").contains("fish"));
    assert!(!dict.patterns_for(TermKind::Preference, "Vegan").contains("vegan"));
}

#[test]
fn lookalike_ingredients_do_not_trigger_terms() {
    // Array of (kind, term, ingredient text)
    let cases: Vec<(TermKind, &str, &str)> = vec![
        (TermKind::Allergen, "Milk", "Cocoa butter"),
        (TermKind::Allergen, "Milk", "Peanut butter"),
        (TermKind::Allergen, "Milk", "Shea butter, Coconut cream"),
        (TermKind::Allergen, "Milk", "Cream of tartar"),
        (TermKind::Allergen, "Milk", "Oat milk, Almond milk"),
        (TermKind::Allergen, "Wheat", "Rice flour, Coconut flour"),
        (TermKind::Allergen, "Wheat", "Almond flour"),
        (TermKind::Allergen, "Wheat", "Buckwheat flour"),
        (TermKind::Preference, "Vegan", "Cocoa butter"),
        (TermKind::Preference, "Vegan", "Coconut milk"),
        (TermKind::Preference, "Dairy-Free", "Peanut butter, Soy milk"),
    ];

    for (kind, term, text) in cases {
        let profile = match kind {
            TermKind::Allergen => Profile::new("p1", "Ana").with_allergies([term]),
            TermKind::Preference => Profile::new("p1", "Ana").with_preferences([term]),
        };
        let result = analyze(text, &[profile]).unwrap();
        assert_eq!(result.status, Status::Safe, "{} flagged {:?}", term, text);
    }
}

#[test]
fn real_ingredients_still_trigger_terms() {
    // Array of (allergy, ingredient text)
    let cases: Vec<(&str, &str)> = vec![
        ("Milk", "Butter"),
        ("Milk", "Cocoa butter, Cream"),
        ("Milk", "Ice cream"),
        ("Wheat", "Flour"),
        ("Wheat", "Wheat flour"),
        ("Wheat", "Rice flour, Flour"),
        ("Gluten", "Brewer's yeast"),
        ("Gluten", "Brewer\u{2019}s yeast"),
        ("Gluten", "BREWER\u{2019}S  YEAST"),
    ];

    for (allergy, text) in cases {
        let result = analyze(text, &[Profile::new("p1", "Ana").with_allergies([allergy])]).unwrap();
        assert_eq!(result.status, Status::Unsafe, "{} missed in {:?}", allergy, text);
        assert_eq!(result.profiles[0].matched_allergens, vec![allergy.to_string()]);
    }
}
