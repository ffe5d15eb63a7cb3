//! Text normalization.
//!
//! Ingredient panels arrive as one free-form block ("Wheat flour, Sugar,
//! Milk, Salt"). The normalizer splits that block into candidate ingredient
//! tokens:
//!
//! ```text
//! "Ingredients: Wheat flour, Sugar;\n Milk ,, Salt"
//!    └─ label dropped
//!  ──▶ ["Wheat flour", "Sugar", "Milk", "Salt"]
//! ```
//!
//! Original casing is kept for display; matching uses the lower-cased
//! `comparison` form. Empty or whitespace-only input yields no tokens, which
//! the API reports as `Error::EmptyInput` rather than a clean result.

use crate::IngredientToken;

/// Split free-form ingredient text into ordered tokens.
///
/// Separators are commas, semicolons and line breaks. A leading
/// `Ingredients:` label is dropped from the first token.
pub fn normalize(text: &str) -> Vec<IngredientToken> {
    let body = regex!(r"(?i)^\s*ingredients?\s*:").replace(text, "");
    let parts: Vec<&str> = regex!(r"[,;\r\n]+").split(&body).collect();
    tokens_from_list(&parts)
}

/// Matching form of a text: lower-cased, whitespace runs collapsed to one
/// space, typographic apostrophes folded to `'`.
///
/// Tokens, dictionary patterns and lookup keys all go through this, so OCR
/// noise like `"Brazil  nuts"` or `"Brewer’s yeast"` still lines up with
/// `"brazil nuts"` and `"brewer's yeast"`.
pub(crate) fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{02BC}' => '\'',
            c => c,
        }));
    }
    out.to_lowercase()
}

/// Build tokens from an already-split ingredient list.
///
/// Entries are trimmed and blank ones dropped; indexes are assigned after
/// dropping so they stay contiguous.
pub(crate) fn tokens_from_list<S: AsRef<str>>(items: &[S]) -> Vec<IngredientToken> {
    items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .enumerate()
        .map(|(index, item)| IngredientToken::new(index, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[IngredientToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn splits_on_commas_and_trims() {
        let tokens = normalize("Wheat flour, Sugar,Milk ,  Salt");
        assert_eq!(texts(&tokens), vec!["Wheat flour", "Sugar", "Milk", "Salt"]);
        assert_eq!(tokens[0].comparison, "wheat flour");
        assert_eq!(tokens.iter().map(|t| t.index).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn splits_on_semicolons_and_newlines() {
        let tokens = normalize("Water; Sugar\nCocoa Butter\r\nSoy Lecithin");
        assert_eq!(texts(&tokens), vec!["Water", "Sugar", "Cocoa Butter", "Soy Lecithin"]);
    }

    #[test]
    fn drops_empty_tokens() {
        let tokens = normalize(",, Sugar ,\n\n; ,Salt,");
        assert_eq!(texts(&tokens), vec!["Sugar", "Salt"]);
        assert_eq!(tokens[1].index, 1);
    }

    #[test]
    fn drops_leading_label() {
        let tokens = normalize("INGREDIENTS: Oats, Honey");
        assert_eq!(texts(&tokens), vec!["Oats", "Honey"]);

        // Only a leading label is stripped.
        let tokens = normalize("Oats, Ingredients: none");
        assert_eq!(texts(&tokens), vec!["Oats", "Ingredients: none"]);
    }

    #[test]
    fn preserves_original_casing() {
        let tokens = normalize("Crème Fraîche");
        assert_eq!(tokens[0].text, "Crème Fraîche");
        assert_eq!(tokens[0].comparison, "crème fraîche");
    }

    #[test]
    fn comparison_folds_whitespace_and_apostrophes() {
        let tokens = normalize("Brazil  nuts, Palm\toil, Brewer’s  Yeast");
        assert_eq!(texts(&tokens), vec!["Brazil  nuts", "Palm\toil", "Brewer’s  Yeast"]);

        let comparisons: Vec<&str> = tokens.iter().map(|t| t.comparison.as_str()).collect();
        assert_eq!(comparisons, vec!["brazil nuts", "palm oil", "brewer's yeast"]);
    }

    #[test]
    fn fold_is_idempotent() {
        for text in ["  Sulfur \t dioxide ", "Brewer‘s", "ÉCLAIR", ""] {
            assert_eq!(fold(&fold(text)), fold(text));
        }
        assert_eq!(fold(" Sulfur \t DIOXIDE "), "sulfur dioxide");
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t ").is_empty());
        assert!(normalize(" , ; ").is_empty());
        assert!(normalize("Ingredients:").is_empty());
    }
}
