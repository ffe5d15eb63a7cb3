use serde::{Deserialize, Serialize};

/// Structured label data from a product database lookup.
///
/// Declared allergens are checked the same way as ingredients: each becomes a
/// `Contains: X` entry after the ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductLabel {
    pub ingredients: Vec<String>,
    pub allergens: Vec<String>,
}

impl ProductLabel {
    /// Render as one ingredient text block.
    pub fn to_text(&self) -> String {
        let ingredients = self.ingredients.iter().map(|i| i.trim()).filter(|i| !i.is_empty()).map(str::to_string);
        let allergens = self
            .allergens
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .map(|a| format!("Contains: {a}"));

        ingredients.chain(allergens).collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allergens_follow_ingredients() {
        let label = ProductLabel {
            ingredients: vec!["Sugar".into(), " Cocoa butter ".into()],
            allergens: vec!["Milk".into(), "Soy".into()],
        };
        assert_eq!(label.to_text(), "Sugar, Cocoa butter, Contains: Milk, Contains: Soy");
    }

    #[test]
    fn empty_label_is_empty_text() {
        assert_eq!(ProductLabel::default().to_text(), "");
        let label = ProductLabel { ingredients: vec![" ".into()], allergens: vec![] };
        assert_eq!(label.to_text(), "");
    }
}
