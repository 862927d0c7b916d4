//! Family resolution
//!
//! Maps item text to a canonical family. Resolution depends only on the text,
//! never on list position, so the same words always land in the same bucket.

use crate::registry::FamilyRegistry;

/// Words that describe amounts or containers, not ingredients
const FALLBACK_STOPWORDS: &[&str] = &[
    "cup", "cups", "tablespoon", "tablespoons", "tbsp", "tsp", "teaspoon", "teaspoons", "ounce",
    "ounces", "oz", "pound", "pounds", "lb", "lbs", "gram", "grams", "kilogram", "kg", "clove",
    "cloves", "head", "heads", "piece", "pieces", "can", "cans", "jar", "jars", "package",
    "packages", "small", "medium", "large", "whole", "half",
];

/// How a variation matched the item text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    Exact,
    /// The text contains the variation ("2 cloves garlic" ⊇ "garlic")
    TextContainsVariation,
    /// The variation contains the text ("tomatoes" ⊇ "tomato")
    VariationContainsText,
}

impl MatchRule {
    /// Rules in priority order
    pub const PRIORITY: [MatchRule; 3] = [
        MatchRule::Exact,
        MatchRule::TextContainsVariation,
        MatchRule::VariationContainsText,
    ];

    fn matches(&self, text: &str, variation: &str) -> bool {
        match self {
            MatchRule::Exact => text == variation,
            MatchRule::TextContainsVariation => text.contains(variation),
            MatchRule::VariationContainsText => variation.contains(text),
        }
    }
}

/// Resolve item text to a family name.
///
/// Families are walked in declared order, and each variation is tested
/// against every rule in [`MatchRule::PRIORITY`] before moving on; the first
/// family with any matching variation wins. Unmatched text falls back to
/// [`fallback_family`].
pub fn resolve(text: &str, families: &FamilyRegistry) -> String {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return needle;
    }

    match registry_match(&needle, families) {
        Some((family, _)) => family.to_string(),
        None => fallback_family(&needle),
    }
}

/// First registry family matching the (trimmed, lower-cased) text, with the rule used
pub fn registry_match<'r>(needle: &str, families: &'r FamilyRegistry) -> Option<(&'r str, MatchRule)> {
    families.families().iter().find_map(|family| {
        family.variations.iter().find_map(|variation| {
            MatchRule::PRIORITY
                .iter()
                .find(|rule| rule.matches(needle, variation))
                .map(|rule| (family.name.as_str(), *rule))
        })
    })
}

/// Heuristic family for text no registry entry matches.
///
/// Punctuation is stripped, quantity words and tokens of two characters or
/// fewer are dropped, and the last remaining word is the family
/// ("2 cups chopped kohlrabi" → "kohlrabi"). With nothing left the trimmed
/// text itself is used.
pub fn fallback_family(text: &str) -> String {
    let trimmed = text.trim();
    let cleaned: String = trimmed
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| !FALLBACK_STOPWORDS.contains(token))
        .filter(|token| token.chars().count() > 2)
        .last()
        .map(str::to_string)
        .unwrap_or_else(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::IngredientFamily;

    fn families() -> FamilyRegistry {
        FamilyRegistry::builtin()
    }

    #[test]
    fn test_resolve_exact_and_contains() {
        let f = families();
        assert_eq!(resolve("garlic", &f), "garlic");
        assert_eq!(resolve("2 cloves garlic", &f), "garlic");
        assert_eq!(resolve("minced garlic, 2 tablespoons", &f), "garlic");
        assert_eq!(resolve("  2 Tomatoes ", &f), "tomato");
    }

    #[test]
    fn test_builtin_compound_names() {
        let f = families();
        assert_eq!(resolve("1 stick butter", &f), "butter");
        assert_eq!(resolve("1 eggplant", &f), "eggplant");
        assert_eq!(resolve("2 eggs", &f), "egg");
        assert_eq!(resolve("3 scallions", &f), "green onion");
        assert_eq!(resolve("4 cups chicken broth", &f), "chicken broth");
        assert_eq!(resolve("1 lb chicken breasts", &f), "chicken");
        assert_eq!(resolve("salt and pepper", &f), "salt");
        assert_eq!(resolve("pepper", &f), "black pepper");
    }

    #[test]
    fn test_builtin_variations_resolve_to_own_family() {
        let f = families();
        for family in f.families() {
            for variation in &family.variations {
                let line = format!("1 {}", variation);
                assert_eq!(resolve(&line, &f), family.name, "{}", line);
            }
        }
    }

    #[test]
    fn test_earlier_family_wins_through_any_rule() {
        // "tomato" is inside the first family's variation, so it wins even
        // though the second family matches exactly
        let registry = FamilyRegistry::new(vec![
            IngredientFamily::new("tomato sauce", ["tomato sauce"]),
            IngredientFamily::new("tomato", ["tomato"]),
        ])
        .unwrap();
        assert_eq!(resolve("tomato", &registry), "tomato sauce");
        assert_eq!(
            registry_match("tomato", &registry),
            Some(("tomato sauce", MatchRule::VariationContainsText))
        );
        assert_eq!(resolve("2 cans tomato sauce", &registry), "tomato sauce");
    }

    #[test]
    fn test_rules_tried_per_variation_in_order() {
        let registry = FamilyRegistry::new(vec![IngredientFamily::new(
            "tomato",
            ["tomatoes", "tomato"],
        )])
        .unwrap();
        // first variation already matches by containment
        assert_eq!(
            registry_match("tomato", &registry),
            Some(("tomato", MatchRule::VariationContainsText))
        );
    }

    #[test]
    fn test_first_declared_family_wins() {
        let registry = FamilyRegistry::new(vec![
            IngredientFamily::new("first", ["stock"]),
            IngredientFamily::new("second", ["stock"]),
        ])
        .unwrap();
        assert_eq!(resolve("chicken stock", &registry), "first");
    }

    #[test]
    fn test_fallback_takes_last_meaningful_token() {
        let f = families();
        assert_eq!(resolve("2 cups chopped kohlrabi", &f), "kohlrabi");
        assert_eq!(resolve("1 can of chickpeas.", &f), "chickpeas");
    }

    #[test]
    fn test_fallback_keeps_number_tokens() {
        assert_eq!(fallback_family("kohlrabi, 250"), "250");
        assert_eq!(fallback_family("quinoa 200"), "200");
        assert_eq!(fallback_family("quinoa 20"), "quinoa");
    }

    #[test]
    fn test_fallback_keeps_text_when_nothing_remains() {
        assert_eq!(fallback_family("2 cups"), "2 cups");
        assert_eq!(fallback_family("  xo  "), "xo");
    }

    #[test]
    fn test_resolve_empty_text() {
        assert_eq!(resolve("   ", &families()), "");
    }

    #[test]
    fn test_resolve_is_pure() {
        let f = families();
        let a = resolve("1 head garlic", &f);
        let b = resolve("1 head garlic", &f);
        assert_eq!(a, b);
    }
}
