//! Section inference
//!
//! Registered families carry their own section. Anything else is matched
//! against a keyword table, longest keyword first, so "coconut water" hits
//! before "water".

use std::sync::LazyLock;

use crate::models::Section;
use crate::registry::FamilyRegistry;

const KEYWORDS: &[(&str, Section)] = &[
    // Produce
    ("kale", Section::Produce),
    ("cabbage", Section::Produce),
    ("broccoli", Section::Produce),
    ("cauliflower", Section::Produce),
    ("zucchini", Section::Produce),
    ("cucumber", Section::Produce),
    ("squash", Section::Produce),
    ("shallot", Section::Produce),
    ("leek", Section::Produce),
    ("kohlrabi", Section::Produce),
    ("berries", Section::Produce),
    ("orange", Section::Produce),
    ("mango", Section::Produce),
    ("grapes", Section::Produce),
    ("mint", Section::Produce),
    ("thyme", Section::Produce),
    ("rosemary", Section::Produce),
    ("dill", Section::Produce),
    // Meat & seafood
    ("turkey", Section::MeatSeafood),
    ("lamb", Section::MeatSeafood),
    ("sausage", Section::MeatSeafood),
    ("chorizo", Section::MeatSeafood),
    ("prosciutto", Section::MeatSeafood),
    ("tuna", Section::MeatSeafood),
    ("cod", Section::MeatSeafood),
    ("scallops", Section::MeatSeafood),
    ("fish", Section::MeatSeafood),
    // Dairy
    ("ricotta", Section::Dairy),
    ("feta", Section::Dairy),
    ("mascarpone", Section::Dairy),
    ("creme fraiche", Section::Dairy),
    ("half-and-half", Section::Dairy),
    // Pantry
    ("chickpeas", Section::Pantry),
    ("lentils", Section::Pantry),
    ("beans", Section::Pantry),
    ("quinoa", Section::Pantry),
    ("oats", Section::Pantry),
    ("vinegar", Section::Pantry),
    ("mustard", Section::Pantry),
    ("ketchup", Section::Pantry),
    ("mayonnaise", Section::Pantry),
    ("cumin", Section::Pantry),
    ("paprika", Section::Pantry),
    ("cinnamon", Section::Pantry),
    ("oregano", Section::Pantry),
    ("nutmeg", Section::Pantry),
    ("cornstarch", Section::Pantry),
    ("yeast", Section::Pantry),
    ("cocoa", Section::Pantry),
    ("chocolate", Section::Pantry),
    ("almonds", Section::Pantry),
    ("walnuts", Section::Pantry),
    ("raisins", Section::Pantry),
    ("noodles", Section::Pantry),
    ("coconut water", Section::Pantry),
    ("water", Section::Other),
    // Frozen
    ("frozen", Section::Frozen),
    ("sorbet", Section::Frozen),
    // Bakery
    ("bagel", Section::Bakery),
    ("buns", Section::Bakery),
    ("rolls", Section::Bakery),
    ("croissant", Section::Bakery),
    ("pita", Section::Bakery),
];

/// Keyword table sorted by keyword length (longest first), ties alphabetical
static KEYWORDS_SORTED: LazyLock<Vec<(&'static str, Section)>> = LazyLock::new(|| {
    let mut keywords = KEYWORDS.to_vec();
    keywords.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
    keywords
});

/// Section for a family: the registry's when registered, otherwise by keyword
pub fn infer_section(family: &str, families: &FamilyRegistry) -> Section {
    if let Some(registered) = families.get(family) {
        return registered.section;
    }

    let lower = family.to_lowercase();
    KEYWORDS_SORTED
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, section)| *section)
        .unwrap_or(Section::Other)
}
