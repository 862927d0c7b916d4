//! Item text normalization
//!
//! Pulls the quantity, preparation and quality keywords out of a raw grocery
//! line. Nothing here fails: text without a number is one of something.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ParsedQuantity;
use crate::registry::FamilyRegistry;

/// Cutting/processing descriptors, in display order
pub const PREPARATIONS: &[&str] = &[
    "minced", "chopped", "diced", "sliced", "crushed", "grated", "shredded", "julienned", "cubed",
    "whole",
];

/// Sourcing/state descriptors, in display order
pub const QUALITIES: &[&str] = &["fresh", "dried", "canned", "frozen", "jarred", "organic"];

/// Unit tokens that really mean "a count of the thing"
const COUNT_WORDS: &[&str] = &["whole", "count", "piece", "pieces", "item", "items"];

/// Adjectives that get captured in the unit position ("2 large eggs")
const DESCRIPTORS: &[&str] = &[
    "large", "medium", "small", "fresh", "dried", "frozen", "raw", "cooked", "ripe", "organic",
    "free-range", "yellow", "red", "white", "green", "sweet",
];

const UNIT: &str = r"[a-z]+(?:-[a-z]+)*";

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(\d+(?:\.\d+)?)\s*-\s*(\d+(?:\.\d+)?)(?:\s*({UNIT}))?"))
        .expect("range pattern")
});

static FRACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(\d+)\s*/\s*(\d+)(?:\s*({UNIT}))?")).expect("fraction pattern")
});

static NUMBER_UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(\d+(?:\.\d+)?)\s*({UNIT})")).expect("number-unit pattern")
});

static BARE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+(?:\.\d+)?)").expect("number pattern"));

/// Extract the quantity from an item string.
///
/// Patterns are tried in priority order: range ("1-2 cups", averaged),
/// fraction ("1/2 cup"), number with unit ("3 cloves"), bare number ("3").
/// The unit is then normalized with [`normalize_unit`].
pub fn extract_quantity(text: &str, families: &FamilyRegistry) -> ParsedQuantity {
    let lower = text.to_lowercase();

    let raw = match_range(&lower)
        .or_else(|| match_fraction(&lower))
        .or_else(|| match_number_unit(&lower))
        .or_else(|| match_bare_number(&lower));

    match raw {
        Some((amount, unit)) => ParsedQuantity::new(amount, normalize_unit(&unit, families)),
        None => ParsedQuantity::default(),
    }
}

fn match_range(text: &str) -> Option<(f64, String)> {
    let caps = RANGE_RE.captures(text)?;
    let low: f64 = caps[1].parse().ok()?;
    let high: f64 = caps[2].parse().ok()?;
    let unit = caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default();
    Some(((low + high) / 2.0, unit))
}

fn match_fraction(text: &str) -> Option<(f64, String)> {
    let caps = FRACTION_RE.captures(text)?;
    let numerator: f64 = caps[1].parse().ok()?;
    let denominator: f64 = caps[2].parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    let unit = caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default();
    Some((numerator / denominator, unit))
}

fn match_number_unit(text: &str) -> Option<(f64, String)> {
    let caps = NUMBER_UNIT_RE.captures(text)?;
    let amount: f64 = caps[1].parse().ok()?;
    Some((amount, caps[2].to_string()))
}

fn match_bare_number(text: &str) -> Option<(f64, String)> {
    let caps = BARE_NUMBER_RE.captures(text)?;
    let amount: f64 = caps[1].parse().ok()?;
    Some((amount, String::new()))
}

/// Map count words, descriptive adjectives and ingredient names to `""`.
///
/// "6 eggs" parses with "eggs" in the unit slot; it is the ingredient, not a unit.
pub fn normalize_unit(unit: &str, families: &FamilyRegistry) -> String {
    let unit = unit.trim().to_lowercase();
    if COUNT_WORDS.contains(&unit.as_str())
        || DESCRIPTORS.contains(&unit.as_str())
        || families.is_known_term(&unit)
    {
        String::new()
    } else {
        unit
    }
}

/// Preparation keywords present in the text, in [`PREPARATIONS`] order
pub fn extract_preparations(text: &str) -> Vec<&'static str> {
    scan_keywords(text, PREPARATIONS)
}

/// Quality keywords present in the text, in [`QUALITIES`] order
pub fn extract_qualities(text: &str) -> Vec<&'static str> {
    scan_keywords(text, QUALITIES)
}

fn scan_keywords(text: &str, keywords: &[&'static str]) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric() && c != '-')
        .filter(|w| !w.is_empty())
        .collect();

    keywords
        .iter()
        .copied()
        .filter(|k| words.contains(k))
        .collect()
}

/// Union of keyword lists, kept in the order of `keywords`
pub fn union_keywords<'a, I>(lists: I, keywords: &[&'static str]) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a Vec<&'static str>>,
{
    let found: Vec<&'static str> = lists.into_iter().flatten().copied().collect();
    keywords
        .iter()
        .copied()
        .filter(|k| found.contains(k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn families() -> FamilyRegistry {
        FamilyRegistry::builtin()
    }

    #[test]
    fn test_range_is_averaged() {
        let q = extract_quantity("1-2 cups flour", &families());
        assert_eq!(q, ParsedQuantity::new(1.5, "cups"));

        let q = extract_quantity("2 - 3 tomatoes", &families());
        assert_eq!(q, ParsedQuantity::count(2.5));
    }

    #[test]
    fn test_fraction() {
        let q = extract_quantity("1/2 cup sugar", &families());
        assert_eq!(q, ParsedQuantity::new(0.5, "cup"));
    }

    #[test]
    fn test_fraction_with_zero_denominator_falls_through() {
        let q = extract_quantity("1/0 cup sugar", &families());
        assert_eq!(q, ParsedQuantity::new(0.0, "cup"));
    }

    #[test]
    fn test_number_with_unit() {
        let q = extract_quantity("2 cloves garlic", &families());
        assert_eq!(q, ParsedQuantity::new(2.0, "cloves"));

        let q = extract_quantity("Minced garlic, 2 Tablespoons", &families());
        assert_eq!(q, ParsedQuantity::new(2.0, "tablespoons"));

        let q = extract_quantity("250g flour", &families());
        assert_eq!(q, ParsedQuantity::new(250.0, "g"));
    }

    #[test]
    fn test_bare_number() {
        let q = extract_quantity("salt 3", &families());
        assert_eq!(q, ParsedQuantity::count(3.0));
    }

    #[test]
    fn test_no_number_defaults_to_one() {
        assert_eq!(extract_quantity("garlic", &families()), ParsedQuantity::count(1.0));
        assert_eq!(extract_quantity("", &families()), ParsedQuantity::count(1.0));
    }

    #[test]
    fn test_count_words_and_descriptors_demoted() {
        assert_eq!(extract_quantity("2 large eggs", &families()), ParsedQuantity::count(2.0));
        assert_eq!(extract_quantity("3 whole carrots", &families()), ParsedQuantity::count(3.0));
        assert_eq!(
            extract_quantity("6 free-range eggs", &families()),
            ParsedQuantity::count(6.0)
        );
    }

    #[test]
    fn test_family_terms_demoted() {
        assert_eq!(extract_quantity("6 eggs", &families()), ParsedQuantity::count(6.0));
        assert_eq!(extract_quantity("2 tomatoes", &families()), ParsedQuantity::count(2.0));
    }

    #[test]
    fn test_word_boundary_on_numbers() {
        assert_eq!(extract_quantity("v8 juice", &families()), ParsedQuantity::count(1.0));
    }

    #[test]
    fn test_extract_preparations() {
        assert_eq!(extract_preparations("minced garlic, 2 tablespoons"), vec!["minced"]);
        assert_eq!(
            extract_preparations("1 onion, diced or chopped"),
            vec!["chopped", "diced"]
        );
        assert!(extract_preparations("2 cups mincedmeat").is_empty());
    }

    #[test]
    fn test_extract_qualities() {
        assert_eq!(extract_qualities("Fresh organic basil"), vec!["fresh", "organic"]);
        assert!(extract_qualities("basil").is_empty());
    }

    #[test]
    fn test_union_keywords_keeps_list_order() {
        let a = vec!["sliced"];
        let b = vec!["minced", "sliced"];
        assert_eq!(union_keywords([&a, &b], PREPARATIONS), vec!["minced", "sliced"]);
    }
}
