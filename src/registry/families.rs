//! Ingredient families
//!
//! A family is the canonical identity shared by every spelling of an
//! ingredient ("garlic", "garlic cloves", "cloves of garlic").

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::builtin::BUILTIN_FAMILIES;
use super::{RegistryError, RegistryResult};
use crate::models::Section;

/// Canonical ingredient name with its known spellings, in match order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientFamily {
    pub name: String,
    pub variations: Vec<String>,
    #[serde(default)]
    pub section: Section,
}

impl IngredientFamily {
    pub fn new<I, S>(name: impl Into<String>, variations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            variations: variations.into_iter().map(Into::into).collect(),
            section: Section::Other,
        }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }
}

/// Ordered family table. Declaration order decides ties during matching.
#[derive(Debug, Clone, Default)]
pub struct FamilyRegistry {
    families: Vec<IngredientFamily>,
    /// Every family name and variation, for unit demotion lookups
    known_terms: HashSet<String>,
}

impl FamilyRegistry {
    /// Build a registry from families in match order.
    ///
    /// Names and variations are trimmed and lower-cased; the match rules
    /// compare against lower-cased item text.
    pub fn new(families: Vec<IngredientFamily>) -> RegistryResult<Self> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(families.len());

        for family in families {
            let name = family.name.trim().to_lowercase();
            if name.is_empty() {
                return Err(RegistryError::EmptyFamilyName);
            }
            if !seen.insert(name.clone()) {
                return Err(RegistryError::DuplicateFamily(name));
            }

            let variations: Vec<String> = family
                .variations
                .iter()
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .collect();
            if variations.is_empty() {
                return Err(RegistryError::NoVariations(name));
            }

            normalized.push(IngredientFamily {
                name,
                variations,
                section: family.section,
            });
        }

        Ok(Self::from_normalized(normalized))
    }

    /// The families compiled into the binary
    pub fn builtin() -> Self {
        let families = BUILTIN_FAMILIES
            .iter()
            .map(|(name, section, variations)| {
                IngredientFamily::new(*name, variations.iter().copied()).with_section(*section)
            })
            .collect();
        Self::from_normalized(families)
    }

    fn from_normalized(families: Vec<IngredientFamily>) -> Self {
        let known_terms = families
            .iter()
            .flat_map(|f| std::iter::once(&f.name).chain(f.variations.iter()))
            .cloned()
            .collect();
        Self {
            families,
            known_terms,
        }
    }

    pub fn families(&self) -> &[IngredientFamily] {
        &self.families
    }

    pub fn get(&self, name: &str) -> Option<&IngredientFamily> {
        self.families.iter().find(|f| f.name == name)
    }

    /// Whether `term` is exactly a family name or one of its variations
    pub fn is_known_term(&self, term: &str) -> bool {
        self.known_terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn variation_count(&self) -> usize {
        self.families.iter().map(|f| f.variations.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_case() {
        let registry =
            FamilyRegistry::new(vec![IngredientFamily::new(" Garlic ", ["Garlic", "GARLIC CLOVES"])])
                .unwrap();
        let garlic = registry.get("garlic").unwrap();
        assert_eq!(garlic.variations, vec!["garlic", "garlic cloves"]);
        assert!(registry.is_known_term("garlic cloves"));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = FamilyRegistry::new(vec![
            IngredientFamily::new("egg", ["egg"]),
            IngredientFamily::new("Egg", ["eggs"]),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateFamily(name) if name == "egg"));
    }

    #[test]
    fn test_new_rejects_empty_name_and_variations() {
        assert!(matches!(
            FamilyRegistry::new(vec![IngredientFamily::new("  ", ["x"])]),
            Err(RegistryError::EmptyFamilyName)
        ));
        assert!(matches!(
            FamilyRegistry::new(vec![IngredientFamily::new("salt", [" "])]),
            Err(RegistryError::NoVariations(_))
        ));
    }

    #[test]
    fn test_builtin_order_is_declaration_order() {
        let registry = FamilyRegistry::builtin();
        let names: Vec<&str> = registry.families().iter().map(|f| f.name.as_str()).collect();
        let pos = |n: &str| names.iter().position(|x| *x == n).unwrap();
        assert!(pos("garlic") < pos("onion"));
        assert!(pos("onion") < pos("green onion"));
        assert!(pos("eggplant") < pos("egg"));
        assert!(pos("chicken broth") < pos("chicken"));
    }

    #[test]
    fn test_builtin_known_terms() {
        let registry = FamilyRegistry::builtin();
        assert!(registry.is_known_term("eggs"));
        assert!(registry.is_known_term("tomatoes"));
        assert!(!registry.is_known_term("cloves"));
        assert!(!registry.is_known_term("stick"));
    }
}
