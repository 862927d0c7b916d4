//! Ingredient knowledge base
//!
//! Family synonyms and per-family unit conversion tables. Both registries are
//! built once and shared read-only between calls.

mod builtin;
mod conversions;
mod families;
mod loader;

use std::sync::Arc;

use thiserror::Error;

pub use conversions::{ConversionRegistry, ConversionTable, UnitFactor};
pub use families::{FamilyRegistry, IngredientFamily};
pub use loader::{load_registries, parse_registries};

/// Registry construction errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Family name cannot be empty")]
    EmptyFamilyName,

    #[error("Duplicate family: {0}")]
    DuplicateFamily(String),

    #[error("Family '{0}' has no variations")]
    NoVariations(String),

    #[error("Duplicate conversion table for family: {0}")]
    DuplicateTable(String),

    #[error("Conversion table for unknown family: {0}")]
    UnknownFamily(String),

    #[error("Invalid factor {factor} for unit '{unit}' in family '{family}'")]
    InvalidFactor {
        family: String,
        unit: String,
        factor: f64,
    },

    #[error("Registry file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Registry parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for registry construction
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Both registries, as handed to the engine
#[derive(Debug, Clone)]
pub struct Registries {
    pub families: Arc<FamilyRegistry>,
    pub conversions: Arc<ConversionRegistry>,
}

impl Registries {
    /// Pair two registries, checking every conversion table names a known family
    pub fn new(families: FamilyRegistry, conversions: ConversionRegistry) -> RegistryResult<Self> {
        for table in conversions.tables() {
            if families.get(&table.family).is_none() {
                return Err(RegistryError::UnknownFamily(table.family.clone()));
            }
        }

        Ok(Self {
            families: Arc::new(families),
            conversions: Arc::new(conversions),
        })
    }

    /// The registries compiled into the binary
    pub fn builtin() -> Self {
        Self {
            families: Arc::new(FamilyRegistry::builtin()),
            conversions: Arc::new(ConversionRegistry::builtin()),
        }
    }
}

impl Default for Registries {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_validation() {
        let families = FamilyRegistry::new(FamilyRegistry::builtin().families().to_vec())
            .expect("builtin families should validate");
        let conversions = ConversionRegistry::new(ConversionRegistry::builtin().tables().to_vec())
            .expect("builtin conversions should validate");
        Registries::new(families, conversions).expect("builtin tables should name known families");
    }

    #[test]
    fn test_table_for_unknown_family_rejected() {
        let families = FamilyRegistry::new(vec![IngredientFamily::new("salt", ["salt"])]).unwrap();
        let conversions = ConversionRegistry::new(vec![ConversionTable::new(
            "flour",
            "cup",
            vec![UnitFactor::new("cups", 1.0)],
        )])
        .unwrap();

        let err = Registries::new(families, conversions).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownFamily(f) if f == "flour"));
    }
}
