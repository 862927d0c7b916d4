//! Registry files
//!
//! Loads replacement registries from JSON:
//!
//! ```json
//! {
//!   "families": [{"name": "garlic", "variations": ["garlic"], "section": "produce"}],
//!   "conversions": [{"family": "garlic", "base_unit": "cloves",
//!                    "multipliers": [{"unit": "head", "factor": 10.0}]}]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::{ConversionRegistry, ConversionTable, FamilyRegistry, IngredientFamily, Registries, RegistryResult};

#[derive(Debug, Deserialize)]
struct RegistryFile {
    families: Vec<IngredientFamily>,
    #[serde(default)]
    conversions: Vec<ConversionTable>,
}

/// Parse and validate registries from a JSON document
pub fn parse_registries(json: &str) -> RegistryResult<Registries> {
    let file: RegistryFile = serde_json::from_str(json)?;
    let families = FamilyRegistry::new(file.families)?;
    let conversions = ConversionRegistry::new(file.conversions)?;
    Registries::new(families, conversions)
}

/// Read registries from a JSON file
pub fn load_registries<P: AsRef<Path>>(path: P) -> RegistryResult<Registries> {
    let json = std::fs::read_to_string(path.as_ref())?;
    let registries = parse_registries(&json)?;
    tracing::info!(
        path = %path.as_ref().display(),
        families = registries.families.len(),
        tables = registries.conversions.len(),
        "Loaded registry file"
    );
    Ok(registries)
}
