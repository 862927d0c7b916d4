//! Combining MCP Tools
//!
//! Tools for combining grocery lists and inspecting how lines are parsed.

use serde::Serialize;

use crate::combiner::{CombineEngine, ParsedLine};
use crate::models::{CombinedItem, GroceryItem, MergeStatus};

/// Response for combine_grocery_items
#[derive(Debug, Serialize)]
pub struct CombineResponse {
    pub items: Vec<CombinedItem>,
    pub input_count: usize,
    pub output_count: usize,
    pub combined_count: usize,
    pub estimated_count: usize,
    pub ambiguous_count: usize,
}

/// Family summary for list_ingredient_families
#[derive(Debug, Serialize)]
pub struct FamilySummary {
    pub name: String,
    pub section: &'static str,
    pub variation_count: usize,
    pub base_unit: Option<String>,
}

/// Response for list_ingredient_families
#[derive(Debug, Serialize)]
pub struct ListFamiliesResponse {
    pub families: Vec<FamilySummary>,
    pub total: usize,
    pub conversion_tables: usize,
}

/// Combine grocery items into a sorted shopping list
pub fn combine_items(engine: &CombineEngine, items: &[GroceryItem]) -> CombineResponse {
    let combined = engine.combine(items);

    let count_status = |status: MergeStatus| combined.iter().filter(|c| c.merge_status == status).count();
    let combined_count = combined.iter().filter(|c| c.is_combined).count();
    let estimated_count = count_status(MergeStatus::Estimated);
    let ambiguous_count = count_status(MergeStatus::Ambiguous);

    tracing::info!(
        input = items.len(),
        output = combined.len(),
        combined = combined_count,
        "Combined grocery list"
    );

    CombineResponse {
        input_count: items.len(),
        output_count: combined.len(),
        combined_count,
        estimated_count,
        ambiguous_count,
        items: combined,
    }
}

/// Show how the engine reads a single line
pub fn parse_line(engine: &CombineEngine, text: &str) -> ParsedLine {
    engine.parse_line(text)
}

/// List registered families with their conversion base units
pub fn list_families(engine: &CombineEngine) -> ListFamiliesResponse {
    let registries = engine.registries();
    let families: Vec<FamilySummary> = registries
        .families
        .families()
        .iter()
        .map(|f| FamilySummary {
            name: f.name.clone(),
            section: f.section.as_str(),
            variation_count: f.variations.len(),
            base_unit: registries.conversions.get(&f.name).map(|t| t.base_unit.clone()),
        })
        .collect();

    ListFamiliesResponse {
        total: families.len(),
        conversion_tables: registries.conversions.len(),
        families,
    }
}
