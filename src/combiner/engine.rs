//! Combining engine
//!
//! Runs the whole pipeline: parse every item, bucket by family, merge each
//! bucket, build display names, sort for shopping. The engine holds only
//! shared read-only registries and an ID source, so one instance can serve
//! concurrent calls.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use super::aggregator::{group, FamilyGroup};
use super::categorizer::infer_section;
use super::display;
use super::ids::{IdGenerator, UuidIds};
use super::matcher::resolve;
use super::merger::{merge_detailed, MergeOutcome};
use super::normalizer::{
    extract_preparations, extract_qualities, extract_quantity, union_keywords, PREPARATIONS,
    QUALITIES,
};
use super::sorter;
use crate::models::{CombinedItem, GroceryItem, MergeStatus, ParsedQuantity};
use crate::registry::Registries;

/// Everything the engine reads from one item string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedLine {
    pub text: String,
    pub quantity: ParsedQuantity,
    pub preparations: Vec<&'static str>,
    pub qualities: Vec<&'static str>,
    pub family: String,
    pub section: &'static str,
    pub has_conversion_table: bool,
}

/// Grocery list combining engine
#[derive(Clone)]
pub struct CombineEngine {
    registries: Registries,
    ids: Arc<dyn IdGenerator>,
}

impl CombineEngine {
    pub fn new(registries: Registries, ids: Arc<dyn IdGenerator>) -> Self {
        Self { registries, ids }
    }

    /// Built-in registries and random IDs
    pub fn with_builtin_registries() -> Self {
        Self::new(Registries::builtin(), Arc::new(UuidIds))
    }

    /// Same registries, different ID source
    pub fn with_id_generator(&self, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            registries: self.registries.clone(),
            ids,
        }
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    /// Parse a single line without combining anything
    pub fn parse_line(&self, text: &str) -> ParsedLine {
        let families = &self.registries.families;
        let family = resolve(text, families);
        ParsedLine {
            text: text.to_string(),
            quantity: extract_quantity(text, families),
            preparations: extract_preparations(text),
            qualities: extract_qualities(text),
            section: infer_section(&family, families).as_str(),
            has_conversion_table: self.registries.conversions.get(&family).is_some(),
            family,
        }
    }

    /// Combine grocery items into a sorted shopping list.
    ///
    /// Never fails: unknown ingredients become their own entry and
    /// irreconcilable units are reported through [`MergeStatus::Ambiguous`].
    pub fn combine(&self, items: &[GroceryItem]) -> Vec<CombinedItem> {
        let groups = group(items, &self.registries.families);
        tracing::debug!(
            items = items.len(),
            groups = groups.len(),
            "Grouped grocery items"
        );

        let combined = groups
            .iter()
            .enumerate()
            .map(|(index, g)| self.combine_group(index, g))
            .collect();

        sorter::sort(combined)
    }

    fn combine_group(&self, index: usize, group: &FamilyGroup<'_>) -> CombinedItem {
        let items = &group.items;
        let source_item_ids = items.iter().map(|i| i.id.clone()).collect();
        let checked = items.iter().any(|i| i.checked);
        let recipe_ids: BTreeSet<String> = items
            .iter()
            .filter_map(|i| i.recipe_ids.as_ref())
            .flatten()
            .cloned()
            .collect();
        let section = items
            .iter()
            .filter_map(|i| i.section.as_deref())
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                infer_section(&group.family, &self.registries.families)
                    .as_str()
                    .to_string()
            });

        let (display_name, merge_status, quantity_breakdown) = if items.len() == 1 {
            (items[0].raw_name.trim().to_string(), MergeStatus::Single, Vec::new())
        } else {
            self.merge_group(group)
        };

        CombinedItem {
            id: self.ids.generate(index),
            display_name,
            checked,
            is_combined: items.len() > 1,
            source_item_ids,
            family: group.family.clone(),
            section,
            recipe_ids,
            merge_status,
            quantity_breakdown,
        }
    }

    fn merge_group(&self, group: &FamilyGroup<'_>) -> (String, MergeStatus, Vec<String>) {
        let families = &self.registries.families;

        let quantities: Vec<ParsedQuantity> = group
            .items
            .iter()
            .map(|i| extract_quantity(&i.raw_name, families))
            .collect();
        let preparation_lists: Vec<Vec<&'static str>> =
            group.items.iter().map(|i| extract_preparations(&i.raw_name)).collect();
        let quality_lists: Vec<Vec<&'static str>> =
            group.items.iter().map(|i| extract_qualities(&i.raw_name)).collect();

        let preparations = union_keywords(&preparation_lists, PREPARATIONS);
        let qualities = union_keywords(&quality_lists, QUALITIES);

        let outcome = merge_detailed(&group.family, &quantities, &self.registries.conversions);
        let display_name = display::build(&group.family, outcome.quantity(), &preparations, &qualities);

        let status = match outcome {
            MergeOutcome::Merged(_) => MergeStatus::Exact,
            MergeOutcome::Estimated { .. } => MergeStatus::Estimated,
            MergeOutcome::Ambiguous { .. } => MergeStatus::Ambiguous,
        };
        let breakdown = match status {
            MergeStatus::Exact | MergeStatus::Single => Vec::new(),
            MergeStatus::Estimated | MergeStatus::Ambiguous => {
                quantities.iter().map(ParsedQuantity::to_string).collect()
            }
        };

        tracing::debug!(
            family = %group.family,
            sources = group.items.len(),
            status = status.as_str(),
            "Merged family"
        );

        (display_name, status, breakdown)
    }
}

impl Default for CombineEngine {
    fn default() -> Self {
        Self::with_builtin_registries()
    }
}

impl std::fmt::Debug for CombineEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombineEngine")
            .field("families", &self.registries.families.len())
            .field("conversions", &self.registries.conversions.len())
            .finish()
    }
}
