//! Combined item model
//!
//! A shopping-ready line synthesized from one or more grocery items.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How the quantities behind a combined item were reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MergeStatus {
    /// Only one source item; its text is shown as-is
    #[default]
    Single,
    /// All quantities converted or shared a unit
    Exact,
    /// A unit outside the family's conversion table was counted as the base unit
    Estimated,
    /// Units could not be reconciled; no total is shown
    Ambiguous,
}

impl MergeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeStatus::Single => "single",
            MergeStatus::Exact => "exact",
            MergeStatus::Estimated => "estimated",
            MergeStatus::Ambiguous => "ambiguous",
        }
    }
}

/// An entry of the combined shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedItem {
    /// Synthetic, only unique per call
    pub id: String,
    pub display_name: String,
    pub checked: bool,
    pub is_combined: bool,
    pub source_item_ids: Vec<String>,
    pub family: String,
    pub section: String,
    pub recipe_ids: BTreeSet<String>,
    pub merge_status: MergeStatus,
    /// Per-source quantities, filled in when the total is not exact
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quantity_breakdown: Vec<String>,
}
