//! Grocery item model
//!
//! One entry of the grocery list as handed over by the list store.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A raw grocery list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub id: String,
    pub raw_name: String,
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_ids: Option<BTreeSet<String>>,
}

impl GroceryItem {
    pub fn new(id: impl Into<String>, raw_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_name: raw_name.into(),
            checked: false,
            section: None,
            recipe_ids: None,
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_recipe_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipe_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }
}
