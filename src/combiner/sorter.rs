//! Shopping order

use std::cmp::Ordering;

use crate::models::{CombinedItem, Section};

/// Order entries by store section, then case-insensitively by display name.
///
/// The sort is stable: entries that compare equal keep their incoming order.
pub fn sort(mut items: Vec<CombinedItem>) -> Vec<CombinedItem> {
    items.sort_by(compare);
    items
}

fn compare(a: &CombinedItem, b: &CombinedItem) -> Ordering {
    let rank_a = Section::from_str(&a.section).rank();
    let rank_b = Section::from_str(&b.section).rank();
    rank_a
        .cmp(&rank_b)
        .then_with(|| a.display_name.to_lowercase().cmp(&b.display_name.to_lowercase()))
}
