//! Grocer Status Tool
//!
//! Provides runtime status information about the Grocer service.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::registry::Registries;

/// Combining instructions for AI assistants
pub const COMBINE_INSTRUCTIONS: &str = r#"
# Grocer Combining Instructions

Grocer merges grocery list lines that name the same ingredient into one
shopping-ready line.

## Input

Call `combine_grocery_items` with the whole list. Each item needs:
- `id` - the list store's ID (kept in `sourceItemIds` of the result)
- `rawName` - the line as written, e.g. "2 cloves garlic, minced"
- `checked` - whether the user already has it

Optional: `section` (produce, meat_seafood, dairy, pantry, frozen, bakery, other)
and `recipeIds`.

## Output

One entry per ingredient family, sorted by store section then name.

| Field | Meaning |
|-------|---------|
| displayName | Line to show, e.g. "18 cloves garlic (some minced)" |
| checked | True if ANY source item was checked |
| isCombined | True when several source items were merged |
| sourceItemIds | Original item IDs; apply check-offs to all of them |
| mergeStatus | single, exact, estimated or ambiguous |
| quantityBreakdown | Per-item quantities when the total is estimated or missing |

## Merge status

- **exact** - units converted through the ingredient's table, or all the same unit
- **estimated** - a unit was not in the table and was counted as the base unit; show the breakdown
- **ambiguous** - different units with no table (e.g. "1 can" and "200 g"); no total is shown, use the breakdown

## Debugging a line

`parse_grocery_line` shows the quantity, keywords and family the engine reads
from one line. `list_ingredient_families` lists known families and base units.
"#;

/// Runtime status of the Grocer service
#[derive(Debug, Clone, Serialize)]
pub struct GrocerStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub families_loaded: usize,
    pub variations_loaded: usize,
    pub conversion_tables_loaded: usize,
    pub registry_source: String,
    pub combine_calls: u64,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    registry_source: String,
    combine_calls: AtomicU64,
}

impl StatusTracker {
    pub fn new(registry_source: impl Into<String>) -> Self {
        Self {
            start_time: Instant::now(),
            registry_source: registry_source.into(),
            combine_calls: AtomicU64::new(0),
        }
    }

    pub fn record_combine(&self) {
        self.combine_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_status(&self, registries: &Registries) -> GrocerStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        GrocerStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            families_loaded: registries.families.len(),
            variations_loaded: registries.families.variation_count(),
            conversion_tables_loaded: registries.conversions.len(),
            registry_source: self.registry_source.clone(),
            combine_calls: self.combine_calls.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_calls() {
        let tracker = StatusTracker::new("builtin");
        tracker.record_combine();
        tracker.record_combine();
        let status = tracker.get_status(&Registries::builtin());
        assert_eq!(status.combine_calls, 2);
        assert_eq!(status.registry_source, "builtin");
        assert!(status.families_loaded > 0);
        assert_eq!(status.process_id, std::process::id());
    }
}
