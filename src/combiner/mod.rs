//! Grocery list combining
//!
//! Turns free-text grocery items into consolidated shopping lines.

pub mod aggregator;
pub mod categorizer;
pub mod display;
pub mod engine;
pub mod ids;
pub mod matcher;
pub mod merger;
pub mod normalizer;
pub mod sorter;

pub use engine::{CombineEngine, ParsedLine};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use merger::{merge, merge_detailed, MergeOutcome};
