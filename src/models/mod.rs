//! Data models
//!
//! Inputs and outputs of the combining engine.

mod combined_item;
mod grocery_item;
mod quantity;
mod section;

pub use combined_item::{CombinedItem, MergeStatus};
pub use grocery_item::GroceryItem;
pub use quantity::{format_amount, ParsedQuantity};
pub use section::Section;
