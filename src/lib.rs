//! Grocer Library
//!
//! Combines grocery list entries that name the same ingredient into
//! single shopping-ready lines.

pub mod build_info;
pub mod combiner;
pub mod config;
pub mod mcp;
pub mod models;
pub mod registry;
pub mod tools;

pub use combiner::CombineEngine;
pub use models::{CombinedItem, GroceryItem};
