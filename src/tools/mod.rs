//! Grocer Tools module
//!
//! MCP tool implementations for the Grocer service.

pub mod combine;
pub mod status;
