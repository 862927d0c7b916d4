//! Synthetic IDs for combined entries
//!
//! IDs only need to be unique within one combine call. Production uses random
//! UUIDs; tests and reproducible exports use positional IDs.

/// Source of combined-item IDs
pub trait IdGenerator: Send + Sync {
    /// ID for the `index`-th combined entry of a call (pre-sort order)
    fn generate(&self, index: usize) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self, _index: usize) -> String {
        format!("combined-{}", uuid::Uuid::new_v4())
    }
}

/// `<prefix>-<index>`, fully deterministic
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("combined")
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self, index: usize) -> String {
        format!("{}-{}", self.prefix, index)
    }
}
