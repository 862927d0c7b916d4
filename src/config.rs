//! Runtime configuration
//!
//! Read from the environment at startup:
//! - `GROCER_REGISTRY_PATH`: JSON file replacing the built-in registries
//! - `GROCER_ID_MODE`: `uuid` (default) or `sequential`

use std::path::PathBuf;
use std::sync::Arc;

use crate::combiner::{CombineEngine, IdGenerator, SequentialIds, UuidIds};
use crate::registry::{load_registries, Registries, RegistryResult};

pub const REGISTRY_PATH_VAR: &str = "GROCER_REGISTRY_PATH";
pub const ID_MODE_VAR: &str = "GROCER_ID_MODE";

/// How combined items get their IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdMode {
    #[default]
    Uuid,
    Sequential,
}

impl IdMode {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sequential" | "seq" => IdMode::Sequential,
            _ => IdMode::Uuid,
        }
    }

    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            IdMode::Uuid => Arc::new(UuidIds),
            IdMode::Sequential => Arc::new(SequentialIds::default()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GrocerConfig {
    pub registry_path: Option<PathBuf>,
    pub id_mode: IdMode,
}

impl GrocerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            registry_path: lookup(REGISTRY_PATH_VAR)
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            id_mode: lookup(ID_MODE_VAR)
                .map(|s| IdMode::from_str(&s))
                .unwrap_or_default(),
        }
    }

    /// Where the registries come from, for status output
    pub fn registry_source(&self) -> String {
        match &self.registry_path {
            Some(path) => path.display().to_string(),
            None => "builtin".to_string(),
        }
    }

    pub fn build_engine(&self) -> RegistryResult<CombineEngine> {
        let registries = match &self.registry_path {
            Some(path) => load_registries(path)?,
            None => Registries::builtin(),
        };
        Ok(CombineEngine::new(registries, self.id_mode.generator()))
    }
}
