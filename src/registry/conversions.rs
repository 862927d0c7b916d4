//! Per-family unit conversion tables
//!
//! Each table names a base unit and how many base units one of every other
//! unit is worth. Tables are family specific: a "cup" of flour and a "cup" of
//! butter convert differently.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::builtin::BUILTIN_CONVERSIONS;
use super::{RegistryError, RegistryResult};
use crate::models::ParsedQuantity;

/// One unit and its worth in base units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitFactor {
    pub unit: String,
    pub factor: f64,
    /// Offered as a display unit when the total is large enough
    #[serde(default)]
    pub display: bool,
}

impl UnitFactor {
    pub fn new(unit: impl Into<String>, factor: f64) -> Self {
        Self {
            unit: unit.into(),
            factor,
            display: false,
        }
    }

    pub fn display(unit: impl Into<String>, factor: f64) -> Self {
        Self {
            display: true,
            ..Self::new(unit, factor)
        }
    }
}

/// Conversion table for one family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionTable {
    pub family: String,
    pub base_unit: String,
    pub multipliers: Vec<UnitFactor>,
}

impl ConversionTable {
    pub fn new(family: impl Into<String>, base_unit: impl Into<String>, multipliers: Vec<UnitFactor>) -> Self {
        Self {
            family: family.into(),
            base_unit: base_unit.into(),
            multipliers,
        }
    }

    /// Base units per one `unit`, or None when the table doesn't know the unit.
    /// The base unit is always worth 1 even when not listed.
    pub fn factor_for(&self, unit: &str) -> Option<f64> {
        self.multipliers
            .iter()
            .find(|m| m.unit == unit)
            .map(|m| m.factor)
            .or_else(|| (unit == self.base_unit).then_some(1.0))
    }

    /// Pick the unit a base-unit total is shown in.
    ///
    /// Display units with a factor above 1 are tried in declared order; the
    /// first one the total reaches at least one of wins. Otherwise the total
    /// stays in the base unit.
    pub fn best_display(&self, total_base: f64) -> ParsedQuantity {
        self.multipliers
            .iter()
            .filter(|m| m.display && m.factor > 1.0)
            .find(|m| total_base / m.factor >= 1.0)
            .map(|m| ParsedQuantity::new(total_base / m.factor, m.unit.clone()))
            .unwrap_or_else(|| ParsedQuantity::new(total_base, self.base_unit.clone()))
    }
}

/// Ordered set of conversion tables keyed by family
#[derive(Debug, Clone, Default)]
pub struct ConversionRegistry {
    tables: Vec<ConversionTable>,
}

impl ConversionRegistry {
    /// Build a registry, rejecting duplicate families and non-positive factors
    pub fn new(tables: Vec<ConversionTable>) -> RegistryResult<Self> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(tables.len());

        for table in tables {
            let family = table.family.trim().to_lowercase();
            if family.is_empty() {
                return Err(RegistryError::EmptyFamilyName);
            }
            if !seen.insert(family.clone()) {
                return Err(RegistryError::DuplicateTable(family));
            }

            let mut multipliers = Vec::with_capacity(table.multipliers.len());
            for m in table.multipliers {
                if !m.factor.is_finite() || m.factor <= 0.0 {
                    return Err(RegistryError::InvalidFactor {
                        family,
                        unit: m.unit,
                        factor: m.factor,
                    });
                }
                multipliers.push(UnitFactor {
                    unit: m.unit.trim().to_lowercase(),
                    ..m
                });
            }

            normalized.push(ConversionTable {
                family,
                base_unit: table.base_unit.trim().to_lowercase(),
                multipliers,
            });
        }

        Ok(Self { tables: normalized })
    }

    /// The tables compiled into the binary
    pub fn builtin() -> Self {
        let tables = BUILTIN_CONVERSIONS
            .iter()
            .map(|(family, base_unit, factors)| {
                let multipliers = factors
                    .iter()
                    .map(|(unit, factor, display)| UnitFactor {
                        unit: unit.to_string(),
                        factor: *factor,
                        display: *display,
                    })
                    .collect();
                ConversionTable::new(*family, *base_unit, multipliers)
            })
            .collect();
        Self { tables }
    }

    pub fn get(&self, family: &str) -> Option<&ConversionTable> {
        self.tables.iter().find(|t| t.family == family)
    }

    pub fn tables(&self) -> &[ConversionTable] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
