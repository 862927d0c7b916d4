//! Quantity merging
//!
//! Sums the quantities of one family bucket, converting through the family's
//! table when there is one.

use crate::models::ParsedQuantity;
use crate::registry::ConversionRegistry;

/// Result of merging one bucket's quantities
#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    /// Every unit converted (or all units were identical)
    Merged(ParsedQuantity),
    /// Summed, but units missing from the table were counted as base units
    Estimated {
        quantity: ParsedQuantity,
        unknown_units: Vec<String>,
    },
    /// Several distinct units and no table to reconcile them
    Ambiguous { units: Vec<String> },
}

impl MergeOutcome {
    pub fn quantity(&self) -> Option<&ParsedQuantity> {
        match self {
            MergeOutcome::Merged(q) => Some(q),
            MergeOutcome::Estimated { quantity, .. } => Some(quantity),
            MergeOutcome::Ambiguous { .. } => None,
        }
    }

    pub fn into_quantity(self) -> Option<ParsedQuantity> {
        match self {
            MergeOutcome::Merged(q) => Some(q),
            MergeOutcome::Estimated { quantity, .. } => Some(quantity),
            MergeOutcome::Ambiguous { .. } => None,
        }
    }
}

/// Merge quantities for `family`; None when the units can't be reconciled
pub fn merge(
    family: &str,
    quantities: &[ParsedQuantity],
    conversions: &ConversionRegistry,
) -> Option<ParsedQuantity> {
    merge_detailed(family, quantities, conversions).into_quantity()
}

/// Merge quantities for `family`, reporting how the total was reached.
///
/// With a conversion table every amount is converted to the base unit and
/// summed, then re-expressed via [`ConversionTable::best_display`]. A unit the
/// table doesn't list counts as the base unit and the result is `Estimated`.
///
/// Without a table quantities only merge when they all share one unit string.
///
/// [`ConversionTable::best_display`]: crate::registry::ConversionTable::best_display
pub fn merge_detailed(
    family: &str,
    quantities: &[ParsedQuantity],
    conversions: &ConversionRegistry,
) -> MergeOutcome {
    if let Some(table) = conversions.get(family) {
        let mut total = 0.0;
        let mut unknown_units: Vec<String> = Vec::new();

        for q in quantities {
            let factor = match table.factor_for(&q.unit) {
                Some(factor) => factor,
                None => {
                    if !unknown_units.contains(&q.unit) {
                        unknown_units.push(q.unit.clone());
                    }
                    1.0
                }
            };
            total += q.amount * factor;
        }

        let quantity = table.best_display(total);
        if unknown_units.is_empty() {
            return MergeOutcome::Merged(quantity);
        }

        tracing::warn!(
            "Unit conversion fallback for '{}': {:?} not in table, counted as '{}'",
            family,
            unknown_units,
            table.base_unit
        );
        return MergeOutcome::Estimated {
            quantity,
            unknown_units,
        };
    }

    let mut units: Vec<String> = Vec::new();
    for q in quantities {
        if !units.contains(&q.unit) {
            units.push(q.unit.clone());
        }
    }

    match units.len() {
        0 => MergeOutcome::Merged(ParsedQuantity::count(0.0)),
        1 => {
            let total = quantities.iter().map(|q| q.amount).sum();
            MergeOutcome::Merged(ParsedQuantity::new(total, units.remove(0)))
        }
        _ => {
            tracing::warn!("Ambiguous units for '{}': {:?}", family, units);
            MergeOutcome::Ambiguous { units }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(amount: f64, unit: &str) -> ParsedQuantity {
        ParsedQuantity::new(amount, unit)
    }

    fn builtin() -> ConversionRegistry {
        ConversionRegistry::builtin()
    }

    #[test]
    fn test_garlic_converts_to_cloves() {
        let merged = merge(
            "garlic",
            &[q(2.0, "cloves"), q(1.0, "head"), q(2.0, "tablespoons")],
            &builtin(),
        )
        .unwrap();
        assert_eq!(merged.unit, "cloves");
        assert!((merged.amount - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_butter_stays_in_tablespoons() {
        let merged = merge("butter", &[q(8.0, "tablespoons"), q(1.0, "stick")], &builtin()).unwrap();
        assert_eq!(merged, q(16.0, "tablespoon"));
    }

    #[test]
    fn test_display_unit_selected() {
        let merged = merge("milk", &[q(4.0, "cups"), q(2.0, "cups")], &builtin()).unwrap();
        assert_eq!(merged.unit, "quart");
        assert!((merged.amount - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_unknown_unit_is_estimated() {
        let outcome = merge_detailed("garlic", &[q(2.0, "cloves"), q(1.0, "pinch")], &builtin());
        match outcome {
            MergeOutcome::Estimated {
                quantity,
                unknown_units,
            } => {
                assert_eq!(quantity, q(3.0, "cloves"));
                assert_eq!(unknown_units, vec!["pinch"]);
            }
            other => panic!("expected estimate, got {:?}", other),
        }
    }

    #[test]
    fn test_no_table_same_unit_sums() {
        let merged = merge("tomato", &[q(2.0, ""), q(1.0, "")], &builtin()).unwrap();
        assert_eq!(merged, q(3.0, ""));
    }

    #[test]
    fn test_no_table_mixed_units_is_ambiguous() {
        let quantities = [q(1.0, "can"), q(2.0, ""), q(1.0, "can")];
        assert_eq!(merge("chickpeas", &quantities, &builtin()), None);
        assert_eq!(
            merge_detailed("chickpeas", &quantities, &builtin()),
            MergeOutcome::Ambiguous {
                units: vec!["can".to_string(), "".to_string()]
            }
        );
    }

    #[test]
    fn test_empty_quantities() {
        assert_eq!(merge("tomato", &[], &builtin()), Some(q(0.0, "")));
        assert_eq!(merge("garlic", &[], &builtin()), Some(q(0.0, "cloves")));
    }
}
