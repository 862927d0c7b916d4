//! Parsed quantity
//!
//! An amount paired with a unit. An empty unit is a bare count ("3 tomatoes").

use std::fmt;

use serde::{Deserialize, Serialize};

/// Amount and unit extracted from an item string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuantity {
    pub amount: f64,
    pub unit: String,
}

impl ParsedQuantity {
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }

    /// A unitless count
    pub fn count(amount: f64) -> Self {
        Self::new(amount, "")
    }

    pub fn is_count(&self) -> bool {
        self.unit.is_empty()
    }
}

impl Default for ParsedQuantity {
    /// One of something, which is what an item without a number means
    fn default() -> Self {
        Self::count(1.0)
    }
}

impl fmt::Display for ParsedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_count() {
            write!(f, "{}", format_amount(self.amount))
        } else {
            write!(f, "{} {}", format_amount(self.amount), self.unit)
        }
    }
}

/// Format an amount for display: whole numbers without decimals, otherwise one decimal place.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        // `+ 0.0` folds negative zero
        format!("{:.0}", amount + 0.0)
    } else {
        format!("{:.1}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_whole() {
        assert_eq!(format_amount(18.0), "18");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(-0.0), "0");
    }

    #[test]
    fn test_format_amount_large_whole() {
        assert_eq!(format_amount(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_amount_fractional() {
        assert_eq!(format_amount(1.5), "1.5");
        assert_eq!(format_amount(0.333), "0.3");
        assert_eq!(format_amount(0.1 + 0.2), "0.3");
        assert_eq!(format_amount(0.04), "0.0");
        assert_eq!(format_amount(2.9999999), "3.0");
    }

    #[test]
    fn test_display() {
        assert_eq!(ParsedQuantity::new(2.0, "cups").to_string(), "2 cups");
        assert_eq!(ParsedQuantity::count(3.0).to_string(), "3");
        assert_eq!(ParsedQuantity::default().to_string(), "1");
    }
}
