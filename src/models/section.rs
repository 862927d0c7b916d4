//! Shopping sections
//!
//! The store aisles a combined entry is filed under, in walking order.

use serde::{Deserialize, Serialize};

/// Grocery store section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Produce,
    MeatSeafood,
    Dairy,
    Pantry,
    Frozen,
    Bakery,
    #[default]
    Other,
}

impl Section {
    /// Sections in the order a shopper walks the store
    pub const SHOPPING_ORDER: [Section; 7] = [
        Section::Produce,
        Section::MeatSeafood,
        Section::Dairy,
        Section::Pantry,
        Section::Frozen,
        Section::Bakery,
        Section::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Produce => "produce",
            Section::MeatSeafood => "meat_seafood",
            Section::Dairy => "dairy",
            Section::Pantry => "pantry",
            Section::Frozen => "frozen",
            Section::Bakery => "bakery",
            Section::Other => "other",
        }
    }

    /// Parse a section label from the grocery store. Unknown labels are `Other`.
    pub fn from_str(s: &str) -> Self {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        match key.as_str() {
            "produce" => Section::Produce,
            "meat_seafood" | "meat_&_seafood" | "meat" | "seafood" => Section::MeatSeafood,
            "dairy" | "dairy_&_eggs" => Section::Dairy,
            "pantry" => Section::Pantry,
            "frozen" => Section::Frozen,
            "bakery" => Section::Bakery,
            _ => Section::Other,
        }
    }

    /// Position in [`Section::SHOPPING_ORDER`]
    pub fn rank(&self) -> usize {
        Self::SHOPPING_ORDER
            .iter()
            .position(|s| s == self)
            .unwrap_or(Self::SHOPPING_ORDER.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_known_labels() {
        assert_eq!(Section::from_str("produce"), Section::Produce);
        assert_eq!(Section::from_str("Meat_Seafood"), Section::MeatSeafood);
        assert_eq!(Section::from_str("meat & seafood"), Section::MeatSeafood);
        assert_eq!(Section::from_str(" dairy "), Section::Dairy);
    }

    #[test]
    fn test_from_str_unknown_is_other() {
        assert_eq!(Section::from_str("spices"), Section::Other);
        assert_eq!(Section::from_str(""), Section::Other);
    }

    #[test]
    fn test_rank_follows_shopping_order() {
        assert_eq!(Section::Produce.rank(), 0);
        assert_eq!(Section::Bakery.rank(), 5);
        assert_eq!(Section::Other.rank(), 6);
        assert!(Section::Dairy.rank() < Section::Frozen.rank());
    }

    #[test]
    fn test_round_trips_through_as_str() {
        for section in Section::SHOPPING_ORDER {
            assert_eq!(Section::from_str(section.as_str()), section);
        }
    }
}
