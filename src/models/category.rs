//! Transaction categories
//!
//! The category set is closed: every transaction is classified as Income or
//! one of seven expense categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a transaction's purpose
///
/// Variant order is the display order used throughout the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Income,
    Housing,
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Healthcare,
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 8] = [
        Category::Income,
        Category::Housing,
        Category::Food,
        Category::Transportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Other,
    ];

    /// Every category that counts as spending
    pub const EXPENSES: [Category; 7] = [
        Category::Housing,
        Category::Food,
        Category::Transportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Other,
    ];

    /// Check if this is the income category
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// Check if this category counts toward expenses
    pub fn is_expense(&self) -> bool {
        !self.is_income()
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Other => "Other",
        }
    }

    /// The next category in display order, wrapping around
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous category in display order, wrapping around
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Case-insensitive lookup by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CategoryParseError(needle.to_string()))
    }
}

/// Error returned when a category name is not in the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        write!(
            f,
            "Unknown category '{}'. Expected one of: {}",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}
