//! Expense history entry
//!
//! One line of the expense history: the local day it was recorded, the
//! amount spent and the category name it was booked against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Calendar day of insertion, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Amount spent (always positive)
    pub amount: i64,

    /// Category name, matched by exact string comparison
    pub category: String,
}

impl HistoryEntry {
    /// Create an entry for an explicit date
    pub fn new(date: NaiveDate, amount: i64, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
        }
    }

    /// Whether this entry is booked against `category`
    pub fn is_in(&self, category: &str) -> bool {
        self.category == category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let entry = HistoryEntry::new(date, 300, "food");

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"date": "2025-03-09", "amount": 300, "category": "food"})
        );
    }

    #[test]
    fn test_category_match_is_exact() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let entry = HistoryEntry::new(date, 10, "Food");
        assert!(entry.is_in("Food"));
        assert!(!entry.is_in("food"));
    }
}
