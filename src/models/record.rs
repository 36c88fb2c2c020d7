//! Account record model
//!
//! The single document persisted per user: current balance, spending
//! categories in display order, and the expense history. All mutations here
//! are pure in-memory changes; persistence is the store's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::HistoryEntry;

/// The whole budgeting state of one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Current balance; may go negative
    #[serde(default)]
    pub balance: i64,

    /// Category names in insertion order
    #[serde(default)]
    pub categories: Vec<String>,

    /// Expense entries in insertion order
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl AccountRecord {
    /// The zero state: no balance, no categories, no history
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this record is in the zero state
    pub fn is_empty(&self) -> bool {
        self.balance == 0 && self.categories.is_empty() && self.history.is_empty()
    }

    /// Overwrite the balance
    pub fn set_balance(&mut self, amount: i64) {
        self.balance = amount;
    }

    /// Check if a category with exactly this name exists
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Append a category unless an identical name is already present
    ///
    /// Returns `true` if the category was appended.
    pub fn add_category(&mut self, name: &str) -> bool {
        if self.has_category(name) {
            return false;
        }
        self.categories.push(name.to_string());
        true
    }

    /// Whether an expense of `amount` in `category` keeps the balance and the
    /// category's total representable
    pub fn accepts_expense(&self, amount: i64, category: &str) -> bool {
        amount > 0
            && self.balance.checked_sub(amount).is_some()
            && self
                .spent_in(category)
                .and_then(|spent| spent.checked_add(amount))
                .is_some()
    }

    /// Record an expense: subtract from the balance and append to history
    ///
    /// The category is not required to exist. Returns `false` and leaves the
    /// record untouched when [`accepts_expense`](Self::accepts_expense) fails.
    pub fn add_expense(&mut self, amount: i64, category: &str, date: NaiveDate) -> bool {
        if !self.accepts_expense(amount, category) {
            return false;
        }
        self.balance -= amount;
        self.history.push(HistoryEntry::new(date, amount, category));
        true
    }

    /// Rename a category in place and retag its history entries
    ///
    /// History entries are retagged even when `old` is not in the category
    /// list. Returns `true` if `old` was found in the list.
    pub fn rename_category(&mut self, old: &str, new: &str) -> bool {
        let found = match self.categories.iter().position(|c| c == old) {
            Some(index) => {
                self.categories[index] = new.to_string();
                true
            }
            None => false,
        };

        for entry in self.history.iter_mut().filter(|e| e.is_in(old)) {
            entry.category = new.to_string();
        }

        found
    }

    /// Remove a category together with every history entry booked against it
    ///
    /// Returns the number of history entries removed.
    pub fn delete_category(&mut self, name: &str) -> usize {
        self.categories.retain(|c| c != name);

        let before = self.history.len();
        self.history.retain(|e| !e.is_in(name));
        before - self.history.len()
    }

    /// Sum of all amounts booked against `category`, `None` if it overflows
    pub fn spent_in(&self, category: &str) -> Option<i64> {
        self.history
            .iter()
            .filter(|e| e.is_in(category))
            .try_fold(0i64, |sum, e| sum.checked_add(e.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    #[test]
    fn test_zero_state() {
        let record = AccountRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.balance, 0);
    }

    #[test]
    fn test_add_category_is_exact_and_unique() {
        let mut record = AccountRecord::new();
        assert!(record.add_category("food"));
        assert!(!record.add_category("food"));
        assert!(record.add_category("Food"));
        assert_eq!(record.categories, vec!["food", "Food"]);
    }

    #[test]
    fn test_expense_may_overdraw() {
        let mut record = AccountRecord::new();
        record.set_balance(100);
        record.add_expense(250, "unknown", day(1));

        assert_eq!(record.balance, -150);
        assert_eq!(record.history, vec![HistoryEntry::new(day(1), 250, "unknown")]);
    }

    #[test]
    fn test_expense_out_of_range_is_rejected() {
        let mut record = AccountRecord::new();
        record.add_category("food");
        assert!(record.add_expense(i64::MAX, "food", day(1)));

        // Category total would overflow
        assert!(!record.accepts_expense(1, "food"));
        assert!(!record.add_expense(1, "food", day(2)));
        assert_eq!(record.history.len(), 1);
        assert_eq!(record.balance, -i64::MAX);

        // Balance would overflow
        assert!(!record.add_expense(2, "other", day(2)));
        assert!(record.add_expense(1, "other", day(2)));
        assert_eq!(record.balance, i64::MIN);
        assert_eq!(record.spent_in("food"), Some(i64::MAX));
    }

    #[test]
    fn test_non_positive_expense_is_rejected() {
        let mut record = AccountRecord::new();
        assert!(!record.add_expense(0, "food", day(1)));
        assert!(!record.add_expense(-5, "food", day(1)));
        assert!(record.is_empty());
    }

    #[test]
    fn test_rename_keeps_position_and_retags() {
        let mut record = AccountRecord::new();
        record.add_category("rent");
        record.add_category("food");
        record.add_category("fun");
        record.add_expense(10, "food", day(1));
        record.add_expense(20, "rent", day(2));
        record.add_expense(30, "food", day(3));

        assert!(record.rename_category("food", "groceries"));

        assert_eq!(record.categories, vec!["rent", "groceries", "fun"]);
        assert_eq!(record.spent_in("groceries"), Some(40));
        assert_eq!(record.spent_in("food"), Some(0));
        assert_eq!(record.history[1].category, "rent");
    }

    #[test]
    fn test_rename_missing_category_still_retags_history() {
        let mut record = AccountRecord::new();
        record.add_expense(10, "orphan", day(1));

        assert!(!record.rename_category("orphan", "adopted"));
        assert!(record.categories.is_empty());
        assert_eq!(record.history[0].category, "adopted");
    }

    #[test]
    fn test_delete_cascades_to_history() {
        let mut record = AccountRecord::new();
        record.set_balance(1000);
        record.add_category("food");
        record.add_category("rent");
        record.add_expense(100, "food", day(1));
        record.add_expense(500, "rent", day(2));
        record.add_expense(50, "food", day(3));

        assert_eq!(record.delete_category("food"), 2);

        assert_eq!(record.categories, vec!["rent"]);
        assert_eq!(record.history.len(), 1);
        assert!(record.history.iter().all(|e| e.category != "food"));
        // The balance is not refunded
        assert_eq!(record.balance, 350);
    }

    #[test]
    fn test_document_shape() {
        let mut record = AccountRecord::new();
        record.set_balance(700);
        record.add_category("food");
        record.add_expense(300, "food", day(5));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "balance": 400,
                "categories": ["food"],
                "history": [{"date": "2025-04-05", "amount": 300, "category": "food"}]
            })
        );
    }

    #[test]
    fn test_partial_document_loads() {
        let record: AccountRecord = serde_json::from_str(r#"{"balance": 5}"#).unwrap();
        assert_eq!(record.balance, 5);
        assert!(record.categories.is_empty());
        assert!(record.history.is_empty());
    }
}
