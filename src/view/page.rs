//! Display regions
//!
//! A `Page` holds what each of the three regions showed when it was last
//! rendered. Regions are rendered from an `AccountRecord` independently, so a
//! region that was not re-rendered keeps showing its previous content.

use crate::models::{AccountRecord, HistoryEntry};

use super::totals::{category_totals, CategoryTotal};

/// Last-rendered content of the balance, category totals and history regions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// `None` until the balance has been rendered once
    pub balance: Option<i64>,
    pub category_rows: Vec<CategoryTotal>,
    /// Empty when the history region is cleared
    pub history_rows: Vec<HistoryEntry>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_balance(&mut self, record: &AccountRecord) {
        self.balance = Some(record.balance);
    }

    pub fn render_category_totals(&mut self, record: &AccountRecord) {
        self.category_rows = category_totals(&record.categories, &record.history);
    }

    /// Replace the history region with every entry in stored order
    pub fn render_history(&mut self, record: &AccountRecord) {
        self.history_rows = record.history.clone();
    }

    pub fn clear_history(&mut self) {
        self.history_rows.clear();
    }
}
