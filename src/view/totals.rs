//! Category total aggregation

use std::collections::HashMap;

use crate::models::HistoryEntry;

/// Amount spent in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub name: String,
    pub total: i64,
}

/// Sum history amounts per known category, in category order
///
/// Categories without entries total zero. Entries whose category is not in
/// `categories` are not counted anywhere. Loaded documents are not range
/// checked, so a total that would overflow is capped at `i64::MAX`.
pub fn category_totals(categories: &[String], history: &[HistoryEntry]) -> Vec<CategoryTotal> {
    let mut sums: HashMap<&str, i64> = categories.iter().map(|c| (c.as_str(), 0)).collect();

    for entry in history {
        if let Some(sum) = sums.get_mut(entry.category.as_str()) {
            *sum = sum.saturating_add(entry.amount);
        }
    }

    categories
        .iter()
        .map(|name| CategoryTotal {
            name: name.clone(),
            total: sums.get(name.as_str()).copied().unwrap_or(0),
        })
        .collect()
}
