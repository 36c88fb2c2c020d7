//! Plain-text rendering of the display regions
//!
//! Used by the CLI to print the page after each action.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::HistoryEntry;
use crate::view::CategoryTotal;

/// Format an amount with the currency label, e.g. `300 円`
pub fn format_amount(amount: i64, label: &str) -> String {
    if label.is_empty() {
        amount.to_string()
    } else {
        format!("{} {}", amount, label)
    }
}

/// Format the balance region
pub fn format_balance(balance: Option<i64>, label: &str) -> String {
    match balance {
        Some(b) => format!("Balance: {}\n", format_amount(b, label)),
        None => "Balance: -\n".to_string(),
    }
}

/// Format one category total row as `name: total`
pub fn format_category_row(row: &CategoryTotal, label: &str) -> String {
    format!("{}: {}", row.name, format_amount(row.total, label))
}

/// Format the category totals region
pub fn format_category_totals(rows: &[CategoryTotal], label: &str) -> String {
    if rows.is_empty() {
        return "No categories yet.\n\nRun 'household category add <NAME>' to create one.\n"
            .to_string();
    }

    let mut output = String::from("Spending by category:\n");
    for row in rows {
        output.push_str(&format!("  {}\n", format_category_row(row, label)));
    }
    output
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the history region as a table
pub fn format_history(rows: &[HistoryEntry], label: &str) -> String {
    if rows.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let table_rows: Vec<HistoryRow> = rows
        .iter()
        .map(|entry| HistoryRow {
            date: entry.date.format("%Y-%m-%d").to_string(),
            category: entry.category.clone(),
            amount: format_amount(entry.amount, label),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
