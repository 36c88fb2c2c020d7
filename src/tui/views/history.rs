//! History region
//!
//! Shows the history as of the last "show history" action; it is cleared by
//! category deletion and reset.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::format_amount;
use crate::storage::DocumentStore;
use crate::tui::app::App;

/// Render the history table
pub fn render<S: DocumentStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" History ")
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let rows = &app.page().history_rows;

    if rows.is_empty() {
        let hint = Paragraph::new("Press h to show the expense history.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(10),    // Category
        Constraint::Length(14), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.date.format("%Y-%m-%d").to_string()),
                Cell::from(entry.category.clone()),
                Cell::from(format_amount(entry.amount, &app.currency_label))
                    .style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let table = Table::new(table_rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
