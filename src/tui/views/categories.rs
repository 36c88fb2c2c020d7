//! Category totals region
//!
//! One row per category with the amount spent; the selected row is the
//! target of the rename (r) and delete (d) controls.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::display::format_amount;
use crate::storage::DocumentStore;
use crate::tui::app::App;

/// Render the category totals list
pub fn render<S: DocumentStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" Categories ")
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let rows = &app.page().category_rows;

    if rows.is_empty() {
        let empty = List::new(vec![ListItem::new(Span::styled(
            "No categories. Press c to add one.",
            Style::default().fg(Color::DarkGray),
        ))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}: ", row.name)),
                Span::styled(
                    format_amount(row.total, &app.currency_label),
                    Style::default().fg(Color::Yellow),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_category_index));

    frame.render_stateful_widget(list, area, &mut state);
}
