//! Input dialogs
//!
//! Single-field prompts (balance, new category, rename) and the two-field
//! expense form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::storage::DocumentStore;
use crate::tui::app::{App, ExpenseField};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn hint_line(extra: Option<&str>) -> Line<'static> {
    let mut spans = vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ];
    if let Some(extra) = extra {
        spans.push(Span::raw(format!("  {}", extra)));
    }
    Line::from(spans)
}

fn field_row(area: Rect, index: u16) -> Rect {
    Rect::new(area.x + 1, area.y + 1 + index, area.width.saturating_sub(2), 1)
}

/// Render a single-field prompt
pub fn render_single(frame: &mut Frame, title: &str, label: &str, input: &TextInput) {
    let area = centered_rect_fixed(50, 5, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(dialog_block(title), area);

    let field = input.clone().label(label).focused(true);
    frame.render_widget(field, field_row(area, 0));
    frame.render_widget(Paragraph::new(hint_line(None)), field_row(area, 2));
}

/// Render the expense form
pub fn render_expense<S: DocumentStore>(frame: &mut Frame, app: &App<S>) {
    let area = centered_rect_fixed(50, 6, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(dialog_block(" Add Expense "), area);

    let inner = Rect::new(area.x + 1, area.y + 1, area.width.saturating_sub(2), 4);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let amount = app
        .expense_amount
        .clone()
        .label("Amount  ")
        .placeholder("positive integer")
        .focused(app.expense_field == ExpenseField::Amount);
    let category = app
        .expense_category
        .clone()
        .label("Category")
        .placeholder("category name")
        .focused(app.expense_field == ExpenseField::Category);

    frame.render_widget(amount, rows[0]);
    frame.render_widget(category, rows[1]);
    frame.render_widget(Paragraph::new(hint_line(Some("[Tab] Next field"))), rows[3]);
}
