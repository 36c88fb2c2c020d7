//! Balance region

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_amount;
use crate::storage::DocumentStore;
use crate::tui::app::App;

/// Render the balance header
pub fn render<S: DocumentStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" Household Account ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let balance_span = match app.page().balance {
        Some(balance) => {
            let color = if balance < 0 { Color::Red } else { Color::Green };
            Span::styled(
                format_amount(balance, &app.currency_label),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => Span::styled("-", Style::default().fg(Color::DarkGray)),
    };

    let line = Line::from(vec![
        Span::styled(" Balance: ", Style::default().fg(Color::White)),
        balance_span,
        Span::styled(
            format!("   [{}]", app.binder.account().user_id()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
