//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Account"),
        Line::from(""),
        key_line("b", "Set balance"),
        key_line("e", "Add expense"),
        key_line("h", "Show history"),
        key_line("R", "Reset all data"),
        Line::from(""),
        section("Categories"),
        Line::from(""),
        key_line("c", "Add category"),
        key_line("j/k", "Move selection down/up"),
        key_line("r", "Rename selected category"),
        key_line("d", "Delete selected category and its expenses"),
        Line::from(""),
        section("General"),
        Line::from(""),
        key_line("?", "Show this help (any key closes)"),
        key_line("q/Esc", "Quit"),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<8}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
