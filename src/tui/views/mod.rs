//! TUI views
//!
//! One view per display region plus the status bar.

pub mod balance;
pub mod categories;
pub mod history;
pub mod status_bar;

use ratatui::Frame;

use crate::storage::DocumentStore;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render<S: DocumentStore>(frame: &mut Frame, app: &App<S>) {
    let layout = AppLayout::new(frame.area());

    balance::render(frame, app, layout.balance);
    categories::render(frame, app, layout.categories);
    history::render(frame, app, layout.history);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog<S: DocumentStore>(frame: &mut Frame, app: &App<S>) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::SetBalance => {
            dialogs::input::render_single(frame, " Set Balance ", "Amount", &app.input)
        }
        ActiveDialog::AddCategory => {
            dialogs::input::render_single(frame, " Add Category ", "Name", &app.input)
        }
        ActiveDialog::RenameCategory(_) => {
            dialogs::input::render_single(frame, " Rename Category ", "New name", &app.input)
        }
        ActiveDialog::AddExpense => dialogs::input::render_expense(frame, app),
        ActiveDialog::ConfirmDelete(name) => dialogs::confirm::render(
            frame,
            &format!("Delete '{}'? Its expenses are deleted too.", name),
        ),
        ActiveDialog::ConfirmReset => {
            dialogs::confirm::render(frame, "Really reset all data?")
        }
        ActiveDialog::None => {}
    }
}
