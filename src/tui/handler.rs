//! Event handler for the TUI
//!
//! Routes key events to the open dialog or to the main screen. Storage
//! failures are reported in the status bar and the session carries on.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::HouseholdResult;
use crate::storage::DocumentStore;

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<S: DocumentStore>(app: &mut App<S>, event: Event) {
    let result = match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => Ok(()),
        Event::Error(message) => {
            app.set_status(format!("Terminal error: {}", message));
            app.quit();
            Ok(())
        }
    };

    if let Err(e) = result {
        app.set_status(format!("Save failed: {}", e));
    }
}

/// Handle a key event
fn handle_key_event<S: DocumentStore>(app: &mut App<S>, key: KeyEvent) -> HouseholdResult<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::None => handle_normal_key(app, key),
        ActiveDialog::Help => {
            app.close_dialog();
            Ok(())
        }
        ActiveDialog::ConfirmDelete(_) | ActiveDialog::ConfirmReset => handle_confirm_key(app, key),
        _ => handle_input_key(app, key),
    }
}

/// Keys on the main screen
fn handle_normal_key<S: DocumentStore>(app: &mut App<S>, key: KeyEvent) -> HouseholdResult<()> {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('b') => app.open_dialog(ActiveDialog::SetBalance),
        KeyCode::Char('e') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('c') => app.open_dialog(ActiveDialog::AddCategory),
        KeyCode::Char('h') => app.binder.show_history(),
        KeyCode::Char('R') => app.open_dialog(ActiveDialog::ConfirmReset),

        KeyCode::Char('r') => {
            if let Some(name) = app.selected_category() {
                app.open_dialog(ActiveDialog::RenameCategory(name));
            }
        }
        KeyCode::Char('d') => {
            if let Some(name) = app.selected_category() {
                app.open_dialog(ActiveDialog::ConfirmDelete(name));
            }
        }

        _ => {}
    }
    Ok(())
}

/// Keys in yes/no dialogs
fn handle_confirm_key<S: DocumentStore>(app: &mut App<S>, key: KeyEvent) -> HouseholdResult<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_confirm(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_confirm(false),
        _ => Ok(()),
    }
}

/// Keys in dialogs with text fields
fn handle_input_key<S: DocumentStore>(app: &mut App<S>, key: KeyEvent) -> HouseholdResult<()> {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return Ok(());
        }
        KeyCode::Enter => return app.submit_dialog(),
        KeyCode::Tab | KeyCode::BackTab => {
            if app.active_dialog == ActiveDialog::AddExpense {
                app.toggle_expense_field();
            }
            return Ok(());
        }
        _ => {}
    }

    if let Some(input) = app.active_input() {
        match key.code {
            KeyCode::Char(c) => input.insert(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::AccountStore;
    use crate::storage::MemoryStore;
    use crate::view::ViewBinder;

    fn create_app() -> App<MemoryStore> {
        let mut binder = ViewBinder::new(AccountStore::new(MemoryStore::new(), "demoUser"));
        binder.start().unwrap();
        App::new(binder, "円")
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut App<MemoryStore>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_budget_session() {
        let mut app = create_app();

        press(&mut app, KeyCode::Char('b'));
        type_text(&mut app, "1000");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "food");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "300");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "food");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('h'));

        let page = app.page();
        assert_eq!(page.balance, Some(700));
        assert_eq!(page.category_rows[0].total, 300);
        assert_eq!(page.history_rows.len(), 1);
    }

    #[test]
    fn test_escape_cancels_input() {
        let mut app = create_app();

        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "food");
        press(&mut app, KeyCode::Esc);

        assert!(!app.has_dialog());
        assert!(app.page().category_rows.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_delete_via_keys() {
        let mut app = create_app();
        app.binder.add_category("food").unwrap();

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmDelete("food".into()));
        press(&mut app, KeyCode::Char('y'));

        assert!(app.page().category_rows.is_empty());
    }

    #[test]
    fn test_save_failure_shows_status() {
        let mut app = create_app();
        app.binder.account().store().set_fail_writes(true);

        press(&mut app, KeyCode::Char('b'));
        type_text(&mut app, "5");
        press(&mut app, KeyCode::Enter);

        let status = app.status_message.clone().unwrap();
        assert!(status.starts_with("Save failed"));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit() {
        let mut app = create_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
