//! Application state for the TUI
//!
//! The App struct holds the view binder plus everything needed for rendering
//! and handling events: selection, open dialog, input fields, status line.

use crate::error::HouseholdResult;
use crate::storage::DocumentStore;
use crate::view::{Page, ViewBinder};

use super::widgets::TextInput;

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    SetBalance,
    AddExpense,
    AddCategory,
    /// Rename prompt for the named category
    RenameCategory(String),
    /// Delete confirmation for the named category
    ConfirmDelete(String),
    ConfirmReset,
    Help,
}

/// Which field of the expense form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Amount,
    Category,
}

/// Main application state
pub struct App<S> {
    /// Binder owning the account store and the rendered page
    pub binder: ViewBinder<S>,

    /// Label appended to amounts
    pub currency_label: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the category totals list
    pub selected_category_index: usize,

    /// Single-field dialogs (balance, new category, rename)
    pub input: TextInput,

    /// Expense form amount field
    pub expense_amount: TextInput,

    /// Expense form category field
    pub expense_category: TextInput,

    /// Focused field of the expense form
    pub expense_field: ExpenseField,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<S: DocumentStore> App<S> {
    /// Create a new App around a started binder
    pub fn new(binder: ViewBinder<S>, currency_label: impl Into<String>) -> Self {
        Self {
            binder,
            currency_label: currency_label.into(),
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_category_index: 0,
            input: TextInput::new(),
            expense_amount: TextInput::new(),
            expense_category: TextInput::new(),
            expense_field: ExpenseField::default(),
            status_message: None,
        }
    }

    pub fn page(&self) -> &Page {
        self.binder.page()
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog, preparing its input fields
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::SetBalance | ActiveDialog::AddCategory => {
                self.input = TextInput::new();
            }
            ActiveDialog::RenameCategory(current) => {
                self.input = TextInput::new().content(current.clone());
            }
            ActiveDialog::AddExpense => {
                self.expense_amount = TextInput::new();
                self.expense_category = TextInput::new();
                self.expense_field = ExpenseField::Amount;
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Name of the selected category row, if any
    pub fn selected_category(&self) -> Option<String> {
        self.page()
            .category_rows
            .get(self.selected_category_index)
            .map(|row| row.name.clone())
    }

    pub fn move_up(&mut self) {
        self.selected_category_index = self.selected_category_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.page().category_rows.len();
        if self.selected_category_index < count.saturating_sub(1) {
            self.selected_category_index += 1;
        }
    }

    /// Keep the selection inside the category list after it changed
    pub fn clamp_selection(&mut self) {
        let count = self.page().category_rows.len();
        self.selected_category_index = self.selected_category_index.min(count.saturating_sub(1));
    }

    /// Switch focus between the two expense form fields
    pub fn toggle_expense_field(&mut self) {
        self.expense_field = match self.expense_field {
            ExpenseField::Amount => ExpenseField::Category,
            ExpenseField::Category => ExpenseField::Amount,
        };
    }

    /// Input field that receives typed characters in the current dialog
    pub fn active_input(&mut self) -> Option<&mut TextInput> {
        match self.active_dialog {
            ActiveDialog::SetBalance
            | ActiveDialog::AddCategory
            | ActiveDialog::RenameCategory(_) => Some(&mut self.input),
            ActiveDialog::AddExpense => match self.expense_field {
                ExpenseField::Amount => Some(&mut self.expense_amount),
                ExpenseField::Category => Some(&mut self.expense_category),
            },
            _ => None,
        }
    }

    /// Submit the current input dialog (Enter)
    pub fn submit_dialog(&mut self) -> HouseholdResult<()> {
        let dialog = std::mem::take(&mut self.active_dialog);
        match dialog {
            ActiveDialog::SetBalance => {
                let value = self.input.value().to_string();
                self.binder.set_balance(&value)?;
            }
            ActiveDialog::AddCategory => {
                let value = self.input.value().to_string();
                self.binder.add_category(&value)?;
            }
            ActiveDialog::RenameCategory(current) => {
                let value = self.input.value().to_string();
                self.binder.rename_category(&current, Some(&value))?;
            }
            ActiveDialog::AddExpense => {
                let amount = self.expense_amount.value().to_string();
                let category = self.expense_category.value().to_string();
                self.binder.add_expense(&amount, &category)?;
            }
            other => self.active_dialog = other,
        }
        self.clamp_selection();
        Ok(())
    }

    /// Answer the current confirmation dialog
    pub fn answer_confirm(&mut self, confirmed: bool) -> HouseholdResult<()> {
        let dialog = std::mem::take(&mut self.active_dialog);
        match dialog {
            ActiveDialog::ConfirmDelete(name) => {
                self.binder.delete_category(&name, confirmed)?;
            }
            ActiveDialog::ConfirmReset => {
                self.binder.reset(confirmed)?;
            }
            other => self.active_dialog = other,
        }
        self.clamp_selection();
        Ok(())
    }
}
