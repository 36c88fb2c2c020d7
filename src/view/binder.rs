//! View binder
//!
//! Turns raw user input into account store calls and re-renders the affected
//! regions of the page once the call has returned. Input that fails
//! validation is ignored: no store call, no re-render, no message. Each
//! handler returns `Ok(true)` when it went through to the store.

use crate::error::HouseholdResult;
use crate::services::AccountStore;
use crate::storage::DocumentStore;

use super::input::{non_empty, parse_amount, parse_balance};
use super::page::Page;

/// Connects an account store to the display regions
pub struct ViewBinder<S> {
    account: AccountStore<S>,
    page: Page,
}

impl<S: DocumentStore> ViewBinder<S> {
    /// Bind `account`; nothing is rendered until [`start`](Self::start)
    pub fn new(account: AccountStore<S>) -> Self {
        Self {
            account,
            page: Page::new(),
        }
    }

    /// Load the record, then render balance and category totals
    pub fn start(&mut self) -> HouseholdResult<()> {
        self.account.load()?;
        self.page.render_balance(self.account.record());
        self.page.render_category_totals(self.account.record());
        Ok(())
    }

    /// Set-balance action
    pub fn set_balance(&mut self, input: &str) -> HouseholdResult<bool> {
        let Some(amount) = parse_balance(input) else {
            return Ok(false);
        };

        self.account.set_balance(amount)?;
        self.page.render_balance(self.account.record());
        Ok(true)
    }

    /// Add-expense action
    pub fn add_expense(&mut self, amount_input: &str, category_input: &str) -> HouseholdResult<bool> {
        let (Some(amount), Some(category)) = (parse_amount(amount_input), non_empty(category_input))
        else {
            return Ok(false);
        };
        if !self.account.record().accepts_expense(amount, category) {
            return Ok(false);
        }

        self.account.add_expense(amount, category)?;
        self.page.render_balance(self.account.record());
        self.page.render_category_totals(self.account.record());
        Ok(true)
    }

    /// Add-category action
    ///
    /// An already existing name still counts as handled; the store simply
    /// doesn't append it.
    pub fn add_category(&mut self, input: &str) -> HouseholdResult<bool> {
        let Some(name) = non_empty(input) else {
            return Ok(false);
        };

        self.account.add_category(name)?;
        self.page.render_category_totals(self.account.record());
        Ok(true)
    }

    /// Rename control of the row for `current`
    ///
    /// `new_name` is the answer to the rename prompt, `None` if cancelled.
    pub fn rename_category(&mut self, current: &str, new_name: Option<&str>) -> HouseholdResult<bool> {
        let Some(new_name) = new_name.and_then(non_empty) else {
            return Ok(false);
        };
        if new_name == current || self.account.record().has_category(new_name) {
            return Ok(false);
        }

        self.account.rename_category(current, new_name)?;
        self.page.render_category_totals(self.account.record());
        Ok(true)
    }

    /// Delete control of the row for `name`
    ///
    /// The history region is cleared rather than re-rendered.
    pub fn delete_category(&mut self, name: &str, confirmed: bool) -> HouseholdResult<bool> {
        if !confirmed {
            return Ok(false);
        }

        self.account.delete_category(name)?;
        self.page.render_category_totals(self.account.record());
        self.page.clear_history();
        Ok(true)
    }

    /// Show-history action; no I/O
    pub fn show_history(&mut self) {
        self.page.render_history(self.account.record());
    }

    /// Reset action
    pub fn reset(&mut self, confirmed: bool) -> HouseholdResult<bool> {
        if !confirmed {
            return Ok(false);
        }

        self.account.reset()?;
        self.page.render_balance(self.account.record());
        self.page.render_category_totals(self.account.record());
        self.page.clear_history();
        Ok(true)
    }

    /// What the regions currently show
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn account(&self) -> &AccountStore<S> {
        &self.account
    }
}
