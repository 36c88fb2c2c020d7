//! Account store
//!
//! Owns the in-memory `AccountRecord` of one user and keeps the document
//! store in sync with it. Every mutation is applied in memory first and then
//! the whole record is written back; a failed write is returned to the caller
//! and the in-memory change stays applied.

use chrono::{Local, NaiveDate};

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::error::{HouseholdError, HouseholdResult};
use crate::models::{AccountRecord, HistoryEntry};
use crate::storage::DocumentStore;

/// The budgeting record of one user plus the store it is persisted to
pub struct AccountStore<S> {
    store: S,
    user_id: String,
    record: AccountRecord,
    audit: Option<AuditLogger>,
}

impl<S: DocumentStore> AccountStore<S> {
    /// Create a store for `user_id`; the record starts in the zero state
    /// until [`load`](Self::load) is called
    pub fn new(store: S, user_id: impl Into<String>) -> Self {
        Self {
            store,
            user_id: user_id.into(),
            record: AccountRecord::new(),
            audit: None,
        }
    }

    /// Record every successful mutation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Fetch the stored record; initialize and persist the zero state if
    /// nothing is stored yet
    pub fn load(&mut self) -> HouseholdResult<()> {
        match self.store.fetch(&self.user_id)? {
            Some(record) => {
                self.record = record;
                Ok(())
            }
            None => {
                self.record = AccountRecord::new();
                self.save()?;
                self.log(AuditEntry::new(Operation::Initialize, &self.user_id))
            }
        }
    }

    /// Write the full record, replacing whatever is stored
    pub fn save(&self) -> HouseholdResult<()> {
        self.store.replace(&self.user_id, &self.record)
    }

    /// Set the balance. Callers validate that `amount` is non-negative.
    pub fn set_balance(&mut self, amount: i64) -> HouseholdResult<()> {
        let before = self.record.balance;
        self.record.set_balance(amount);
        self.save()?;

        self.log(
            AuditEntry::new(Operation::SetBalance, &self.user_id)
                .before(&before)
                .after(&amount)
                .summary(format!("balance: {} -> {}", before, amount)),
        )
    }

    /// Append a category unless the exact name already exists
    ///
    /// Saves only when the category was appended; returns whether it was.
    pub fn add_category(&mut self, name: &str) -> HouseholdResult<bool> {
        if !self.record.add_category(name) {
            return Ok(false);
        }
        self.save()?;

        self.log(AuditEntry::new(Operation::AddCategory, &self.user_id).subject(name))?;
        Ok(true)
    }

    /// Record an expense dated today (local time)
    pub fn add_expense(&mut self, amount: i64, category: &str) -> HouseholdResult<()> {
        self.add_expense_on(amount, category, Local::now().date_naive())
    }

    /// Record an expense on an explicit date
    ///
    /// `category` need not exist. An amount that is not positive, or that would
    /// overflow the balance or the category's total, is rejected without a
    /// save.
    pub fn add_expense_on(
        &mut self,
        amount: i64,
        category: &str,
        date: NaiveDate,
    ) -> HouseholdResult<()> {
        let before = self.record.balance;
        if !self.record.add_expense(amount, category, date) {
            return Err(HouseholdError::Validation(format!(
                "expense of {} in '{}' is out of range",
                amount, category
            )));
        }
        self.save()?;

        let entry = HistoryEntry::new(date, amount, category);
        self.log(
            AuditEntry::new(Operation::AddExpense, &self.user_id)
                .subject(category)
                .after(&entry)
                .summary(format!("balance: {} -> {}", before, self.record.balance)),
        )
    }

    /// Rename a category and retag its history entries
    ///
    /// Callers ensure `new` is non-empty and not an existing category.
    pub fn rename_category(&mut self, old: &str, new: &str) -> HouseholdResult<()> {
        self.record.rename_category(old, new);
        self.save()?;

        self.log(
            AuditEntry::new(Operation::RenameCategory, &self.user_id)
                .subject(old)
                .before(&old)
                .after(&new),
        )
    }

    /// Delete a category and every history entry booked against it
    ///
    /// Returns the number of history entries removed.
    pub fn delete_category(&mut self, name: &str) -> HouseholdResult<usize> {
        let removed = self.record.delete_category(name);
        self.save()?;

        self.log(
            AuditEntry::new(Operation::DeleteCategory, &self.user_id)
                .subject(name)
                .summary(format!("{} history entries removed", removed)),
        )?;
        Ok(removed)
    }

    /// Replace the record with the zero state
    pub fn reset(&mut self) -> HouseholdResult<()> {
        let before = std::mem::take(&mut self.record);
        self.save()?;

        self.log(AuditEntry::new(Operation::Reset, &self.user_id).before(&before))
    }

    pub fn balance(&self) -> i64 {
        self.record.balance
    }

    pub fn categories(&self) -> &[String] {
        &self.record.categories
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.record.history
    }

    pub fn record(&self) -> &AccountRecord {
        &self.record
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The underlying document store
    pub fn store(&self) -> &S {
        &self.store
    }

    fn log(&self, entry: AuditEntry) -> HouseholdResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileStore, MemoryStore};
    use tempfile::TempDir;

    fn loaded_store() -> AccountStore<MemoryStore> {
        let mut account = AccountStore::new(MemoryStore::new(), "demoUser");
        account.load().unwrap();
        account
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    #[test]
    fn test_load_initializes_and_persists_zero_state() {
        let account = loaded_store();

        assert_eq!(account.balance(), 0);
        assert!(account.categories().is_empty());
        assert!(account.history().is_empty());
        assert_eq!(account.store().write_count(), 1);
        assert_eq!(account.store().document("demoUser"), Some(AccountRecord::new()));
    }

    #[test]
    fn test_load_existing_document_does_not_write() {
        let mut stored = AccountRecord::new();
        stored.set_balance(42);
        stored.add_category("food");

        let mut account =
            AccountStore::new(MemoryStore::with_document("demoUser", stored.clone()), "demoUser");
        account.load().unwrap();

        assert_eq!(account.record(), &stored);
        assert_eq!(account.store().write_count(), 0);
    }

    #[test]
    fn test_set_balance() {
        let mut account = loaded_store();
        for b in [0, 1, 1000, i64::MAX] {
            account.set_balance(b).unwrap();
            assert_eq!(account.balance(), b);
            assert_eq!(account.store().document("demoUser").unwrap().balance, b);
        }
    }

    #[test]
    fn test_add_expense_decreases_balance_and_appends() {
        let mut account = loaded_store();
        account.set_balance(500).unwrap();

        let before = today();
        account.add_expense(120, "never-added").unwrap();
        let after = today();

        assert_eq!(account.balance(), 380);
        assert_eq!(account.history().len(), 1);
        let entry = &account.history()[0];
        assert_eq!(entry.amount, 120);
        assert_eq!(entry.category, "never-added");
        assert!(entry.date == before || entry.date == after);
    }

    #[test]
    fn test_add_expense_can_go_negative() {
        let mut account = loaded_store();
        account.add_expense(50, "food").unwrap();
        assert_eq!(account.balance(), -50);
    }

    #[test]
    fn test_add_category_twice_saves_once() {
        let mut account = loaded_store();

        assert!(account.add_category("food").unwrap());
        let writes = account.store().write_count();
        assert!(!account.add_category("food").unwrap());

        assert_eq!(account.categories(), ["food"]);
        assert_eq!(account.store().write_count(), writes);
    }

    #[test]
    fn test_rename_category_retags_history() {
        let mut account = loaded_store();
        account.add_category("food").unwrap();
        account.add_category("rent").unwrap();
        account.add_expense(100, "food").unwrap();
        account.add_expense(900, "rent").unwrap();

        account.rename_category("food", "groceries").unwrap();

        assert_eq!(account.categories(), ["groceries", "rent"]);
        assert!(account.history().iter().all(|e| e.category != "food"));
        assert_eq!(account.history()[0].category, "groceries");
        let stored = account.store().document("demoUser").unwrap();
        assert_eq!(stored.categories, vec!["groceries", "rent"]);
    }

    #[test]
    fn test_delete_category_cascades() {
        let mut account = loaded_store();
        account.add_category("food").unwrap();
        account.add_expense(100, "food").unwrap();

        assert_eq!(account.delete_category("food").unwrap(), 1);

        assert!(account.categories().is_empty());
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut account = loaded_store();
        account.set_balance(10).unwrap();
        account.add_category("food").unwrap();
        account.add_expense(3, "food").unwrap();

        account.reset().unwrap();

        assert_eq!(account.balance(), 0);
        assert!(account.categories().is_empty());
        assert!(account.history().is_empty());
        assert_eq!(account.store().document("demoUser"), Some(AccountRecord::new()));
    }

    #[test]
    fn test_budget_scenario() {
        let mut account = loaded_store();
        account.set_balance(1000).unwrap();
        account.add_category("food").unwrap();
        account.add_expense_on(300, "food", today()).unwrap();

        assert_eq!(account.balance(), 700);
        assert_eq!(account.categories(), ["food"]);
        assert_eq!(account.history(), [HistoryEntry::new(today(), 300, "food")]);
        assert_eq!(account.record().spent_in("food"), Some(300));
    }

    #[test]
    fn test_out_of_range_expense_is_rejected_without_save() {
        let mut account = loaded_store();
        account.add_expense(i64::MAX, "food").unwrap();
        let writes = account.store().write_count();

        let err = account.add_expense(1, "food").unwrap_err();

        assert!(matches!(err, HouseholdError::Validation(_)));
        assert_eq!(account.balance(), -i64::MAX);
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.store().write_count(), writes);
    }

    #[test]
    fn test_failed_save_keeps_in_memory_mutation() {
        let mut account = loaded_store();
        account.set_balance(100).unwrap();

        account.store().set_fail_writes(true);
        let err = account.add_expense(30, "food").unwrap_err();

        assert!(err.is_storage());
        assert_eq!(account.balance(), 70);
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.store().document("demoUser").unwrap().balance, 100);

        // The next successful save catches storage up
        account.store().set_fail_writes(false);
        account.save().unwrap();
        assert_eq!(account.store().document("demoUser").unwrap().balance, 70);
    }

    #[test]
    fn test_failed_load_propagates() {
        let temp_dir = TempDir::new().unwrap();
        let mut account = AccountStore::new(JsonFileStore::new(temp_dir.path().into()), "../bad");
        assert!(account.load().is_err());
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let mut account = AccountStore::new(MemoryStore::new(), "demoUser")
            .with_audit(AuditLogger::new(log_path.clone()));

        account.load().unwrap();
        account.set_balance(1000).unwrap();
        account.add_category("food").unwrap();
        account.add_category("food").unwrap();
        account.add_expense(300, "food").unwrap();
        account.rename_category("food", "meals").unwrap();
        account.delete_category("meals").unwrap();
        account.reset().unwrap();

        let operations: Vec<Operation> = AuditLogger::new(log_path)
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();

        assert_eq!(
            operations,
            vec![
                Operation::Initialize,
                Operation::SetBalance,
                Operation::AddCategory,
                Operation::AddExpense,
                Operation::RenameCategory,
                Operation::DeleteCategory,
                Operation::Reset,
            ]
        );
    }

    #[test]
    fn test_file_backed_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("users");

        let mut account = AccountStore::new(JsonFileStore::new(dir.clone()), "demoUser");
        account.load().unwrap();
        account.set_balance(800).unwrap();
        account.add_category("food").unwrap();
        account.add_expense(200, "food").unwrap();

        let mut reopened = AccountStore::new(JsonFileStore::new(dir), "demoUser");
        reopened.load().unwrap();
        assert_eq!(reopened.record(), account.record());
    }
}
