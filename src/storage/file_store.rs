//! Local JSON document store
//!
//! Keeps each user's record in `<users_dir>/<user_id>.json`.

use std::path::PathBuf;

use crate::error::HouseholdResult;
use crate::models::AccountRecord;

use super::document::{validate_user_id, DocumentStore};
use super::file_io::{read_json_optional, write_json_atomic};

/// Document store backed by one JSON file per user
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the document for `user_id`
    pub fn document_path(&self, user_id: &str) -> HouseholdResult<PathBuf> {
        validate_user_id(user_id)?;
        Ok(self.dir.join(format!("{}.json", user_id)))
    }
}

impl DocumentStore for JsonFileStore {
    fn fetch(&self, user_id: &str) -> HouseholdResult<Option<AccountRecord>> {
        read_json_optional(self.document_path(user_id)?)
    }

    fn replace(&self, user_id: &str, record: &AccountRecord) -> HouseholdResult<()> {
        write_json_atomic(self.document_path(user_id)?, record)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonFileStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("users"));
        (temp_dir, store)
    }

    #[test]
    fn test_fetch_missing_document() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.fetch("demoUser").unwrap().is_none());
    }

    #[test]
    fn test_replace_and_fetch() {
        let (_temp_dir, store) = create_test_store();

        let mut record = AccountRecord::new();
        record.set_balance(1200);
        record.add_category("food");
        store.replace("demoUser", &record).unwrap();

        assert_eq!(store.fetch("demoUser").unwrap(), Some(record));
    }

    #[test]
    fn test_replace_overwrites_whole_document() {
        let (_temp_dir, store) = create_test_store();

        let mut first = AccountRecord::new();
        first.add_category("food");
        first.add_category("rent");
        store.replace("demoUser", &first).unwrap();

        let mut second = AccountRecord::new();
        second.set_balance(5);
        store.replace("demoUser", &second).unwrap();

        let loaded = store.fetch("demoUser").unwrap().unwrap();
        assert!(loaded.categories.is_empty());
        assert_eq!(loaded.balance, 5);
    }

    #[test]
    fn test_documents_are_per_user() {
        let (_temp_dir, store) = create_test_store();

        let mut record = AccountRecord::new();
        record.set_balance(1);
        store.replace("alice", &record).unwrap();

        assert!(store.fetch("bob").unwrap().is_none());
    }

    #[test]
    fn test_rejects_path_like_user_ids() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.fetch("../escape").is_err());
        assert!(store.fetch("").is_err());
        assert!(store.document_path("demo_user-1").is_ok());
    }
}
