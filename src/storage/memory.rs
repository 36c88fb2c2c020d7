//! In-memory document store
//!
//! Holds documents in a map for the lifetime of the process. Writes can be
//! made to fail on demand to observe how callers behave when a save is lost.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::error::{HouseholdError, HouseholdResult};
use crate::models::AccountRecord;

use super::document::DocumentStore;

/// Document store kept entirely in memory
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, AccountRecord>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `record` for `user_id`
    pub fn with_document(user_id: &str, record: AccountRecord) -> Self {
        let store = Self::new();
        if let Ok(mut documents) = store.documents.write() {
            documents.insert(user_id.to_string(), record);
        }
        store
    }

    /// Make every subsequent `replace` fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored document for `user_id`
    pub fn document(&self, user_id: &str) -> Option<AccountRecord> {
        self.documents
            .read()
            .ok()
            .and_then(|documents| documents.get(user_id).cloned())
    }
}

impl DocumentStore for MemoryStore {
    fn fetch(&self, user_id: &str) -> HouseholdResult<Option<AccountRecord>> {
        let documents = self
            .documents
            .read()
            .map_err(|e| HouseholdError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(documents.get(user_id).cloned())
    }

    fn replace(&self, user_id: &str, record: &AccountRecord) -> HouseholdResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(HouseholdError::Storage(format!(
                "Write rejected for document {}",
                user_id
            )));
        }

        let mut documents = self
            .documents
            .write()
            .map_err(|e| HouseholdError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        documents.insert(user_id.to_string(), record.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
