//! Document store abstraction
//!
//! A document store holds one `AccountRecord` per user id. Reads report
//! whether a document exists; writes replace the whole document.

use crate::error::{HouseholdError, HouseholdResult};
use crate::models::AccountRecord;

/// Fetch-by-id / replace-by-id storage of account records
pub trait DocumentStore {
    /// Fetch the document for `user_id`, or `None` if it has never been written
    fn fetch(&self, user_id: &str) -> HouseholdResult<Option<AccountRecord>>;

    /// Replace the document for `user_id` with `record`
    ///
    /// No merge and no version check: the last write wins.
    fn replace(&self, user_id: &str, record: &AccountRecord) -> HouseholdResult<()>;

    /// Short human-readable description of where documents live
    fn describe(&self) -> String;
}

impl<S: DocumentStore + ?Sized> DocumentStore for Box<S> {
    fn fetch(&self, user_id: &str) -> HouseholdResult<Option<AccountRecord>> {
        (**self).fetch(user_id)
    }

    fn replace(&self, user_id: &str, record: &AccountRecord) -> HouseholdResult<()> {
        (**self).replace(user_id, record)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// User ids name a file or a URL path segment, so keep them to a safe
/// character set
pub fn validate_user_id(user_id: &str) -> HouseholdResult<()> {
    let valid = !user_id.is_empty()
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !user_id.starts_with('.');

    if valid {
        Ok(())
    } else {
        Err(HouseholdError::Config(format!("Invalid user id: {:?}", user_id)))
    }
}
