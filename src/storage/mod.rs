//! Storage layer for the household account
//!
//! Every backend stores one `AccountRecord` document per user id and
//! replaces it wholesale on write. Local files are written atomically;
//! a remote endpoint can be configured instead.

pub mod document;
pub mod file_io;
pub mod file_store;
pub mod memory;
pub mod remote;

pub use document::DocumentStore;
pub use file_io::{read_json_optional, write_json_atomic};
pub use file_store::JsonFileStore;
pub use memory::MemoryStore;
pub use remote::RemoteStore;

use crate::config::paths::HouseholdPaths;
use crate::config::settings::Settings;
use crate::error::HouseholdError;

/// Open the document store selected by the settings
///
/// A configured `remote_url` selects the HTTP endpoint; otherwise documents
/// live under the data directory.
pub fn open_store(
    paths: &HouseholdPaths,
    settings: &Settings,
) -> Result<Box<dyn DocumentStore>, HouseholdError> {
    match settings.remote_url.as_deref() {
        Some(url) if settings.uses_remote() => Ok(Box::new(RemoteStore::new(url.trim())?)),
        _ => {
            paths.ensure_directories()?;
            Ok(Box::new(JsonFileStore::new(paths.users_dir())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_local_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HouseholdPaths::with_base_dir(temp_dir.path().to_path_buf());

        let store = open_store(&paths, &Settings::default()).unwrap();

        assert!(paths.users_dir().exists());
        assert!(store.describe().starts_with("file:"));
    }

    #[test]
    fn test_open_remote_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HouseholdPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            remote_url: Some("http://localhost:8080/".into()),
            ..Settings::default()
        };

        let store = open_store(&paths, &settings).unwrap();
        assert_eq!(store.describe(), "http://localhost:8080");
    }
}
