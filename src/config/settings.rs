//! User settings for the household account
//!
//! Selects which document is used (user id), where it lives (local file or
//! remote endpoint) and how amounts are labelled.

use serde::{Deserialize, Serialize};

use super::paths::HouseholdPaths;
use crate::error::HouseholdError;

/// User id used when none has been configured
pub const DEFAULT_USER_ID: &str = "demoUser";

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Key of the document holding the account record
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Base URL of a remote document endpoint; local files are used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,

    /// Label appended to amounts in rendered output
    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

fn default_currency_label() -> String {
    "円".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            remote_url: None,
            currency_label: default_currency_label(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &HouseholdPaths) -> Result<Self, HouseholdError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                HouseholdError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                HouseholdError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller asks for it
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HouseholdPaths) -> Result<(), HouseholdError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            HouseholdError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            HouseholdError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Whether the record lives behind a remote endpoint
    pub fn uses_remote(&self) -> bool {
        self.remote_url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }
}
