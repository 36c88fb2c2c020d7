//! Custom error types for the household account
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for household account operations
#[derive(Error, Debug)]
pub enum HouseholdError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A mutation was rejected before touching the record
    #[error("Validation error: {0}")]
    Validation(String),

    /// Document store errors (load or save failed)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Remote document endpoint errors
    #[error("Remote store error: {0}")]
    Remote(String),
}

impl HouseholdError {
    /// Check if the error came from the document store (local or remote)
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Remote(_))
    }
}

impl From<std::io::Error> for HouseholdError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HouseholdError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for HouseholdError {
    fn from(err: reqwest::Error) -> Self {
        Self::Remote(err.to_string())
    }
}

/// Result type alias for household account operations
pub type HouseholdResult<T> = Result<T, HouseholdError>;
