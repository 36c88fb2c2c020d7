//! Core data models for the household account
//!
//! The persisted document (`AccountRecord`) and its expense lines
//! (`HistoryEntry`).

pub mod entry;
pub mod record;

pub use entry::HistoryEntry;
pub use record::AccountRecord;
