//! Audit logging for the household account
//!
//! Every successful mutation of the account record is appended to a
//! line-delimited JSON log (`audit.log`) with the relevant before/after
//! values.
//!
//! # Example
//!
//! ```rust,ignore
//! use household::audit::{AuditEntry, AuditLogger, Operation};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(
//!     &AuditEntry::new(Operation::SetBalance, "demoUser")
//!         .before(&0)
//!         .after(&1000),
//! )?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
