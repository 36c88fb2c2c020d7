//! Audit entry data structures
//!
//! Defines the operations that are audited and the format of a single log line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mutations of the account record that get audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// A zero record was created because none was stored
    Initialize,
    SetBalance,
    AddCategory,
    AddExpense,
    RenameCategory,
    DeleteCategory,
    Reset,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Initialize => write!(f, "INITIALIZE"),
            Operation::SetBalance => write!(f, "SET_BALANCE"),
            Operation::AddCategory => write!(f, "ADD_CATEGORY"),
            Operation::AddExpense => write!(f, "ADD_EXPENSE"),
            Operation::RenameCategory => write!(f, "RENAME_CATEGORY"),
            Operation::DeleteCategory => write!(f, "DELETE_CATEGORY"),
            Operation::Reset => write!(f, "RESET"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Document the operation was applied to
    pub user_id: String,

    /// What was affected, e.g. a category name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Relevant state before the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Relevant state after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    /// Start an entry for `operation` on the document of `user_id`
    pub fn new(operation: Operation, user_id: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            user_id: user_id.into(),
            subject: None,
            before: None,
            after: None,
            summary: None,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn before<T: Serialize>(mut self, value: &T) -> Self {
        self.before = serde_json::to_value(value).ok();
        self
    }

    pub fn after<T: Serialize>(mut self, value: &T) -> Self {
        self.after = serde_json::to_value(value).ok();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// One-line description for terminal output
    pub fn describe(&self) -> String {
        let mut line = format!(
            "{} {} [{}]",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.user_id
        );
        if let Some(subject) = &self.subject {
            line.push_str(&format!(" {}", subject));
        }
        if let Some(summary) = &self.summary {
            line.push_str(&format!(": {}", summary));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let entry = AuditEntry::new(Operation::SetBalance, "demoUser")
            .before(&0)
            .after(&1000)
            .summary("balance: 0 -> 1000");

        assert_eq!(entry.operation, Operation::SetBalance);
        assert_eq!(entry.before, Some(json!(0)));
        assert_eq!(entry.after, Some(json!(1000)));
        assert!(entry.subject.is_none());
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::new(Operation::Reset, "demoUser");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["operation"], "reset");
        assert!(json.get("before").is_none());
        assert!(json.get("summary").is_none());
    }

    #[test]
    fn test_describe() {
        let entry = AuditEntry::new(Operation::DeleteCategory, "demoUser")
            .subject("food")
            .summary("2 history entries removed");

        let line = entry.describe();
        assert!(line.contains("DELETE_CATEGORY [demoUser] food: 2 history entries removed"));
    }
}
