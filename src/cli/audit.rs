//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::config::paths::HouseholdPaths;
use crate::error::HouseholdResult;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(paths: &HouseholdPaths, limit: usize) -> HouseholdResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.describe());
    }

    let total = logger.entry_count()?;
    if total > entries.len() {
        println!();
        println!("Showing {} of {} entries.", entries.len(), total);
    }

    Ok(())
}
