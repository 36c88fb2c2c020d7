//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the view binder.

pub mod account;
pub mod audit;
pub mod category;

pub use account::{
    handle_balance_command, handle_expense_command, handle_history, handle_reset, handle_show,
    BalanceCommands, ExpenseCommands,
};
pub use audit::handle_audit_command;
pub use category::{handle_category_command, CategoryCommands};
