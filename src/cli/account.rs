//! Balance, expense, history and reset commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_balance, format_category_totals, format_history};
use crate::error::HouseholdResult;
use crate::storage::DocumentStore;
use crate::view::ViewBinder;

/// Balance subcommands
#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Show the current balance
    Show,

    /// Set the balance (non-negative integer)
    Set {
        /// New balance
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense dated today
    Add {
        /// Amount spent (positive integer)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category the expense is booked against
        category: String,
    },
}

/// Print the regions rendered at startup
pub fn handle_show<S: DocumentStore>(binder: &ViewBinder<S>, settings: &Settings) {
    let label = &settings.currency_label;
    print!("{}", format_balance(binder.page().balance, label));
    println!();
    print!("{}", format_category_totals(&binder.page().category_rows, label));
}

/// Handle a balance command
pub fn handle_balance_command<S: DocumentStore>(
    binder: &mut ViewBinder<S>,
    settings: &Settings,
    cmd: BalanceCommands,
) -> HouseholdResult<()> {
    match cmd {
        BalanceCommands::Show => {}
        BalanceCommands::Set { amount } => {
            if !binder.set_balance(&amount)? {
                return Ok(());
            }
        }
    }

    print!(
        "{}",
        format_balance(binder.page().balance, &settings.currency_label)
    );
    Ok(())
}

/// Handle an expense command
pub fn handle_expense_command<S: DocumentStore>(
    binder: &mut ViewBinder<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> HouseholdResult<()> {
    match cmd {
        ExpenseCommands::Add { amount, category } => {
            if binder.add_expense(&amount, &category)? {
                handle_show(binder, settings);
            }
        }
    }
    Ok(())
}

/// Print every recorded expense in order
pub fn handle_history<S: DocumentStore>(binder: &mut ViewBinder<S>, settings: &Settings) {
    binder.show_history();
    print!(
        "{}",
        format_history(&binder.page().history_rows, &settings.currency_label)
    );
}

/// Reset the record to the zero state
pub fn handle_reset<S: DocumentStore>(
    binder: &mut ViewBinder<S>,
    settings: &Settings,
    force: bool,
) -> HouseholdResult<()> {
    if !force {
        println!("About to erase the balance, all categories and all expenses.");
        println!();
        println!("Use --force to confirm reset");
        return Ok(());
    }

    binder.reset(true)?;
    println!("All data has been reset.");
    handle_show(binder, settings);
    Ok(())
}
