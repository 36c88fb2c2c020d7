//! Category CLI commands
//!
//! Category creation plus the rename/delete controls of the category totals
//! list.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_category_totals;
use crate::error::HouseholdResult;
use crate::storage::DocumentStore;
use crate::view::ViewBinder;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories with the total spent in each
    List,

    /// Add a new category
    Add {
        /// Category name (case-sensitive)
        name: String,
    },

    /// Rename a category and retag its expenses
    Rename {
        /// Current category name
        name: String,
        /// New category name
        new_name: String,
    },

    /// Delete a category together with all of its expenses
    Delete {
        /// Category name
        name: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a category command
pub fn handle_category_command<S: DocumentStore>(
    binder: &mut ViewBinder<S>,
    settings: &Settings,
    cmd: CategoryCommands,
) -> HouseholdResult<()> {
    match cmd {
        CategoryCommands::List => {}

        CategoryCommands::Add { name } => {
            if !binder.add_category(&name)? {
                return Ok(());
            }
        }

        CategoryCommands::Rename { name, new_name } => {
            if !binder.rename_category(&name, Some(&new_name))? {
                return Ok(());
            }
        }

        CategoryCommands::Delete { name, force } => {
            if !force {
                println!("About to delete category '{}' and all of its expenses.", name);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }
            binder.delete_category(&name, true)?;
        }
    }

    print!(
        "{}",
        format_category_totals(&binder.page().category_rows, &settings.currency_label)
    );
    Ok(())
}
