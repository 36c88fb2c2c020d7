use anyhow::Result;
use clap::{Parser, Subcommand};

use household::audit::AuditLogger;
use household::cli::{
    handle_audit_command, handle_balance_command, handle_category_command,
    handle_expense_command, handle_history, handle_reset, handle_show,
};
use household::config::{paths::HouseholdPaths, settings::Settings};
use household::services::AccountStore;
use household::storage::{open_store, DocumentStore};
use household::view::ViewBinder;

#[derive(Parser)]
#[command(
    name = "household",
    version,
    about = "Household account book for the terminal",
    long_about = "Tracks a balance, a set of spending categories and a dated expense \
                  history. Data is kept per user id in a local JSON document or on a \
                  remote document endpoint."
)]
struct Cli {
    /// User id whose record is used
    #[arg(short, long, global = true, env = "HOUSEHOLD_USER")]
    user: Option<String>,

    /// Base URL of a remote document endpoint
    #[arg(long, global = true, env = "HOUSEHOLD_REMOTE_URL")]
    remote: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the balance and category totals
    Show,

    /// Balance commands
    #[command(subcommand)]
    Balance(household::cli::BalanceCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(household::cli::ExpenseCommands),

    /// Category commands
    #[command(subcommand)]
    Category(household::cli::CategoryCommands),

    /// Show every recorded expense
    History,

    /// Erase the balance, categories and history
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directory, settings file and empty record
    Init,

    /// Show current configuration and paths
    Config,

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = HouseholdPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    if let Some(user) = cli.user {
        settings.user_id = user;
    }
    if let Some(remote) = cli.remote {
        settings.remote_url = Some(remote);
    }

    // Commands that never touch the account record
    match cli.command {
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(());
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&paths, limit)?;
            return Ok(());
        }
        _ => {}
    }

    let store = open_store(&paths, &settings)?;
    let mut account = AccountStore::new(store, settings.user_id.clone());
    if settings.audit_enabled {
        account = account.with_audit(AuditLogger::new(paths.audit_log()));
    }

    let mut binder = ViewBinder::new(account);
    binder.start()?;

    match cli.command {
        Some(Commands::Show) | None => handle_show(&binder, &settings),
        Some(Commands::Balance(cmd)) => handle_balance_command(&mut binder, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut binder, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut binder, &settings, cmd)?,
        Some(Commands::History) => handle_history(&mut binder, &settings),
        Some(Commands::Reset { force }) => handle_reset(&mut binder, &settings, force)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized household account at: {}", paths.base_dir().display());
            println!("Record for '{}' stored in {}", settings.user_id, binder.account().store().describe());
        }
        Some(Commands::Tui) => {
            household::tui::run_tui(binder, &settings.currency_label)?;
        }
        Some(Commands::Config) | Some(Commands::Audit { .. }) => {}
    }

    Ok(())
}

fn print_config(paths: &HouseholdPaths, settings: &Settings) {
    println!("Household Account Configuration");
    println!("===============================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Data directory:  {}", paths.data_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Audit log:       {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  User id:        {}", settings.user_id);
    match settings.remote_url.as_deref() {
        Some(url) if settings.uses_remote() => println!("  Storage:        remote ({})", url.trim()),
        _ => println!("  Storage:        local"),
    }
    println!("  Currency label: {}", settings.currency_label);
    println!("  Audit enabled:  {}", settings.audit_enabled);
}
