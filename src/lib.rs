//! Household account - single-user household budgeting
//!
//! Tracks a balance, a list of spending categories and a chronological
//! expense history. The whole state is one document (`AccountRecord`) that
//! is rewritten in full after every change, either to a local JSON file or to
//! a remote document endpoint.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `models`: the account record and its history entries
//! - `storage`: the `DocumentStore` trait and its backends
//! - `audit`: append-only audit log of mutations
//! - `services`: `AccountStore`, which mutates and persists the record
//! - `view`: input parsing, category totals, display regions and `ViewBinder`
//! - `display`: plain-text rendering for the CLI
//! - `cli`, `tui`: the two user-facing surfaces
//!
//! # Example
//!
//! ```rust
//! use household::services::AccountStore;
//! use household::storage::MemoryStore;
//! use household::view::ViewBinder;
//!
//! let mut binder = ViewBinder::new(AccountStore::new(MemoryStore::new(), "demoUser"));
//! binder.start()?;
//! binder.set_balance("1000")?;
//! binder.add_category("food")?;
//! binder.add_expense("300", "food")?;
//!
//! assert_eq!(binder.page().balance, Some(700));
//! assert_eq!(binder.page().category_rows[0].total, 300);
//! # Ok::<(), household::HouseholdError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;
pub mod view;

pub use error::{HouseholdError, HouseholdResult};
