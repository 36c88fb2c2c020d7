//! Terminal User Interface module
//!
//! Interactive surface for the household account built on ratatui. Shows
//! the balance, the category totals list and the expense history, with
//! dialogs for every action.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

pub mod dialogs;
pub mod layout;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
