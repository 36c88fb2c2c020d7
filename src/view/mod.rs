//! View layer
//!
//! Surface-independent part of the user interface: input parsing, the
//! category total aggregation, the display regions and the binder that ties
//! user actions to the account store. The CLI and the TUI both drive a
//! `ViewBinder` and draw its `Page`.

pub mod binder;
pub mod input;
pub mod page;
pub mod totals;

pub use binder::ViewBinder;
pub use page::Page;
pub use totals::{category_totals, CategoryTotal};
