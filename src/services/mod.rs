//! Service layer for the household account
//!
//! The account store applies mutations to the in-memory record and persists
//! the whole record after each one.

pub mod account;

pub use account::AccountStore;
