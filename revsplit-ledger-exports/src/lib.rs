// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! Interface of the native value ledger: the ledger holding the coins that
//! the execution host attaches to calls, as opposed to token balances.
//!
//! The revenue splitter never writes to a native ledger directly. It stages
//! its transfers as `LedgerChanges` and hands them to
//! `LedgerController::apply_changes` only once the whole call succeeded.
//!
//! # Test exports
//!
//! When the crate feature `test-exports` is enabled, a `MockLedgerController`
//! generated by `mockall` is exported.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod config;
mod controller;
mod error;
mod ledger_changes;
mod ledger_entry;
mod types;

pub use config::LedgerConfig;
pub use controller::LedgerController;
#[cfg(feature = "test-exports")]
pub use controller::MockLedgerController;
pub use error::LedgerError;
pub use ledger_changes::LedgerChanges;
pub use ledger_entry::LedgerEntry;
pub use types::Applicable;

#[cfg(test)]
mod tests;
