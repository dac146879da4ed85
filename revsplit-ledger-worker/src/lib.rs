// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! This crate implements an in-memory native value ledger matching addresses
//! to balances.
//!
//! # Architecture
//!
//! ## `ledger.rs`
//! Defines the `FinalLedger` that matches an address to a `LedgerEntry`,
//! and can be manipulated using `LedgerChanges`.
//! The `FinalLedger` can be seeded from a JSON file (see `LedgerConfig`).

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod ledger;

pub use ledger::FinalLedger;

#[cfg(test)]
mod tests;
