// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! Shared data structures of the revsplit ledgers: account addresses,
//! fixed-point amounts and the events emitted by the ledgers when a call
//! commits.
//!
//! # Architecture
//!
//! ## `address.rs`
//! Opaque 160-bit account identifiers, their text form and binary codec.
//!
//! ## `amount.rs`
//! Checked fixed-point amounts with 18 decimals, used for token balances
//! and native value alike.
//!
//! ## `event.rs`
//! Notifications emitted by the ledgers and their binary codec.
//!
//! ## `event_store.rs`
//! Append-only ordered store of the events emitted by one ledger instance.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

pub mod address;
pub mod amount;
pub mod config;
pub mod error;
pub mod event;
pub mod event_store;

pub use address::Address;
pub use amount::Amount;
pub use error::ModelsError;
