// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! The revenue splitter: a registry of payees, each holding a percentage
//! share, and a distributor paying every payee its share of the native
//! value held at the splitter's address.
//!
//! Calls are synchronous state transitions. Each call receives the caller
//! and the native ledger explicitly, and either commits all of its effects
//! (ledger changes and events) or returns an error and changes nothing.
//!
//! # Architecture
//!
//! ## `registry.rs`
//! Ordered payee list with the running percentage total, never above 100.
//!
//! ## `distributor.rs`
//! Computes payouts (floor of `balance * percentage / 100`) and stages the
//! matching transfers.
//!
//! ## `speculative_ledger.rs`
//! Staging layer over a `LedgerController`: transfers of a call accumulate
//! as `LedgerChanges` and reach the native ledger only if the call succeeds.
//!
//! ## `splitter.rs`
//! The `RevenueSplitter` facade tying the above together, with release
//! accounting and the event store.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod config;
mod distributor;
mod error;
mod registry;
mod speculative_ledger;
mod splitter;

pub use config::{DistributionTrigger, RemainderPolicy, SplitterConfig};
pub use distributor::{Payout, RevenueDistributor};
pub use error::SplitterError;
pub use registry::RecipientRegistry;
pub use speculative_ledger::SpeculativeLedger;
pub use splitter::RevenueSplitter;

#[cfg(test)]
mod tests;
