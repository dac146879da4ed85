// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! A fungible token ledger: per-holder balances and owner to spender
//! allowances over a fixed supply minted once to the deployer.
//!
//! Every mutating call receives the authenticated caller explicitly and
//! either commits all of its effects, including its events, or returns an
//! error and leaves the ledger untouched. The sum of all balances is always
//! equal to the total supply.
//!
//! # Architecture
//!
//! ## `config.rs`
//! Deployment parameters of a token.
//!
//! ## `error.rs`
//! Rejection reasons of token calls.
//!
//! ## `ledger.rs`
//! The `FungibleLedger` itself.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod config;
mod error;
mod ledger;

pub use config::TokenConfig;
pub use error::TokenError;
pub use ledger::FungibleLedger;

#[cfg(test)]
mod tests;
