// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file provides structures representing changes to native ledger entries

use crate::types::Applicable;
use revsplit_models::{Address, Amount};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Balances set by a call, by address. Applying changes overwrites balances.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LedgerChanges(pub BTreeMap<Address, Amount>);

impl LedgerChanges {
    /// Sets the balance of an address, creating its entry when applied if needed
    pub fn set_balance(&mut self, addr: Address, balance: Amount) {
        self.0.insert(addr, balance);
    }

    /// Tries to return the balance of an entry
    /// or gets it from a function if the entry's status is unknown
    ///
    /// # Arguments
    /// * `addr`: address for which to get the value
    /// * `f`: fallback function with no arguments and returning `Option<Amount>`
    ///
    /// # Returns
    /// * the balance set by these changes if any
    /// * `f()` otherwise
    pub fn get_balance_or_else<F: FnOnce() -> Option<Amount>>(
        &self,
        addr: &Address,
        f: F,
    ) -> Option<Amount> {
        match self.0.get(addr) {
            Some(balance) => Some(*balance),
            None => f(),
        }
    }

    /// true if no balance is changed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Applicable<LedgerChanges> for LedgerChanges {
    /// extends the current `LedgerChanges` with another one
    fn apply(&mut self, changes: LedgerChanges) {
        self.0.extend(changes.0);
    }
}
