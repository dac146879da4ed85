// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines the structure representing an entry in the native ledger

use revsplit_models::Amount;
use serde::{Deserialize, Serialize};

fn default_payable() -> bool {
    true
}

/// Structure defining an entry associated to an address in the native ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The balance of that entry.
    pub balance: Amount,
    /// Whether the account accepts incoming coins.
    #[serde(default = "default_payable")]
    pub payable: bool,
}

impl Default for LedgerEntry {
    fn default() -> Self {
        LedgerEntry {
            balance: Amount::zero(),
            payable: true,
        }
    }
}
