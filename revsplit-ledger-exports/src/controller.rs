// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::LedgerChanges;
use revsplit_models::{Address, Amount};

/// Access to a native value ledger
#[cfg_attr(feature = "test-exports", mockall::automock)]
pub trait LedgerController {
    /// Allows applying `LedgerChanges` to the ledger
    fn apply_changes(&mut self, changes: LedgerChanges);

    /// Gets the balance of a ledger entry
    ///
    /// # Returns
    /// The balance, or None if the ledger entry was not found
    fn get_balance(&self, addr: &Address) -> Option<Amount>;

    /// Checks if a ledger entry exists
    fn entry_exists(&self, addr: &Address) -> bool;

    /// Checks whether an address accepts incoming coins.
    /// Addresses without an entry accept coins.
    fn is_payable(&self, addr: &Address) -> bool;
}
