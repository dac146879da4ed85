// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! The speculative ledger stages the native value transfers of a call on
//! top of a `LedgerController`. Nothing reaches the underlying ledger until
//! the caller hands the result of `take` to `LedgerController::apply_changes`.

use revsplit_ledger_exports::{Applicable, LedgerChanges, LedgerController, LedgerError};
use revsplit_models::{Address, Amount};

/// Transfers staged on top of a native ledger
pub struct SpeculativeLedger<'a> {
    /// ledger read when a balance was not changed by this call
    final_ledger: &'a dyn LedgerController,
    /// changes caused by this call
    added_changes: LedgerChanges,
}

impl<'a> SpeculativeLedger<'a> {
    /// Creates a speculative ledger without any change
    pub fn new(final_ledger: &'a dyn LedgerController) -> Self {
        SpeculativeLedger {
            final_ledger,
            added_changes: LedgerChanges::default(),
        }
    }

    /// Gets the balance of an address, including the changes staged so far
    ///
    /// # Returns
    /// Some(Amount) if the address was found, otherwise None
    pub fn get_balance(&self, addr: &Address) -> Option<Amount> {
        self.added_changes
            .get_balance_or_else(addr, || self.final_ledger.get_balance(addr))
    }

    /// Transfers coins from one address to another.
    /// No changes are retained in case of failure.
    /// The spending address, if defined, must exist.
    /// The credited address, if defined, must accept coins.
    ///
    /// # Parameters:
    /// * `from_addr`: optional spending address (use None for pure coin creation)
    /// * `to_addr`: optional crediting address (use None for pure coin destruction)
    /// * `amount`: amount of coins to transfer
    pub fn transfer_coins(
        &mut self,
        from_addr: Option<Address>,
        to_addr: Option<Address>,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let mut changes = LedgerChanges::default();

        if let Some(from_addr) = from_addr {
            let old_balance = self
                .get_balance(&from_addr)
                .ok_or_else(|| LedgerError::MissingEntry(from_addr.to_string()))?;
            let new_balance = old_balance.checked_sub(amount).ok_or_else(|| {
                LedgerError::InsufficientBalance(format!(
                    "failed to transfer {} coins from spending address {} holding {}",
                    amount, from_addr, old_balance
                ))
            })?;
            changes.set_balance(from_addr, new_balance);
        }

        // to_addr can be the same as from_addr
        if let Some(to_addr) = to_addr {
            if !self.final_ledger.is_payable(&to_addr) {
                return Err(LedgerError::NotPayable(to_addr.to_string()));
            }
            let old_balance = changes
                .get_balance_or_else(&to_addr, || self.get_balance(&to_addr))
                .unwrap_or_default();
            let new_balance = old_balance.checked_add(amount).ok_or_else(|| {
                LedgerError::BalanceOverflow(format!(
                    "crediting {} coins to address {} holding {}",
                    amount, to_addr, old_balance
                ))
            })?;
            changes.set_balance(to_addr, new_balance);
        }

        self.added_changes.apply(changes);
        Ok(())
    }

    /// Consumes the speculative ledger, returning the staged changes
    pub fn take(self) -> LedgerChanges {
        self.added_changes
    }
}
