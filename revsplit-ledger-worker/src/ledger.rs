// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines the final ledger associating addresses to their native balances.

use revsplit_ledger_exports::{
    LedgerChanges, LedgerConfig, LedgerController, LedgerEntry, LedgerError,
};
use revsplit_models::{Address, Amount};
use std::collections::BTreeMap;
use tracing::debug;

/// Represents a final ledger associating addresses to their native balances.
#[derive(Debug, Default)]
pub struct FinalLedger {
    /// ledger configuration
    pub(crate) config: LedgerConfig,
    /// ledger entries, sorted by address
    pub(crate) sorted_ledger: BTreeMap<Address, LedgerEntry>,
}

impl FinalLedger {
    /// Initializes a new, empty `FinalLedger`.
    pub fn new(config: LedgerConfig) -> Self {
        FinalLedger {
            config,
            sorted_ledger: BTreeMap::new(),
        }
    }

    /// Loads the initial entries from `config.initial_ledger_path`, if set.
    /// Loaded entries replace existing ones.
    pub fn load_initial_ledger(&mut self) -> Result<(), LedgerError> {
        let Some(path) = &self.config.initial_ledger_path else {
            return Ok(());
        };
        let initial_ledger: BTreeMap<Address, LedgerEntry> = serde_json::from_str(
            &std::fs::read_to_string(path).map_err(|err| {
                LedgerError::FileError(format!(
                    "error loading initial ledger file {}: {}",
                    path.to_str().unwrap_or("(non-utf8 path)"),
                    err
                ))
            })?,
        )
        .map_err(|err| {
            LedgerError::FileError(format!(
                "error parsing initial ledger file {}: {}",
                path.to_str().unwrap_or("(non-utf8 path)"),
                err
            ))
        })?;
        debug!("loaded {} initial ledger entries", initial_ledger.len());
        self.sorted_ledger.extend(initial_ledger);
        Ok(())
    }

    /// Inserts or replaces the entry of an address
    pub fn set_entry(&mut self, addr: Address, entry: LedgerEntry) {
        self.sorted_ledger.insert(addr, entry);
    }

    /// Gets a copy of the entry of an address
    pub fn get_entry(&self, addr: &Address) -> Option<LedgerEntry> {
        self.sorted_ledger.get(addr).cloned()
    }

    /// Sum of all balances, saturating at `Amount::MAX`
    pub fn total_balance(&self) -> Amount {
        self.sorted_ledger
            .values()
            .fold(Amount::zero(), |acc, entry| acc.saturating_add(entry.balance))
    }
}

impl LedgerController for FinalLedger {
    /// Allows applying `LedgerChanges` to the final ledger
    fn apply_changes(&mut self, changes: LedgerChanges) {
        for (addr, balance) in changes.0 {
            self.sorted_ledger.entry(addr).or_default().balance = balance;
        }
    }

    fn get_balance(&self, addr: &Address) -> Option<Amount> {
        self.sorted_ledger.get(addr).map(|entry| entry.balance)
    }

    fn entry_exists(&self, addr: &Address) -> bool {
        self.sorted_ledger.contains_key(addr)
    }

    fn is_payable(&self, addr: &Address) -> bool {
        self.sorted_ledger
            .get(addr)
            .map(|entry| entry.payable)
            .unwrap_or(true)
    }
}
