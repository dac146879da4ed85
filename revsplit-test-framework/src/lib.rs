// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Tooling shared by the tests of the revsplit crates.

use revsplit_ledger_exports::{LedgerConfig, LedgerEntry};
use revsplit_ledger_worker::FinalLedger;
use revsplit_models::{Address, Amount};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Installs a fmt subscriber once per test binary. `RUST_LOG` overrides the
/// default `debug` level.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic address derived from a name
pub fn named_address(name: &str) -> Address {
    let hash = blake3::hash(name.as_bytes());
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash.as_bytes()[..20]);
    Address::from_bytes(bytes)
}

/// The signers every test starts with: a deployer and a few users
#[derive(Debug, Clone, Copy)]
pub struct TestAccounts {
    /// deploys the ledgers and holds the initial supply
    pub deployer: Address,
    /// first user
    pub user1: Address,
    /// second user
    pub user2: Address,
    /// third user
    pub user3: Address,
    /// spender used for delegated transfers
    pub exchange: Address,
}

impl TestAccounts {
    /// Builds the accounts from fixed names
    pub fn new() -> Self {
        TestAccounts {
            deployer: named_address("deployer"),
            user1: named_address("user1"),
            user2: named_address("user2"),
            user3: named_address("user3"),
            exchange: named_address("exchange"),
        }
    }

    /// All accounts, deployer first
    pub fn all(&self) -> [Address; 5] {
        [
            self.deployer,
            self.user1,
            self.user2,
            self.user3,
            self.exchange,
        ]
    }

    /// A native ledger in which every account holds `tokens` whole coins
    pub fn funded_ledger(&self, tokens: u128) -> FinalLedger {
        let mut ledger = FinalLedger::new(LedgerConfig::default());
        let balance = Amount::from_tokens(tokens).unwrap_or(Amount::MAX);
        for addr in self.all() {
            ledger.set_entry(
                addr,
                LedgerEntry {
                    balance,
                    payable: true,
                },
            );
        }
        ledger
    }
}

impl Default for TestAccounts {
    fn default() -> Self {
        Self::new()
    }
}
