mod invariants;

use crate::{FungibleLedger, TokenConfig};
use revsplit_models::{Address, Amount};
use revsplit_test_framework::{init_tracing, TestAccounts};

pub(crate) fn tokens(n: u128) -> Amount {
    Amount::from_tokens(n).unwrap()
}

/// Deploys `testT` with a supply of 1,000,000 tokens from the deployer account.
pub(crate) fn deploy() -> (FungibleLedger, TestAccounts) {
    init_tracing();
    let accounts = TestAccounts::new();
    let config = TokenConfig {
        name: "testT".to_string(),
        symbol: "testT".to_string(),
        max_supply: 1_000_000,
        max_events: 100,
    };
    let token = FungibleLedger::new(
        config,
        accounts.deployer,
        Address::derive_contract(&accounts.deployer, 0),
    );
    (token, accounts)
}
