
use crate::{RevenueSplitter, SplitterConfig};
use revsplit_models::{Address, Amount};
use revsplit_test_framework::{init_tracing, TestAccounts};

pub(crate) fn tokens(n: u128) -> Amount {
    Amount::from_tokens(n).unwrap()
}

pub(crate) fn deploy(config: SplitterConfig) -> (RevenueSplitter, TestAccounts) {
    init_tracing();
    let accounts = TestAccounts::new();
    let splitter = RevenueSplitter::new(
        config,
        accounts.deployer,
        Address::derive_contract(&accounts.deployer, 1),
    );
    (splitter, accounts)
}
