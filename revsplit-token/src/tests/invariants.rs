use super::{deploy, tokens};
use crate::FungibleLedger;
use revsplit_models::{Address, Amount};
use revsplit_test_framework::TestAccounts;

fn supply_held(token: &FungibleLedger, accounts: &TestAccounts) -> Amount {
    accounts
        .all()
        .iter()
        .fold(Amount::zero(), |acc, addr| {
            acc.checked_add(token.balance_of(addr)).unwrap()
        })
}

#[test]
fn test_conservation_over_mixed_calls() {
    let (mut token, accounts) = deploy();
    let [deployer, user1, user2, user3, exchange] = accounts.all();

    token.transfer(&deployer, &user1, tokens(500)).unwrap();
    token.transfer(&user1, &user2, tokens(200)).unwrap();
    token.approve(&user2, &exchange, tokens(150)).unwrap();
    token.transfer_from(&exchange, &user2, &user3, tokens(120)).unwrap();
    // rejected calls in between
    assert!(token.transfer(&user3, &user1, tokens(121)).is_err());
    assert!(token.transfer_from(&exchange, &user2, &user3, tokens(31)).is_err());
    assert!(token.transfer(&user1, &Address::ZERO, tokens(1)).is_err());
    token.transfer(&user3, &user3, tokens(20)).unwrap();
    token.transfer_from(&exchange, &user2, &exchange, tokens(30)).unwrap();

    assert_eq!(supply_held(&token, &accounts), token.total_supply());
    assert_eq!(token.balance_of(&deployer), tokens(999_500));
    assert_eq!(token.balance_of(&user1), tokens(300));
    assert_eq!(token.balance_of(&user2), tokens(50));
    assert_eq!(token.balance_of(&user3), tokens(120));
    assert_eq!(token.balance_of(&exchange), tokens(30));
    assert_eq!(token.allowance(&user2, &exchange), tokens(0));
}

#[test]
fn test_pairwise_sum_is_invariant_across_transfer() {
    let (mut token, accounts) = deploy();
    let before = token
        .balance_of(&accounts.deployer)
        .checked_add(token.balance_of(&accounts.user1))
        .unwrap();
    token
        .transfer(&accounts.deployer, &accounts.user1, Amount::from_raw(12_345))
        .unwrap();
    let after = token
        .balance_of(&accounts.deployer)
        .checked_add(token.balance_of(&accounts.user1))
        .unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_self_transfer_keeps_balance_and_emits() {
    let (mut token, accounts) = deploy();
    token
        .transfer(&accounts.deployer, &accounts.deployer, tokens(10))
        .unwrap();
    assert_eq!(token.balance_of(&accounts.deployer), tokens(1_000_000));
    assert_eq!(token.events().len(), 2);
}

#[test]
fn test_reads_are_idempotent() {
    let (mut token, accounts) = deploy();
    token
        .approve(&accounts.deployer, &accounts.exchange, tokens(7))
        .unwrap();
    let first = (
        token.balance_of(&accounts.deployer),
        token.allowance(&accounts.deployer, &accounts.exchange),
        token.total_supply(),
        token.events().len(),
    );
    let second = (
        token.balance_of(&accounts.deployer),
        token.allowance(&accounts.deployer, &accounts.exchange),
        token.total_supply(),
        token.events().len(),
    );
    assert_eq!(first, second);
}

#[test]
fn test_event_store_is_bounded() {
    let (mut token, accounts) = deploy();
    for _ in 0..150 {
        token
            .transfer(&accounts.deployer, &accounts.user1, Amount::from_raw(1))
            .unwrap();
    }
    assert_eq!(token.events().len(), 100);
    assert_eq!(token.events().last().unwrap().index, 150);
}
