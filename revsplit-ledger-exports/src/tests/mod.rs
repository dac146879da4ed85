use crate::{Applicable, LedgerChanges, LedgerEntry};
use revsplit_models::{Address, Amount};

#[test]
fn test_changes_override_fallback() {
    let addr = Address::from_bytes([1; 20]);
    let other = Address::from_bytes([2; 20]);
    let mut changes = LedgerChanges::default();
    assert!(changes.is_empty());
    changes.set_balance(addr, Amount::from_raw(5));
    assert_eq!(
        changes.get_balance_or_else(&addr, || Some(Amount::from_raw(1))),
        Some(Amount::from_raw(5))
    );
    assert_eq!(
        changes.get_balance_or_else(&other, || Some(Amount::from_raw(1))),
        Some(Amount::from_raw(1))
    );
}

#[test]
fn test_apply_changes_keeps_latest_balance() {
    let addr = Address::from_bytes([1; 20]);
    let other = Address::from_bytes([2; 20]);
    let mut changes = LedgerChanges::default();
    changes.set_balance(addr, Amount::from_raw(5));
    let mut newer = LedgerChanges::default();
    newer.set_balance(addr, Amount::from_raw(3));
    newer.set_balance(other, Amount::from_raw(2));
    changes.apply(newer);
    assert_eq!(changes.0.get(&addr), Some(&Amount::from_raw(3)));
    assert_eq!(changes.0.get(&other), Some(&Amount::from_raw(2)));
}

#[test]
fn test_ledger_entry_defaults_to_payable() {
    let entry: LedgerEntry = serde_json::from_str(r#"{"balance": "1.5"}"#).unwrap();
    assert!(entry.payable);
    assert_eq!(entry.balance, "1.5".parse::<Amount>().unwrap());
    let entry: LedgerEntry =
        serde_json::from_str(r#"{"balance": "0", "payable": false}"#).unwrap();
    assert!(!entry.payable);
}
