use crate::FinalLedger;
use revsplit_ledger_exports::{
    LedgerChanges, LedgerConfig, LedgerController, LedgerEntry, LedgerError,
};
use revsplit_models::{Address, Amount};
use std::io::Write;
use tempfile::NamedTempFile;

fn addr(byte: u8) -> Address {
    Address::from_bytes([byte; 20])
}

#[test]
fn test_load_initial_ledger() {
    let funded = addr(1);
    let contract = addr(2);
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"{}": {{"balance": "10"}}, "{}": {{"balance": "0", "payable": false}}}}"#,
        funded, contract
    )
    .unwrap();

    let mut ledger = FinalLedger::new(LedgerConfig {
        initial_ledger_path: Some(file.path().to_path_buf()),
    });
    ledger.load_initial_ledger().unwrap();

    assert_eq!(
        ledger.get_balance(&funded),
        Some(Amount::from_tokens(10).unwrap())
    );
    assert!(ledger.is_payable(&funded));
    assert!(!ledger.is_payable(&contract));
    assert!(ledger.is_payable(&addr(3)));
    assert!(!ledger.entry_exists(&addr(3)));
    assert_eq!(ledger.total_balance(), Amount::from_tokens(10).unwrap());
}

#[test]
fn test_load_initial_ledger_errors() {
    let mut missing = FinalLedger::new(LedgerConfig {
        initial_ledger_path: Some("does/not/exist.json".into()),
    });
    assert!(matches!(
        missing.load_initial_ledger(),
        Err(LedgerError::FileError(_))
    ));

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let mut invalid = FinalLedger::new(LedgerConfig {
        initial_ledger_path: Some(file.path().to_path_buf()),
    });
    assert!(matches!(
        invalid.load_initial_ledger(),
        Err(LedgerError::FileError(_))
    ));

    let mut no_file = FinalLedger::new(LedgerConfig::default());
    assert!(no_file.load_initial_ledger().is_ok());
    assert_eq!(no_file.total_balance(), Amount::zero());
}

#[test]
fn test_apply_changes_creates_entries_and_keeps_payable_flag() {
    let mut ledger = FinalLedger::default();
    ledger.set_entry(
        addr(1),
        LedgerEntry {
            balance: Amount::from_raw(10),
            payable: false,
        },
    );
    let mut changes = LedgerChanges::default();
    changes.set_balance(addr(1), Amount::from_raw(4));
    changes.set_balance(addr(2), Amount::from_raw(6));
    ledger.apply_changes(changes);

    let first = ledger.get_entry(&addr(1)).unwrap();
    assert_eq!(first.balance, Amount::from_raw(4));
    assert!(!first.payable);
    assert_eq!(ledger.get_balance(&addr(2)), Some(Amount::from_raw(6)));
    assert_eq!(ledger.total_balance(), Amount::from_raw(10));
}
