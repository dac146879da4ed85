// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use thiserror::Error;

/// Errors of the native ledger
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// file error: {0}
    FileError(String),
    /// spending address {0} not found
    MissingEntry(String),
    /// insufficient balance: {0}
    InsufficientBalance(String),
    /// address {0} does not accept coins
    NotPayable(String),
    /// balance overflow: {0}
    BalanceOverflow(String),
}
