// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! this file defines all possible splitter error categories

use displaydoc::Display;
use revsplit_ledger_exports::LedgerError;
use revsplit_models::Address;
use thiserror::Error;

/// Rejection of a splitter call. A rejected call changes nothing.
#[non_exhaustive]
#[derive(Clone, Display, Error, Debug, PartialEq, Eq)]
pub enum SplitterError {
    /// Invalid address
    InvalidAddress,
    /// Percentage must be > 0
    InvalidPercentage,
    /// Recipient already added
    DuplicateRecipient,
    /// Total exceeds 100%
    PercentageOverflow,
    /// payout to {recipient} failed: {reason}
    DistributionFailed {
        /// recipient whose transfer failed
        recipient: Address,
        /// ledger rejection
        reason: LedgerError,
    },
    /// received value could not be credited: {0}
    FundingFailed(LedgerError),
}

impl SplitterError {
    /// Stable reason surfaced to the caller
    pub fn reason(&self) -> &'static str {
        match self {
            SplitterError::InvalidAddress => "Invalid address",
            SplitterError::InvalidPercentage => "Percentage must be > 0",
            SplitterError::DuplicateRecipient => "Recipient already added",
            SplitterError::PercentageOverflow => "Total exceeds 100%",
            SplitterError::DistributionFailed { .. } => "Distribution failed",
            SplitterError::FundingFailed(_) => "Funding failed",
        }
    }
}
