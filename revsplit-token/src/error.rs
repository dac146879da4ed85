// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! this file defines all possible token error categories

use displaydoc::Display;
use thiserror::Error;

/// Rejection of a token call. A rejected call changes nothing.
#[non_exhaustive]
#[derive(Clone, Copy, Display, Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Invalid recipient
    InvalidRecipient,
    /// Invalid spender
    InvalidSpender,
    /// Insufficient balance
    InsufficientBalance,
    /// Insufficient allowance
    InsufficientAllowance,
}

impl TokenError {
    /// Stable reason surfaced to the caller
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::InvalidRecipient => "Invalid recipient",
            TokenError::InvalidSpender => "Invalid spender",
            TokenError::InsufficientBalance => "Insufficient balance",
            TokenError::InsufficientAllowance => "Insufficient allowance",
        }
    }
}
