// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! this file defines all possible models error categories

use displaydoc::Display;
use thiserror::Error;

/// Errors of the models crate
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelsError {
    /// amount parse error: {0}
    AmountParseError(String),
    /// address parse error: {0}
    AddressParseError(String),
}
