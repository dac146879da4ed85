// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines a configuration structure containing all settings for the native ledger

use serde::Deserialize;
use std::path::PathBuf;

/// Ledger configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerConfig {
    /// optional JSON file mapping addresses to their initial ledger entry
    pub initial_ledger_path: Option<PathBuf>,
}
