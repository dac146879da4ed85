// Copyright (c) 2022 MASSA LABS <info@massa.net>

use serde::Deserialize;

/// Deployment parameters of a token
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// display name
    pub name: String,
    /// ticker symbol
    pub symbol: String,
    /// supply in whole tokens, minted to the deployer
    pub max_supply: u64,
    /// number of events kept in the token's event store
    pub max_events: usize,
}

impl Default for TokenConfig {
    fn default() -> Self {
        TokenConfig {
            name: "testToken".to_string(),
            symbol: "testT".to_string(),
            max_supply: 1_000_000,
            max_events: 10_000,
        }
    }
}
