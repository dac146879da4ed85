// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Deployment settings.
//!
//! Settings are read from the base configuration file, then merged with the
//! override file if it exists, then with the environment variables prefixed
//! with `REVSPLIT_` (`REVSPLIT_TOKEN__SYMBOL=XYZ` sets `token.symbol`).

use config::{Config, ConfigError, Environment, File};
use revsplit_ledger_exports::LedgerConfig;
use revsplit_models::Address;
use revsplit_splitter::SplitterConfig;
use revsplit_token::TokenConfig;
use serde::Deserialize;
use std::path::Path;

pub const BASE_CONFIG_PATH: &str = "base_config/config.toml";
pub const OVERRIDE_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct LoggingSettings {
    pub level: usize,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings { level: 2 }
    }
}

/// A payee registered right after the splitter is deployed
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct RecipientSettings {
    pub address: Address,
    pub percentage: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingSettings,
    pub deployer: Address,
    #[serde(default)]
    pub token: TokenConfig,
    #[serde(default)]
    pub splitter: SplitterConfig,
    #[serde(default)]
    pub recipients: Vec<RecipientSettings>,
    #[serde(default)]
    pub ledger: LedgerConfig,
}

pub fn build_settings(
    config_path: &Path,
    override_path: &Path,
) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder().add_source(File::from(config_path));
    if override_path.is_file() {
        builder = builder.add_source(File::from(override_path));
    }
    builder
        .add_source(
            Environment::with_prefix("REVSPLIT")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
