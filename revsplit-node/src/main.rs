// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Deploys a token and a revenue splitter on an in-memory native ledger
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

use crate::deploy::{deploy, dump_events};
use crate::settings::{build_settings, BASE_CONFIG_PATH, OVERRIDE_CONFIG_PATH};
use anyhow::{Context, Result};
use clap::Parser;
use revsplit_models::Amount;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

mod deploy;
mod settings;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Base configuration file
    #[arg(long, default_value = BASE_CONFIG_PATH)]
    config: PathBuf,
    /// Configuration file overriding the base one, if it exists
    #[arg(long, default_value = OVERRIDE_CONFIG_PATH)]
    override_config: PathBuf,
    /// Write the emitted events to this file
    #[arg(long)]
    events_dump: Option<PathBuf>,
    /// Native value the deployer sends to the splitter once deployed
    #[arg(long)]
    fund: Option<Amount>,
}

fn level_filter(level: usize) -> LevelFilter {
    match level {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = build_settings(&args.config, &args.override_config)
        .with_context(|| format!("loading settings from {}", args.config.display()))?;
    tracing_subscriber::fmt()
        .with_max_level(level_filter(settings.logging.level))
        .init();

    let mut deployment = deploy(&settings)?;
    println!("Token deployed to: {}", deployment.token.address());
    println!(
        "RevenueSplitter deployed to: {}",
        deployment.splitter.address()
    );

    if let Some(value) = args.fund {
        let payouts = deployment
            .splitter
            .receive(&settings.deployer, value, &mut deployment.ledger)
            .context("funding the splitter")?;
        for payout in &payouts {
            println!("Released {} to {}", payout.amount, payout.recipient);
        }
    }

    if let Some(path) = &args.events_dump {
        let count = dump_events(&deployment, path)?;
        info!("dumped {} events to {}", count, path.display());
    }
    Ok(())
}
