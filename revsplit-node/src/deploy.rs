// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::settings::Settings;
use anyhow::{Context, Result};
use revsplit_ledger_worker::FinalLedger;
use revsplit_models::address::AddressSerializer;
use revsplit_models::event::EventSerializer;
use revsplit_models::event_store::EmittedEvent;
use revsplit_models::Address;
use revsplit_serialization::Serializer;
use revsplit_splitter::RevenueSplitter;
use revsplit_token::FungibleLedger;
use std::path::Path;
use tracing::info;

/// Nonce of the token in the deployer's contract addresses
const TOKEN_NONCE: u64 = 0;
/// Nonce of the splitter in the deployer's contract addresses
const SPLITTER_NONCE: u64 = 1;

/// Everything a deployment run produced
pub struct Deployment {
    pub ledger: FinalLedger,
    pub token: FungibleLedger,
    pub splitter: RevenueSplitter,
}

/// Loads the native ledger, deploys the token, then the splitter with its recipients
pub fn deploy(settings: &Settings) -> Result<Deployment> {
    let mut ledger = FinalLedger::new(settings.ledger.clone());
    ledger
        .load_initial_ledger()
        .context("loading the initial native ledger")?;
    info!(
        "native ledger loaded, total balance {}",
        ledger.total_balance()
    );

    let token = FungibleLedger::new(
        settings.token.clone(),
        settings.deployer,
        Address::derive_contract(&settings.deployer, TOKEN_NONCE),
    );
    info!(
        "token {} deployed at {}",
        token.symbol(),
        token.address()
    );

    let mut splitter = RevenueSplitter::new(
        settings.splitter.clone(),
        settings.deployer,
        Address::derive_contract(&settings.deployer, SPLITTER_NONCE),
    );
    for recipient in &settings.recipients {
        splitter
            .add_recipient(&settings.deployer, recipient.address, recipient.percentage)
            .with_context(|| format!("registering recipient {}", recipient.address))?;
    }
    info!(
        "revenue splitter deployed at {} with {} recipients ({}%)",
        splitter.address(),
        splitter.get_recipients().len(),
        splitter.total_percentage()
    );

    Ok(Deployment {
        ledger,
        token,
        splitter,
    })
}

/// Serializes the emitted events, token first, as a sequence of
/// (emitter address, event). Returns the number of dumped events.
pub fn dump_events(deployment: &Deployment, path: &Path) -> Result<usize> {
    let address_serializer = AddressSerializer::new();
    let event_serializer = EventSerializer::new();
    let events: Vec<&EmittedEvent> = deployment
        .token
        .events()
        .iter()
        .chain(deployment.splitter.events().iter())
        .collect();
    let mut buffer = Vec::new();
    for emitted in &events {
        address_serializer.serialize(&emitted.emitter, &mut buffer)?;
        event_serializer.serialize(&emitted.event, &mut buffer)?;
    }
    std::fs::write(path, buffer)
        .with_context(|| format!("writing events to {}", path.display()))?;
    Ok(events.len())
}
