// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::deploy::{deploy, dump_events};
use crate::level_filter;
use crate::settings::{build_settings, Settings, BASE_CONFIG_PATH};
use revsplit_ledger_exports::LedgerController;
use revsplit_models::address::AddressDeserializer;
use revsplit_models::event::{Event, EventDeserializer};
use revsplit_models::{Address, Amount};
use revsplit_serialization::{DeserializeError, Deserializer};
use revsplit_splitter::{DistributionTrigger, RemainderPolicy};
use serial_test::serial;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

const DEPLOYER: &str = "A6Jswqk47s9PUcyCc88MMVwzgvHR4tFVH";
const USER1: &str = "ABcktgV7EjHmxEwQDFFhhztzNqZka8NLV";
const USER2: &str = "AGvdqXEAMbSARrubpNP44Vqz4krBphHiC";

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn minimal_config(dir: &Path) -> PathBuf {
    write_file(
        dir,
        "config.toml",
        &format!(
            "deployer = \"{}\"\n\n[[recipients]]\naddress = \"{}\"\npercentage = 25\n",
            DEPLOYER, USER1
        ),
    )
}

#[test]
#[serial]
fn test_base_config_deploys() {
    let settings = build_settings(Path::new(BASE_CONFIG_PATH), Path::new("missing.toml")).unwrap();
    assert_eq!(settings.deployer, Address::from_str(DEPLOYER).unwrap());
    assert_eq!(settings.token.symbol, "testT");
    assert_eq!(settings.token.max_supply, 1_000_000);
    assert_eq!(settings.splitter.trigger, DistributionTrigger::OnReceipt);
    assert_eq!(settings.splitter.remainder, RemainderPolicy::Retain);

    let deployment = deploy(&settings).unwrap();
    assert_eq!(
        deployment.token.balance_of(&settings.deployer),
        Amount::from_tokens(1_000_000).unwrap()
    );
    assert_eq!(
        deployment.splitter.get_recipients(),
        &[
            Address::from_str(USER1).unwrap(),
            Address::from_str(USER2).unwrap()
        ]
    );
    assert_eq!(deployment.splitter.total_percentage(), 100);
    assert_eq!(
        deployment.ledger.get_balance(&settings.deployer),
        Some(Amount::from_str("1000").unwrap())
    );
    assert_ne!(deployment.token.address(), deployment.splitter.address());
}

#[test]
#[serial]
fn test_defaults_and_override() {
    let dir = tempfile::tempdir().unwrap();
    let config = minimal_config(dir.path());
    let missing = dir.path().join("override.toml");

    let settings = build_settings(&config, &missing).unwrap();
    assert_eq!(settings.logging.level, 2);
    assert_eq!(settings.token.name, "testToken");
    assert_eq!(settings.recipients.len(), 1);
    assert!(settings.ledger.initial_ledger_path.is_none());

    let override_path = write_file(
        dir.path(),
        "override.toml",
        "[token]\nsymbol = \"OVR\"\n\n[splitter]\ntrigger = \"explicit\"\n",
    );
    let settings = build_settings(&config, &override_path).unwrap();
    assert_eq!(settings.token.symbol, "OVR");
    assert_eq!(settings.token.name, "testToken");
    assert_eq!(settings.splitter.trigger, DistributionTrigger::Explicit);
}

#[test]
#[serial]
fn test_token_table_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "config.toml",
        &format!(
            "deployer = \"{}\"\n\n[token]\nname = \"five\"\nmax_supply = 5\nmax_events = 3\n",
            DEPLOYER
        ),
    );
    let settings = build_settings(&config, &dir.path().join("none.toml")).unwrap();
    assert_eq!(settings.token.max_supply, 5);
    assert_eq!(settings.token.max_events, 3);
    assert_eq!(settings.token.symbol, "testT");

    let deployment = deploy(&settings).unwrap();
    assert_eq!(deployment.token.name(), "five");
    assert_eq!(
        deployment.token.total_supply(),
        Amount::from_str("5").unwrap()
    );
    assert_eq!(
        deployment.token.balance_of(&settings.deployer),
        Amount::from_str("5").unwrap()
    );
}

#[test]
#[serial]
fn test_environment_overrides_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = minimal_config(dir.path());
    std::env::set_var("REVSPLIT_TOKEN__SYMBOL", "ENV");
    std::env::set_var("REVSPLIT_LOGGING__LEVEL", "4");
    let settings = build_settings(&config, &dir.path().join("none.toml"));
    std::env::remove_var("REVSPLIT_TOKEN__SYMBOL");
    std::env::remove_var("REVSPLIT_LOGGING__LEVEL");
    let settings = settings.unwrap();
    assert_eq!(settings.token.symbol, "ENV");
    assert_eq!(settings.logging.level, 4);
}

#[test]
#[serial]
fn test_missing_deployer_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(dir.path(), "config.toml", "[token]\nname = \"x\"\n");
    assert!(build_settings(&config, &dir.path().join("none.toml")).is_err());
}

#[test]
#[serial]
fn test_invalid_recipients_abort_deployment() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "config.toml",
        &format!(
            "deployer = \"{d}\"\n\n[[recipients]]\naddress = \"{u1}\"\npercentage = 70\n\n[[recipients]]\naddress = \"{u2}\"\npercentage = 40\n",
            d = DEPLOYER,
            u1 = USER1,
            u2 = USER2
        ),
    );
    let settings: Settings = build_settings(&config, &dir.path().join("none.toml")).unwrap();
    let err = deploy(&settings).err().unwrap();
    assert!(format!("{:#}", err).contains("Total exceeds 100%"));
}

#[test]
#[serial]
fn test_missing_initial_ledger_aborts_deployment() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "config.toml",
        &format!(
            "deployer = \"{}\"\n\n[ledger]\ninitial_ledger_path = \"{}\"\n",
            DEPLOYER,
            dir.path().join("absent.json").display()
        ),
    );
    let settings = build_settings(&config, &dir.path().join("none.toml")).unwrap();
    assert!(deploy(&settings).is_err());
}

#[test]
#[serial]
fn test_fund_and_dump_events() {
    let settings = build_settings(Path::new(BASE_CONFIG_PATH), Path::new("missing.toml")).unwrap();
    let mut deployment = deploy(&settings).unwrap();
    let payouts = deployment
        .splitter
        .receive(
            &settings.deployer,
            Amount::from_str("10").unwrap(),
            &mut deployment.ledger,
        )
        .unwrap();
    assert_eq!(payouts.len(), 2);
    assert_eq!(
        deployment
            .ledger
            .get_balance(&Address::from_str(USER1).unwrap()),
        Some(Amount::from_str("6").unwrap())
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.bin");
    // mint, 2 recipients, 1 receipt, 2 releases
    assert_eq!(dump_events(&deployment, &path).unwrap(), 6);

    let bytes = std::fs::read(&path).unwrap();
    let address_deserializer = AddressDeserializer::new();
    let event_deserializer = EventDeserializer::new();
    let mut rest = bytes.as_slice();
    let mut decoded = Vec::new();
    while !rest.is_empty() {
        let (next, emitter) = address_deserializer
            .deserialize::<DeserializeError>(rest)
            .unwrap();
        let (next, event) = event_deserializer
            .deserialize::<DeserializeError>(next)
            .unwrap();
        decoded.push((emitter, event));
        rest = next;
    }
    assert_eq!(decoded.len(), 6);
    assert_eq!(decoded[0].0, deployment.token.address());
    assert_eq!(decoded[0].1.name(), "Transfer");
    assert_eq!(decoded[5].0, deployment.splitter.address());
    assert_eq!(
        decoded[5].1,
        Event::PaymentReleased {
            to: Address::from_str(USER2).unwrap(),
            amount: Amount::from_str("4").unwrap(),
        }
    );
}

#[test]
fn test_level_filter() {
    assert_eq!(level_filter(0), LevelFilter::ERROR);
    assert_eq!(level_filter(2), LevelFilter::INFO);
    assert_eq!(level_filter(9), LevelFilter::TRACE);
}
