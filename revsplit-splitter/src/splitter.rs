// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! The revenue splitter facade.

use crate::config::{DistributionTrigger, SplitterConfig};
use crate::distributor::{Payout, RevenueDistributor};
use crate::error::SplitterError;
use crate::registry::RecipientRegistry;
use crate::speculative_ledger::SpeculativeLedger;
use revsplit_ledger_exports::LedgerController;
use revsplit_logging::revsplit_trace;
use revsplit_models::event::Event;
use revsplit_models::event_store::EventStore;
use revsplit_models::{Address, Amount};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A deployed revenue splitter
#[derive(Debug, Clone)]
pub struct RevenueSplitter {
    /// address holding the funds to split
    address: Address,
    config: SplitterConfig,
    registry: RecipientRegistry,
    distributor: RevenueDistributor,
    /// recipient -> total amount paid out to it
    released: HashMap<Address, Amount>,
    total_released: Amount,
    events: EventStore,
}

impl RevenueSplitter {
    /// Deploys a splitter without recipients at `address`
    pub fn new(config: SplitterConfig, deployer: Address, address: Address) -> Self {
        debug!(
            "revenue splitter deployed at {} by {} ({:?} distribution, {:?} remainder)",
            address, deployer, config.trigger, config.remainder
        );
        RevenueSplitter {
            address,
            distributor: RevenueDistributor::new(config.remainder),
            config,
            registry: RecipientRegistry::new(),
            released: HashMap::new(),
            total_released: Amount::zero(),
            events: EventStore::default(),
        }
    }

    /// Address holding the funds to split
    pub fn address(&self) -> Address {
        self.address
    }

    /// Recipients in registration order
    pub fn get_recipients(&self) -> &[Address] {
        self.registry.get_recipients()
    }

    /// Sum of all registered percentages
    pub fn total_percentage(&self) -> u64 {
        self.registry.total_percentage()
    }

    /// Percentage of `recipient`, 0 if it was never added
    pub fn recipients(&self, recipient: &Address) -> u64 {
        self.registry.recipients(recipient)
    }

    /// Total amount paid out to `recipient`
    pub fn released(&self, recipient: &Address) -> Amount {
        self.released.get(recipient).copied().unwrap_or_default()
    }

    /// Total amount paid out to all recipients
    pub fn total_released(&self) -> Amount {
        self.total_released
    }

    /// Native balance currently held by the splitter
    pub fn balance(&self, ledger: &dyn LedgerController) -> Amount {
        ledger.get_balance(&self.address).unwrap_or_default()
    }

    /// Events emitted by committed calls
    pub fn events(&self) -> &EventStore {
        &self.events
    }

    /// Registers a payee. Any caller may register.
    pub fn add_recipient(
        &mut self,
        sender: &Address,
        recipient: Address,
        percentage: u64,
    ) -> Result<(), SplitterError> {
        self.registry.add_recipient(recipient, percentage)?;
        revsplit_trace!("splitter.add_recipient", {
            "splitter": self.address.to_string(),
            "sender": sender.to_string(),
            "recipient": recipient.to_string(),
            "percentage": percentage
        });
        debug!(
            "splitter {}: recipient {} added with {}%, total {}%",
            self.address,
            recipient,
            percentage,
            self.registry.total_percentage()
        );
        self.emit(vec![Event::RecipientAdded {
            recipient,
            percentage,
        }]);
        Ok(())
    }

    /// Receives `value` attached by `sender` to a call.
    ///
    /// With `DistributionTrigger::OnReceipt`, the held balance is distributed in
    /// the same call and a failed payout reverts the receipt too.
    pub fn receive(
        &mut self,
        sender: &Address,
        value: Amount,
        ledger: &mut dyn LedgerController,
    ) -> Result<Vec<Payout>, SplitterError> {
        let mut speculative = SpeculativeLedger::new(&*ledger);
        let mut events = Vec::new();
        if !value.is_zero() {
            speculative
                .transfer_coins(Some(*sender), Some(self.address), value)
                .map_err(SplitterError::FundingFailed)?;
            events.push(Event::PaymentReceived {
                from: *sender,
                amount: value,
            });
        }
        let payouts = match self.config.trigger {
            DistributionTrigger::OnReceipt => self.stage_distribution(&mut speculative)?,
            DistributionTrigger::Explicit => Vec::new(),
        };
        let changes = speculative.take();
        ledger.apply_changes(changes);

        revsplit_trace!("splitter.receive", {
            "splitter": self.address.to_string(),
            "sender": sender.to_string(),
            "value": value.to_string(),
            "payouts": payouts.len()
        });
        self.commit_payouts(&payouts, events);
        Ok(payouts)
    }

    /// Pays every recipient its share of the held balance.
    /// Nothing is paid if a single payout fails.
    pub fn distribute(
        &mut self,
        sender: &Address,
        ledger: &mut dyn LedgerController,
    ) -> Result<Vec<Payout>, SplitterError> {
        let mut speculative = SpeculativeLedger::new(&*ledger);
        let payouts = self.stage_distribution(&mut speculative)?;
        let changes = speculative.take();
        ledger.apply_changes(changes);

        revsplit_trace!("splitter.distribute", {
            "splitter": self.address.to_string(),
            "sender": sender.to_string(),
            "payouts": payouts.len()
        });
        self.commit_payouts(&payouts, Vec::new());
        Ok(payouts)
    }

    fn stage_distribution(
        &self,
        speculative: &mut SpeculativeLedger<'_>,
    ) -> Result<Vec<Payout>, SplitterError> {
        self.distributor
            .distribute(&self.registry, self.address, speculative)
            .map_err(|err| {
                warn!("splitter {}: distribution aborted: {}", self.address, err);
                err
            })
    }

    /// Records the payouts of a committed call and emits its events
    fn commit_payouts(&mut self, payouts: &[Payout], mut events: Vec<Event>) {
        for payout in payouts {
            let released = self.released.entry(payout.recipient).or_default();
            *released = released.saturating_add(payout.amount);
            self.total_released = self.total_released.saturating_add(payout.amount);
            debug!(
                "splitter {}: released {} to {}",
                self.address, payout.amount, payout.recipient
            );
            events.push(Event::PaymentReleased {
                to: payout.recipient,
                amount: payout.amount,
            });
        }
        self.emit(events);
    }

    fn emit(&mut self, events: Vec<Event>) {
        self.events.extend(self.address, events);
        self.events.prune(self.config.max_events);
    }
}
