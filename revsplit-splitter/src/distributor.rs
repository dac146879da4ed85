// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::config::RemainderPolicy;
use crate::error::SplitterError;
use crate::registry::RecipientRegistry;
use crate::speculative_ledger::SpeculativeLedger;
use revsplit_models::config::MAX_PERCENTAGE;
use revsplit_models::{Address, Amount};
use serde::Serialize;

/// Amount paid to one recipient by a distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Payout {
    /// paid recipient
    pub recipient: Address,
    /// paid amount
    pub amount: Amount,
}

/// Splits a balance between the recipients of a registry
#[derive(Debug, Clone, Copy, Default)]
pub struct RevenueDistributor {
    remainder: RemainderPolicy,
}

impl RevenueDistributor {
    /// Creates a distributor applying `remainder` to the truncation dust
    pub fn new(remainder: RemainderPolicy) -> Self {
        RevenueDistributor { remainder }
    }

    /// Computes the payouts of `balance`, in registration order.
    /// Empty when the balance or the total percentage is zero. Zero payouts are left out.
    pub fn plan(&self, registry: &RecipientRegistry, balance: Amount) -> Vec<Payout> {
        if registry.total_percentage() == 0 || balance.is_zero() {
            return Vec::new();
        }
        // percentages are at most MAX_PERCENTAGE, so mul_div_floor cannot overflow
        let mut payouts: Vec<Payout> = registry
            .iter()
            .map(|(recipient, percentage)| Payout {
                recipient,
                amount: balance
                    .mul_div_floor(percentage, MAX_PERCENTAGE)
                    .unwrap_or_default(),
            })
            .collect();
        if self.remainder == RemainderPolicy::FirstRecipient {
            let allocated = balance
                .mul_div_floor(registry.total_percentage(), MAX_PERCENTAGE)
                .unwrap_or_default();
            let paid = payouts
                .iter()
                .fold(Amount::zero(), |acc, payout| acc.saturating_add(payout.amount));
            let dust = allocated.saturating_sub(paid);
            if let Some(first) = payouts.first_mut() {
                first.amount = first.amount.saturating_add(dust);
            }
        }
        payouts.retain(|payout| !payout.amount.is_zero());
        payouts
    }

    /// Stages on `ledger` the payment of the balance held at `splitter` to
    /// the recipients. On error the staged transfers must be dropped.
    pub fn distribute(
        &self,
        registry: &RecipientRegistry,
        splitter: Address,
        ledger: &mut SpeculativeLedger<'_>,
    ) -> Result<Vec<Payout>, SplitterError> {
        let balance = ledger.get_balance(&splitter).unwrap_or_default();
        let payouts = self.plan(registry, balance);
        for payout in &payouts {
            ledger
                .transfer_coins(Some(splitter), Some(payout.recipient), payout.amount)
                .map_err(|reason| SplitterError::DistributionFailed {
                    recipient: payout.recipient,
                    reason,
                })?;
        }
        Ok(payouts)
    }
}
