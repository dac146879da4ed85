// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::error::SplitterError;
use revsplit_models::config::MAX_PERCENTAGE;
use revsplit_models::Address;
use std::collections::HashMap;

/// Payees of a splitter with their percentage shares
#[derive(Debug, Clone, Default)]
pub struct RecipientRegistry {
    /// address -> percentage
    recipients: HashMap<Address, u64>,
    /// addresses in registration order
    recipient_list: Vec<Address>,
    /// sum of all percentages, at most `MAX_PERCENTAGE`
    total_percentage: u64,
}

impl RecipientRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `recipient` with a share of `percentage` percent.
    ///
    /// Checks, in order: non-zero address, non-zero percentage, unknown
    /// recipient, total staying within 100.
    pub fn add_recipient(
        &mut self,
        recipient: Address,
        percentage: u64,
    ) -> Result<(), SplitterError> {
        if recipient.is_zero() {
            return Err(SplitterError::InvalidAddress);
        }
        if percentage == 0 {
            return Err(SplitterError::InvalidPercentage);
        }
        if self.recipients.contains_key(&recipient) {
            return Err(SplitterError::DuplicateRecipient);
        }
        let new_total = self
            .total_percentage
            .checked_add(percentage)
            .filter(|total| *total <= MAX_PERCENTAGE)
            .ok_or(SplitterError::PercentageOverflow)?;
        self.recipients.insert(recipient, percentage);
        self.recipient_list.push(recipient);
        self.total_percentage = new_total;
        Ok(())
    }

    /// Recipients in registration order
    pub fn get_recipients(&self) -> &[Address] {
        &self.recipient_list
    }

    /// Sum of all registered percentages
    pub fn total_percentage(&self) -> u64 {
        self.total_percentage
    }

    /// Percentage of `recipient`, 0 if it was never added
    pub fn recipients(&self, recipient: &Address) -> u64 {
        self.recipients.get(recipient).copied().unwrap_or_default()
    }

    /// Recipients with their percentages, in registration order
    pub fn iter(&self) -> impl Iterator<Item = (Address, u64)> + '_ {
        self.recipient_list
            .iter()
            .map(|addr| (*addr, self.recipients(addr)))
    }

    /// true if nobody is registered
    pub fn is_empty(&self) -> bool {
        self.recipient_list.is_empty()
    }
}
