// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! The fungible token ledger.

use crate::config::TokenConfig;
use crate::error::TokenError;
use revsplit_logging::revsplit_trace;
use revsplit_models::config::{AMOUNT_DECIMALS, AMOUNT_DECIMAL_FACTOR};
use revsplit_models::event::Event;
use revsplit_models::event_store::EventStore;
use revsplit_models::{Address, Amount};
use std::collections::HashMap;
use tracing::debug;

/// Balances and allowances of one deployed token.
#[derive(Debug, Clone)]
pub struct FungibleLedger {
    /// address the token is deployed at
    address: Address,
    name: String,
    symbol: String,
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    /// (owner, spender) -> approved amount
    allowances: HashMap<(Address, Address), Amount>,
    events: EventStore,
    max_events: usize,
}

impl FungibleLedger {
    /// Deploys a token at `address`, minting `config.max_supply` whole tokens to `deployer`.
    pub fn new(config: TokenConfig, deployer: Address, address: Address) -> Self {
        // a u64 count of whole tokens always fits once scaled to raw units
        let total_supply =
            Amount::from_raw(u128::from(config.max_supply) * AMOUNT_DECIMAL_FACTOR);
        let mut balances = HashMap::new();
        balances.insert(deployer, total_supply);
        debug!(
            "token {} ({}) deployed at {} with supply {} minted to {}",
            config.name, config.symbol, address, total_supply, deployer
        );
        let mut ledger = FungibleLedger {
            address,
            name: config.name,
            symbol: config.symbol,
            total_supply,
            balances,
            allowances: HashMap::new(),
            events: EventStore::default(),
            max_events: config.max_events,
        };
        ledger.emit(Event::Transfer {
            from: Address::ZERO,
            to: deployer,
            value: total_supply,
        });
        ledger
    }

    /// Address the token is deployed at
    pub fn address(&self) -> Address {
        self.address
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ticker symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of decimals of every amount
    pub fn decimals(&self) -> u8 {
        AMOUNT_DECIMALS
    }

    /// Fixed total supply
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Balance of `owner`, zero for unknown holders
    pub fn balance_of(&self, owner: &Address) -> Amount {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    /// Amount `spender` may still move on behalf of `owner`
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Events emitted by committed calls
    pub fn events(&self) -> &EventStore {
        &self.events
    }

    /// Moves `amount` from `sender` to `to`.
    pub fn transfer(
        &mut self,
        sender: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        if to.is_zero() {
            return Err(TokenError::InvalidRecipient);
        }
        if self.balance_of(sender) < amount {
            return Err(TokenError::InsufficientBalance);
        }
        self.move_balance(sender, to, amount);
        revsplit_trace!("token.transfer", {
            "token": self.address.to_string(),
            "from": sender.to_string(),
            "to": to.to_string(),
            "value": amount.to_string()
        });
        self.emit(Event::Transfer {
            from: *sender,
            to: *to,
            value: amount,
        });
        Ok(())
    }

    /// Sets the allowance of `spender` over the tokens of `owner` to `amount`.
    /// The previous allowance is overwritten, not increased.
    pub fn approve(
        &mut self,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        if spender.is_zero() {
            return Err(TokenError::InvalidSpender);
        }
        self.allowances.insert((*owner, *spender), amount);
        revsplit_trace!("token.approve", {
            "token": self.address.to_string(),
            "owner": owner.to_string(),
            "spender": spender.to_string(),
            "value": amount.to_string()
        });
        self.emit(Event::Approval {
            owner: *owner,
            spender: *spender,
            value: amount,
        });
        Ok(())
    }

    /// Moves `amount` from `from` to `to` on behalf of `spender`, consuming its allowance.
    pub fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let remaining = self
            .allowance(from, spender)
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientAllowance)?;
        if self.balance_of(from) < amount {
            return Err(TokenError::InsufficientBalance);
        }
        if to.is_zero() {
            return Err(TokenError::InvalidRecipient);
        }
        self.allowances.insert((*from, *spender), remaining);
        self.move_balance(from, to, amount);
        revsplit_trace!("token.transfer_from", {
            "token": self.address.to_string(),
            "spender": spender.to_string(),
            "from": from.to_string(),
            "to": to.to_string(),
            "value": amount.to_string()
        });
        self.emit(Event::Transfer {
            from: *from,
            to: *to,
            value: amount,
        });
        Ok(())
    }

    /// Caller must have checked that `from` holds at least `amount`.
    fn move_balance(&mut self, from: &Address, to: &Address, amount: Amount) {
        if from == to {
            return;
        }
        let from_balance = self.balance_of(from).saturating_sub(amount);
        // balances sum to total_supply, so the credit cannot saturate
        let to_balance = self.balance_of(to).saturating_add(amount);
        self.balances.insert(*from, from_balance);
        self.balances.insert(*to, to_balance);
        debug!(
            "token {}: moved {} from {} to {}",
            self.address, amount, from, to
        );
    }

    fn emit(&mut self, event: Event) {
        self.events.push(self.address, event);
        self.events.prune(self.max_events);
    }
}
