// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Notifications emitted by the ledgers when a call commits.

use crate::address::{Address, AddressDeserializer, AddressSerializer};
use crate::amount::{Amount, AmountDeserializer, AmountSerializer};
use crate::config::MAX_PERCENTAGE;
use nom::error::{context, ContextError, ErrorKind, ParseError};
use nom::sequence::tuple;
use nom::{IResult, Parser};
use revsplit_serialization::{
    Deserializer, SerializeError, Serializer, U64VarIntDeserializer, U64VarIntSerializer,
};
use serde::{Deserialize, Serialize};
use std::ops::Bound::Included;

/// An event emitted by a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum Event {
    /// a payee was registered with its share of the revenue
    RecipientAdded {
        /// registered payee
        recipient: Address,
        /// share of the revenue, in percent
        percentage: u64,
    },
    /// tokens moved between two holders
    Transfer {
        /// debited holder, `Address::ZERO` for the initial mint
        from: Address,
        /// credited holder
        to: Address,
        /// moved amount
        value: Amount,
    },
    /// an owner set the allowance of a spender
    Approval {
        /// token owner
        owner: Address,
        /// delegated spender
        spender: Address,
        /// new allowance
        value: Amount,
    },
    /// native value was received by a splitter
    PaymentReceived {
        /// paying account
        from: Address,
        /// received value
        amount: Amount,
    },
    /// native value was paid out by a splitter
    PaymentReleased {
        /// paid recipient
        to: Address,
        /// paid value
        amount: Amount,
    },
}

impl Event {
    /// Name of the event, as watchers filter on it
    pub fn name(&self) -> &'static str {
        match self {
            Event::RecipientAdded { .. } => "RecipientAdded",
            Event::Transfer { .. } => "Transfer",
            Event::Approval { .. } => "Approval",
            Event::PaymentReceived { .. } => "PaymentReceived",
            Event::PaymentReleased { .. } => "PaymentReleased",
        }
    }

    fn tag(&self) -> u64 {
        match self {
            Event::RecipientAdded { .. } => 0,
            Event::Transfer { .. } => 1,
            Event::Approval { .. } => 2,
            Event::PaymentReceived { .. } => 3,
            Event::PaymentReleased { .. } => 4,
        }
    }
}

/// Serializer for `Event`
#[derive(Clone, Default)]
pub struct EventSerializer {
    u64_serializer: U64VarIntSerializer,
    address_serializer: AddressSerializer,
    amount_serializer: AmountSerializer,
}

impl EventSerializer {
    /// Creates an `EventSerializer`
    pub const fn new() -> Self {
        Self {
            u64_serializer: U64VarIntSerializer::new(),
            address_serializer: AddressSerializer::new(),
            amount_serializer: AmountSerializer::new(),
        }
    }
}

impl Serializer<Event> for EventSerializer {
    fn serialize(&self, value: &Event, buffer: &mut Vec<u8>) -> Result<(), SerializeError> {
        self.u64_serializer.serialize(&value.tag(), buffer)?;
        match value {
            Event::RecipientAdded {
                recipient,
                percentage,
            } => {
                self.address_serializer.serialize(recipient, buffer)?;
                self.u64_serializer.serialize(percentage, buffer)?;
            }
            Event::Transfer { from, to, value } => {
                self.address_serializer.serialize(from, buffer)?;
                self.address_serializer.serialize(to, buffer)?;
                self.amount_serializer.serialize(value, buffer)?;
            }
            Event::Approval {
                owner,
                spender,
                value,
            } => {
                self.address_serializer.serialize(owner, buffer)?;
                self.address_serializer.serialize(spender, buffer)?;
                self.amount_serializer.serialize(value, buffer)?;
            }
            Event::PaymentReceived { from: address, amount }
            | Event::PaymentReleased { to: address, amount } => {
                self.address_serializer.serialize(address, buffer)?;
                self.amount_serializer.serialize(amount, buffer)?;
            }
        }
        Ok(())
    }
}

/// Deserializer for `Event`
#[derive(Clone)]
pub struct EventDeserializer {
    tag_deserializer: U64VarIntDeserializer,
    percentage_deserializer: U64VarIntDeserializer,
    address_deserializer: AddressDeserializer,
    amount_deserializer: AmountDeserializer,
}

impl EventDeserializer {
    /// Creates an `EventDeserializer`
    pub fn new() -> Self {
        Self {
            tag_deserializer: U64VarIntDeserializer::new(Included(0), Included(4)),
            percentage_deserializer: U64VarIntDeserializer::new(
                Included(1),
                Included(MAX_PERCENTAGE),
            ),
            address_deserializer: AddressDeserializer::new(),
            amount_deserializer: AmountDeserializer::new(
                Included(Amount::MIN),
                Included(Amount::MAX),
            ),
        }
    }
}

impl Default for EventDeserializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializer<Event> for EventDeserializer {
    /// ```
    /// use revsplit_models::{Address, Amount};
    /// use revsplit_models::event::{Event, EventSerializer, EventDeserializer};
    /// use revsplit_serialization::{Serializer, Deserializer, DeserializeError};
    ///
    /// let event = Event::Approval {
    ///     owner: Address::from_bytes([1; 20]),
    ///     spender: Address::from_bytes([2; 20]),
    ///     value: Amount::from_tokens(100).unwrap(),
    /// };
    /// let mut buffer = Vec::new();
    /// EventSerializer::new().serialize(&event, &mut buffer).unwrap();
    /// let (rest, decoded) = EventDeserializer::new().deserialize::<DeserializeError>(&buffer).unwrap();
    /// assert!(rest.is_empty());
    /// assert_eq!(decoded, event);
    /// ```
    fn deserialize<'a, E: ParseError<&'a [u8]> + ContextError<&'a [u8]>>(
        &self,
        buffer: &'a [u8],
    ) -> IResult<&'a [u8], Event, E> {
        let (rest, tag) = context("Failed event tag deserialization", |input| {
            self.tag_deserializer.deserialize::<E>(input)
        })(buffer)?;
        let address = |input: &'a [u8]| self.address_deserializer.deserialize::<E>(input);
        let amount = |input: &'a [u8]| self.amount_deserializer.deserialize::<E>(input);
        let percentage = |input: &'a [u8]| self.percentage_deserializer.deserialize::<E>(input);
        match tag {
            0 => context(
                "Failed RecipientAdded deserialization",
                tuple((address, percentage)),
            )
            .map(|(recipient, percentage)| Event::RecipientAdded {
                recipient,
                percentage,
            })
            .parse(rest),
            1 => context(
                "Failed Transfer deserialization",
                tuple((address, address, amount)),
            )
            .map(|(from, to, value)| Event::Transfer { from, to, value })
            .parse(rest),
            2 => context(
                "Failed Approval deserialization",
                tuple((address, address, amount)),
            )
            .map(|(owner, spender, value)| Event::Approval {
                owner,
                spender,
                value,
            })
            .parse(rest),
            3 => context(
                "Failed PaymentReceived deserialization",
                tuple((address, amount)),
            )
            .map(|(from, amount)| Event::PaymentReceived { from, amount })
            .parse(rest),
            4 => context(
                "Failed PaymentReleased deserialization",
                tuple((address, amount)),
            )
            .map(|(to, amount)| Event::PaymentReleased { to, amount })
            .parse(rest),
            _ => Err(nom::Err::Error(E::from_error_kind(buffer, ErrorKind::Switch))),
        }
    }
}
