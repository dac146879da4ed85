// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This module represents an event store allowing to store, search and retrieve
//! a config-limited number of ledger-generated events

use crate::address::Address;
use crate::event::Event;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// An event together with the ledger that emitted it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmittedEvent {
    /// position of the event in the emitter's history, starting at 0
    pub index: u64,
    /// address of the emitting ledger
    pub emitter: Address,
    /// the event itself
    pub event: Event,
}

/// Criteria used to select events from an `EventStore`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    /// keep only events of this emitter
    pub emitter: Option<Address>,
    /// keep only events with this name (see `Event::name`)
    pub name: Option<String>,
}

/// Append-only store of the events emitted by a ledger
#[derive(Default, Debug, Clone)]
pub struct EventStore {
    events: VecDeque<EmittedEvent>,
    next_index: u64,
}

impl EventStore {
    /// Push a new event to the store and return its index
    pub fn push(&mut self, emitter: Address, event: Event) -> u64 {
        let index = self.next_index;
        self.events.push_back(EmittedEvent {
            index,
            emitter,
            event,
        });
        self.next_index += 1;
        index
    }

    /// Push the events of a committed call, in order
    pub fn extend(&mut self, emitter: Address, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.push(emitter, event);
        }
    }

    /// Take the stored events. Indices keep increasing afterwards.
    pub fn take(&mut self) -> VecDeque<EmittedEvent> {
        std::mem::take(&mut self.events)
    }

    /// Prune the event store if its size is over the given limit
    pub fn prune(&mut self, max_events: usize) {
        while self.events.len() > max_events {
            self.events.pop_front();
        }
    }

    /// Number of stored events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// true if no event is stored
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Stored events, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &EmittedEvent> {
        self.events.iter()
    }

    /// Most recent event
    pub fn last(&self) -> Option<&EmittedEvent> {
        self.events.back()
    }

    /// Get events optionally filtered by:
    /// * emitter address
    /// * event name
    pub fn get_filtered(&self, filter: &EventFilter) -> VecDeque<EmittedEvent> {
        self.events
            .iter()
            .filter(|x| {
                if let Some(emitter) = filter.emitter {
                    if x.emitter != emitter {
                        return false;
                    }
                }
                if let Some(name) = &filter.name {
                    if x.event.name() != name.as_str() {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }
}
