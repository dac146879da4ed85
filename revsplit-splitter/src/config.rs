// Copyright (c) 2022 MASSA LABS <info@massa.net>

use serde::Deserialize;

/// When received funds are paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionTrigger {
    /// in the same call that receives them
    #[default]
    OnReceipt,
    /// only on an explicit `distribute` call
    Explicit,
}

/// What happens to the part of the balance that floor division leaves behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// stays at the splitter address
    #[default]
    Retain,
    /// the truncation dust goes to the first registered recipient.
    /// The share not allocated to anyone is still retained.
    FirstRecipient,
}

/// Splitter configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// distribution trigger
    pub trigger: DistributionTrigger,
    /// remainder handling
    pub remainder: RemainderPolicy,
    /// number of events kept in the splitter's event store
    pub max_events: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        SplitterConfig {
            trigger: DistributionTrigger::default(),
            remainder: RemainderPolicy::default(),
            max_events: 10_000,
        }
    }
}
