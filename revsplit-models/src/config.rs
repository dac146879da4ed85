// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Protocol-wide constants

/// Number of decimals of every `Amount`
pub const AMOUNT_DECIMALS: u8 = 18;

/// Raw units in one whole coin or token
pub const AMOUNT_DECIMAL_FACTOR: u128 = 1_000_000_000_000_000_000;

/// Percentage representing the whole of a revenue
pub const MAX_PERCENTAGE: u64 = 100;

/// Size of an address, in bytes
pub const ADDRESS_SIZE_BYTES: usize = 20;
