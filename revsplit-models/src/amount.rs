// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Fixed-point amounts of coins or tokens.

use crate::config::{AMOUNT_DECIMALS, AMOUNT_DECIMAL_FACTOR};
use crate::ModelsError;
use nom::error::{context, ContextError, ParseError};
use nom::IResult;
use revsplit_serialization::{
    Deserializer, SerializeError, Serializer, U128VarIntDeserializer, U128VarIntSerializer,
};
use rust_decimal::prelude::*;
use serde::de::Unexpected;
use std::fmt;
use std::ops::Bound;
use std::str::FromStr;

/// A structure representing a decimal Amount of coins or tokens with safe operations.
/// This allows ensuring that there is never an uncontrolled overflow or precision loss
/// while providing a convenient decimal interface for users.
/// The underlying `u128` raw representation is a fixed-point value with factor `AMOUNT_DECIMAL_FACTOR`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Default, Hash)]
pub struct Amount(u128);

impl Amount {
    /// Minimal amount
    pub const MIN: Amount = Amount(u128::MIN);
    /// Maximal amount
    pub const MAX: Amount = Amount(u128::MAX);

    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Obtains the underlying raw `u128` representation
    /// Warning: do not use this unless you know what you are doing
    /// because the raw value does not take the `AMOUNT_DECIMAL_FACTOR` into account.
    pub const fn to_raw(&self) -> u128 {
        self.0
    }

    /// constructs an `Amount` from the underlying raw `u128` representation
    /// Warning: do not use this unless you know what you are doing
    /// because the raw value does not take the `AMOUNT_DECIMAL_FACTOR` into account
    /// In most cases, you should be using `Amount::from_str("11.23")`
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// constructs an `Amount` of `whole` units, returning None on overflow
    /// ```
    /// # use revsplit_models::Amount;
    /// # use std::str::FromStr;
    /// let supply = Amount::from_tokens(1_000_000).unwrap();
    /// assert_eq!(supply, Amount::from_str("1000000").unwrap());
    /// assert!(Amount::from_tokens(u128::MAX).is_none());
    /// ```
    pub fn from_tokens(whole: u128) -> Option<Self> {
        whole.checked_mul(AMOUNT_DECIMAL_FACTOR).map(Amount)
    }

    /// safely add self to another amount, saturating the result on overflow
    #[must_use]
    pub fn saturating_add(self, amount: Amount) -> Self {
        Amount(self.0.saturating_add(amount.0))
    }

    /// safely subtract another amount from self, saturating the result on underflow
    #[must_use]
    pub fn saturating_sub(self, amount: Amount) -> Self {
        Amount(self.0.saturating_sub(amount.0))
    }

    /// returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// safely subtract another amount from self, returning None on underflow
    pub fn checked_sub(self, amount: Amount) -> Option<Self> {
        self.0.checked_sub(amount.0).map(Amount)
    }

    /// safely add self to another amount, returning None on overflow
    pub fn checked_add(self, amount: Amount) -> Option<Self> {
        self.0.checked_add(amount.0).map(Amount)
    }

    /// safely multiply self with a `u64`, returning None on overflow
    /// ```
    /// # use revsplit_models::Amount;
    /// # use std::str::FromStr;
    /// let amount_1 : Amount = Amount::from_str("42").unwrap();
    /// let res : Amount = amount_1.checked_mul_u64(7).unwrap();
    /// assert_eq!(res, Amount::from_str("294").unwrap())
    /// ```
    pub fn checked_mul_u64(self, factor: u64) -> Option<Self> {
        self.0.checked_mul(factor as u128).map(Amount)
    }

    /// safely divide self by a `u64`, returning None if the factor is zero
    /// ```
    /// # use revsplit_models::Amount;
    /// # use std::str::FromStr;
    /// let amount_1 : Amount = Amount::from_str("42").unwrap();
    /// let res : Amount = amount_1.checked_div_u64(7).unwrap();
    /// assert_eq!(res, Amount::from_str("6").unwrap());
    /// ```
    pub fn checked_div_u64(self, factor: u64) -> Option<Self> {
        self.0.checked_div(factor as u128).map(Amount)
    }

    /// `floor(self * numerator / denominator)` without intermediate overflow,
    /// returning None if `denominator` is zero.
    ///
    /// ```
    /// # use revsplit_models::Amount;
    /// let share = Amount::from_raw(1001).mul_div_floor(60, 100).unwrap();
    /// assert_eq!(share, Amount::from_raw(600));
    /// assert!(Amount::MAX.mul_div_floor(200, 100).is_none());
    /// ```
    pub fn mul_div_floor(self, numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let (num, den) = (numerator as u128, denominator as u128);
        let quotient = self.0 / den;
        let remainder = self.0 % den;
        quotient
            .checked_mul(num)?
            .checked_add(remainder * num / den)
            .map(Amount)
    }
}

/// display an Amount in decimal string form (like "10.33")
///
/// ```
/// # use revsplit_models::Amount;
/// # use std::str::FromStr;
/// let value = Amount::from_str("11.111").unwrap();
/// assert_eq!(format!("{}", value), "11.111");
/// assert_eq!(format!("{}", Amount::from_raw(1)), "0.000000000000000001");
/// ```
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let integer = self.0 / AMOUNT_DECIMAL_FACTOR;
        let fraction = self.0 % AMOUNT_DECIMAL_FACTOR;
        if fraction == 0 {
            return write!(f, "{}", integer);
        }
        let digits = format!("{:0width$}", fraction, width = AMOUNT_DECIMALS as usize);
        write!(f, "{}.{}", integer, digits.trim_end_matches('0'))
    }
}

/// build an Amount from decimal string form (like "10.33")
/// note that this will fail if the string format is invalid
/// or if the conversion would cause an overflow, underflow or precision loss
///
/// ```
/// # use revsplit_models::Amount;
/// # use std::str::FromStr;
/// assert!(Amount::from_str("11.1").is_ok());
/// assert!(Amount::from_str("11.1111111111111111111111").is_err());
/// assert!(Amount::from_str("-11.1").is_err());
/// assert!(Amount::from_str("abc").is_err());
/// ```
impl FromStr for Amount {
    type Err = ModelsError;

    fn from_str(str_amount: &str) -> Result<Self, Self::Err> {
        let res = Decimal::from_str(str_amount)
            .map_err(|err| ModelsError::AmountParseError(err.to_string()))?
            .checked_mul(Decimal::from(AMOUNT_DECIMAL_FACTOR as u64))
            .ok_or_else(|| ModelsError::AmountParseError("amount is too large".to_string()))?;
        if res.is_sign_negative() {
            return Err(ModelsError::AmountParseError(
                "amounts cannot be strictly negative".to_string(),
            ));
        }
        if !res.fract().is_zero() {
            return Err(ModelsError::AmountParseError(format!(
                "amounts cannot be more precise than 1/{}",
                AMOUNT_DECIMAL_FACTOR
            )));
        }
        let res = res.to_u128().ok_or_else(|| {
            ModelsError::AmountParseError(
                "amount is too large to be represented as u128".to_string(),
            )
        })?;
        Ok(Amount(res))
    }
}

impl<'de> serde::Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Amount, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_str(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> serde::de::Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn visit_str<E>(self, value: &str) -> Result<Amount, E>
    where
        E: serde::de::Error,
    {
        Amount::from_str(value).map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "an Amount type representing a fixed-point currency amount"
        )
    }
}

impl serde::Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Serializer for `Amount`
#[derive(Clone, Default)]
pub struct AmountSerializer {
    u128_serializer: U128VarIntSerializer,
}

impl AmountSerializer {
    /// Creates an `AmountSerializer`
    pub const fn new() -> Self {
        Self {
            u128_serializer: U128VarIntSerializer::new(),
        }
    }
}

impl Serializer<Amount> for AmountSerializer {
    fn serialize(&self, value: &Amount, buffer: &mut Vec<u8>) -> Result<(), SerializeError> {
        self.u128_serializer.serialize(&value.0, buffer)
    }
}

/// Deserializer for `Amount`
#[derive(Clone)]
pub struct AmountDeserializer {
    u128_deserializer: U128VarIntDeserializer,
}

impl AmountDeserializer {
    /// Creates an `AmountDeserializer` accepting amounts within the given bounds
    pub fn new(min_amount: Bound<Amount>, max_amount: Bound<Amount>) -> Self {
        Self {
            u128_deserializer: U128VarIntDeserializer::new(
                min_amount.map(|amount| amount.0),
                max_amount.map(|amount| amount.0),
            ),
        }
    }
}

impl Deserializer<Amount> for AmountDeserializer {
    /// ```
    /// use std::ops::Bound::Included;
    /// use std::str::FromStr;
    /// use revsplit_models::amount::{Amount, AmountSerializer, AmountDeserializer};
    /// use revsplit_serialization::{Serializer, Deserializer, DeserializeError};
    ///
    /// let amount = Amount::from_str("999900").unwrap();
    /// let mut buffer = Vec::new();
    /// AmountSerializer::new().serialize(&amount, &mut buffer).unwrap();
    /// let (rest, decoded) = AmountDeserializer::new(Included(Amount::MIN), Included(Amount::MAX))
    ///     .deserialize::<DeserializeError>(&buffer)
    ///     .unwrap();
    /// assert!(rest.is_empty());
    /// assert_eq!(decoded, amount);
    /// ```
    fn deserialize<'a, E: ParseError<&'a [u8]> + ContextError<&'a [u8]>>(
        &self,
        buffer: &'a [u8],
    ) -> IResult<&'a [u8], Amount, E> {
        context("Failed Amount deserialization", |input| {
            self.u128_deserializer
                .deserialize(input)
                .map(|(rest, raw)| (rest, Amount::from_raw(raw)))
        })(buffer)
    }
}
