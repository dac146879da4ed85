// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Binary serialization primitives shared by every revsplit crate.
//!
//! A type `T` is encoded by a `Serializer<T>` into a byte buffer and decoded
//! by a `Deserializer<T>`, which is a `nom` parser returning the remaining
//! input. Deserializers carry the bounds of what they accept, so that a
//! decoder never allocates more than its configuration allows.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

use displaydoc::Display;
use nom::error::{ContextError, ErrorKind, ParseError};
use nom::IResult;
use std::fmt;
use std::ops::{Bound, RangeBounds};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Errors raised while serializing a value
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone)]
pub enum SerializeError {
    /// Number {0} is too big to be serialized
    NumberTooBig(String),
    /// General error {0}
    GeneralError(String),
}

/// Error accumulated by a failing `nom` deserializer, innermost failure first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeserializeError<'a> {
    errors: Vec<(&'a [u8], String)>,
}

impl<'a> ParseError<&'a [u8]> for DeserializeError<'a> {
    fn from_error_kind(input: &'a [u8], kind: ErrorKind) -> Self {
        DeserializeError {
            errors: vec![(input, kind.description().to_string())],
        }
    }

    fn append(input: &'a [u8], kind: ErrorKind, mut other: Self) -> Self {
        other.errors.push((input, kind.description().to_string()));
        other
    }
}

impl<'a> ContextError<&'a [u8]> for DeserializeError<'a> {
    fn add_context(input: &'a [u8], ctx: &'static str, mut other: Self) -> Self {
        other.errors.push((input, ctx.to_string()));
        other
    }
}

impl<'a> fmt::Display for DeserializeError<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.errors.len().saturating_sub(1);
        for (i, (input, message)) in self.errors.iter().enumerate() {
            write!(f, "{} / Input: {:?}", message, input)?;
            if i < last {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Trait implemented by the decoders of `T`
pub trait Deserializer<T> {
    /// Decodes a `T` from the front of `buffer` and returns the remaining bytes.
    fn deserialize<'a, E: ParseError<&'a [u8]> + ContextError<&'a [u8]>>(
        &self,
        buffer: &'a [u8],
    ) -> IResult<&'a [u8], T, E>;
}

/// Trait implemented by the encoders of `T`
pub trait Serializer<T> {
    /// Appends the encoding of `value` to `buffer`.
    fn serialize(&self, value: &T, buffer: &mut Vec<u8>) -> Result<(), SerializeError>;
}

macro_rules! gen_varint {
    ($($type:ident, $ser:ident, $de:ident, $encode:ident, $buffer:ident, $decode:ident);*) => {
        $(
            #[doc = concat!("Serializer for `", stringify!($type), "` in unsigned varint form")]
            #[derive(Clone, Default)]
            pub struct $ser;

            impl $ser {
                #[doc = concat!("Creates a `", stringify!($ser), "`")]
                pub const fn new() -> Self {
                    Self
                }
            }

            impl Serializer<$type> for $ser {
                fn serialize(&self, value: &$type, buffer: &mut Vec<u8>) -> Result<(), SerializeError> {
                    buffer.extend_from_slice(unsigned_varint::encode::$encode(
                        *value,
                        &mut unsigned_varint::encode::$buffer(),
                    ));
                    Ok(())
                }
            }

            #[doc = concat!("Bounded deserializer for `", stringify!($type), "` in unsigned varint form")]
            #[derive(Clone)]
            pub struct $de {
                range: (Bound<$type>, Bound<$type>),
            }

            impl $de {
                #[doc = concat!("Creates a `", stringify!($de), "` accepting values in `[min, max]` bounds")]
                pub const fn new(min: Bound<$type>, max: Bound<$type>) -> Self {
                    Self { range: (min, max) }
                }
            }

            impl Deserializer<$type> for $de {
                fn deserialize<'a, E: ParseError<&'a [u8]> + ContextError<&'a [u8]>>(
                    &self,
                    buffer: &'a [u8],
                ) -> IResult<&'a [u8], $type, E> {
                    let (value, rest) = unsigned_varint::decode::$decode(buffer).map_err(|_| {
                        nom::Err::Error(E::from_error_kind(buffer, ErrorKind::Fail))
                    })?;
                    if !self.range.contains(&value) {
                        return Err(nom::Err::Error(E::from_error_kind(
                            buffer,
                            ErrorKind::Verify,
                        )));
                    }
                    Ok((rest, value))
                }
            }
        )*
    };
}

gen_varint! {
    u64, U64VarIntSerializer, U64VarIntDeserializer, u64, u64_buffer, u64;
    u128, U128VarIntSerializer, U128VarIntDeserializer, u128, u128_buffer, u128
}
