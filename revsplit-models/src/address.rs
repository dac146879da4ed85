// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Account identifiers.

use crate::config::ADDRESS_SIZE_BYTES;
use crate::error::ModelsError;
use nom::error::{context, ContextError, ParseError};
use nom::IResult;
use revsplit_serialization::{Deserializer, SerializeError, Serializer};
use std::str::FromStr;

/// Prefix of the text form of an address
pub const ADDRESS_PREFIX: char = 'A';

/// Opaque 160-bit account identifier.
///
/// The all-zero address is the null identifier: ledgers refuse it as a
/// recipient, a spender or a registered payee.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, Default)]
pub struct Address([u8; ADDRESS_SIZE_BYTES]);

impl Address {
    /// The null address
    pub const ZERO: Address = Address([0u8; ADDRESS_SIZE_BYTES]);

    /// Builds an address from its raw bytes
    pub const fn from_bytes(data: [u8; ADDRESS_SIZE_BYTES]) -> Self {
        Self(data)
    }

    /// Raw bytes of the address
    pub fn to_bytes(&self) -> &[u8; ADDRESS_SIZE_BYTES] {
        &self.0
    }

    /// true for the null address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_SIZE_BYTES]
    }

    /// Address of the ledger instance deployed by `deployer` with the given `nonce`.
    ///
    /// ```
    /// # use revsplit_models::Address;
    /// let deployer = Address::from_bytes([7; 20]);
    /// let first = Address::derive_contract(&deployer, 0);
    /// assert_eq!(first, Address::derive_contract(&deployer, 0));
    /// assert_ne!(first, Address::derive_contract(&deployer, 1));
    /// ```
    pub fn derive_contract(deployer: &Address, nonce: u64) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(deployer.to_bytes());
        hasher.update(&nonce.to_be_bytes());
        let mut bytes = [0u8; ADDRESS_SIZE_BYTES];
        bytes.copy_from_slice(&hasher.finalize().as_bytes()[..ADDRESS_SIZE_BYTES]);
        Self(bytes)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            ADDRESS_PREFIX,
            bs58::encode(self.0).with_check().into_string()
        )
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

/// ```
/// # use revsplit_models::Address;
/// # use std::str::FromStr;
/// let address = Address::from_bytes([42; 20]);
/// assert_eq!(Address::from_str(&address.to_string()).unwrap(), address);
/// assert!(Address::from_str("B1111").is_err());
/// ```
impl FromStr for Address {
    type Err = ModelsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match chars.next() {
            Some(ADDRESS_PREFIX) => {
                let decoded = bs58::decode(chars.as_str())
                    .with_check(None)
                    .into_vec()
                    .map_err(|err| ModelsError::AddressParseError(err.to_string()))?;
                let bytes: [u8; ADDRESS_SIZE_BYTES] = decoded.try_into().map_err(|_| {
                    ModelsError::AddressParseError(format!(
                        "address {} does not decode to {} bytes",
                        s, ADDRESS_SIZE_BYTES
                    ))
                })?;
                Ok(Address(bytes))
            }
            _ => Err(ModelsError::AddressParseError(format!(
                "address {} does not start with {}",
                s, ADDRESS_PREFIX
            ))),
        }
    }
}

impl ::serde::Serialize for Address {
    fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.collect_str(&self.to_string())
        } else {
            s.serialize_bytes(self.to_bytes())
        }
    }
}

impl<'de> ::serde::Deserialize<'de> for Address {
    fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<Address, D::Error> {
        if d.is_human_readable() {
            struct StringVisitor;

            impl<'de> ::serde::de::Visitor<'de> for StringVisitor {
                type Value = Address;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter.write_str("A + base58::encode(bytes)")
                }

                fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                where
                    E: ::serde::de::Error,
                {
                    Address::from_str(v).map_err(E::custom)
                }
            }
            d.deserialize_str(StringVisitor)
        } else {
            struct BytesVisitor;

            impl<'de> ::serde::de::Visitor<'de> for BytesVisitor {
                type Value = Address;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter.write_str("a bytestring")
                }

                fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
                where
                    E: ::serde::de::Error,
                {
                    Ok(Address(v.try_into().map_err(E::custom)?))
                }
            }
            d.deserialize_bytes(BytesVisitor)
        }
    }
}

/// Serializer for `Address`
#[derive(Clone, Default)]
pub struct AddressSerializer;

impl AddressSerializer {
    /// Creates an `AddressSerializer`
    pub const fn new() -> Self {
        Self
    }
}

impl Serializer<Address> for AddressSerializer {
    fn serialize(&self, value: &Address, buffer: &mut Vec<u8>) -> Result<(), SerializeError> {
        buffer.extend_from_slice(value.to_bytes());
        Ok(())
    }
}

/// Deserializer for `Address`
#[derive(Clone, Default)]
pub struct AddressDeserializer;

impl AddressDeserializer {
    /// Creates an `AddressDeserializer`
    pub const fn new() -> Self {
        Self
    }
}

impl Deserializer<Address> for AddressDeserializer {
    /// ```
    /// use revsplit_models::address::{Address, AddressSerializer, AddressDeserializer};
    /// use revsplit_serialization::{Serializer, Deserializer, DeserializeError};
    ///
    /// let address = Address::from_bytes([3; 20]);
    /// let mut buffer = Vec::new();
    /// AddressSerializer::new().serialize(&address, &mut buffer).unwrap();
    /// let (rest, decoded) = AddressDeserializer::new().deserialize::<DeserializeError>(&buffer).unwrap();
    /// assert!(rest.is_empty());
    /// assert_eq!(decoded, address);
    /// ```
    fn deserialize<'a, E: ParseError<&'a [u8]> + ContextError<&'a [u8]>>(
        &self,
        buffer: &'a [u8],
    ) -> IResult<&'a [u8], Address, E> {
        context("Failed Address deserialization", |input: &'a [u8]| {
            let (rest, bytes) =
                nom::bytes::complete::take::<_, _, E>(ADDRESS_SIZE_BYTES)(input)?;
            let mut data = [0u8; ADDRESS_SIZE_BYTES];
            data.copy_from_slice(bytes);
            Ok((rest, Address(data)))
        })(buffer)
    }
}
