use crate::{
    DeserializeError, Deserializer, Serializer, U128VarIntDeserializer, U128VarIntSerializer,
    U64VarIntDeserializer, U64VarIntSerializer,
};
use nom::error::{ContextError, ErrorKind, ParseError};
use paste::paste;
use std::ops::Bound::Included;

macro_rules! gen_limit_tests {
    ($($type:ident),*) => {
        paste! {
            $(
                #[test]
                fn [<test_ $type _varint_limits>]() {
                    let serializer = [<$type:upper VarIntSerializer>]::new();
                    let deserializer = [<$type:upper VarIntDeserializer>]::new(Included($type::MIN), Included($type::MAX));
                    for value in [$type::MIN, 1, 127, 128, $type::MAX] {
                        let mut buffer = Vec::new();
                        serializer.serialize(&value, &mut buffer).unwrap();
                        let (rest, decoded) = deserializer.deserialize::<DeserializeError>(&buffer).unwrap();
                        assert!(rest.is_empty());
                        assert_eq!(decoded, value);
                    }
                }
            )*
        }
    };
}

gen_limit_tests!(u64, u128);

#[test]
fn test_varint_out_of_range_is_rejected() {
    let mut buffer = Vec::new();
    U64VarIntSerializer::new().serialize(&101, &mut buffer).unwrap();
    let deserializer = U64VarIntDeserializer::new(Included(0), Included(100));
    assert!(deserializer
        .deserialize::<DeserializeError>(&buffer)
        .is_err());
}

#[test]
fn test_truncated_varint_is_rejected() {
    let mut buffer = Vec::new();
    U128VarIntSerializer::new()
        .serialize(&u128::MAX, &mut buffer)
        .unwrap();
    buffer.pop();
    let deserializer = U128VarIntDeserializer::new(Included(0), Included(u128::MAX));
    assert!(deserializer
        .deserialize::<DeserializeError>(&buffer)
        .is_err());
}

#[test]
fn test_error_display_lists_context() {
    let input: &[u8] = &[0];
    let err = DeserializeError::add_context(
        input,
        "Failed percentage deserialization",
        DeserializeError::from_error_kind(input, ErrorKind::Verify),
    );
    let text = err.to_string();
    assert!(text.contains("Failed percentage deserialization"));
    assert_eq!(text.lines().count(), 2);
}
