//! Property tests for value encoding
//!
//! Every in-range value survives encode -> decode for every unsigned
//! width; every out-of-range value is rejected.

use fhevm_sdk::encoding::{decode, encode};
use fhevm_sdk::{EncryptedType, PlainValue, SdkError};
use num_bigint::BigUint;
use proptest::prelude::*;

fn unsigned_type() -> impl Strategy<Value = EncryptedType> {
    prop::sample::select(EncryptedType::UNSIGNED.to_vec())
}

/// A type together with a value that fits it.
fn in_range() -> impl Strategy<Value = (EncryptedType, BigUint)> {
    unsigned_type().prop_flat_map(|t| {
        let len = t.byte_len();
        prop::collection::vec(any::<u8>(), len).prop_map(move |bytes| (t, BigUint::from_bytes_le(&bytes)))
    })
}

/// A type together with a value one to 64 bits too wide for it.
fn out_of_range() -> impl Strategy<Value = (EncryptedType, BigUint)> {
    (unsigned_type(), 0u64..64, any::<u64>()).prop_map(|(t, extra, low)| {
        let bits = t.bits().unwrap();
        let value = (BigUint::from(1u8) << (bits + extra) as usize) + BigUint::from(low);
        (t, value)
    })
}

proptest! {
    #[test]
    fn in_range_values_round_trip((t, v) in in_range()) {
        let encrypted = encode(&PlainValue::Uint(v.clone()), t).unwrap();
        prop_assert_eq!(encrypted.bytes.len(), t.byte_len());
        prop_assert_eq!(encrypted.value_type, t);
        prop_assert_eq!(decode(&encrypted).unwrap(), PlainValue::Uint(v));
    }

    #[test]
    fn out_of_range_values_are_rejected((t, v) in out_of_range()) {
        let result = encode(&PlainValue::Uint(v), t);
        prop_assert!(matches!(result, Err(SdkError::Validation(_))));
    }

    #[test]
    fn booleans_round_trip(b in any::<bool>()) {
        let encrypted = encode(&PlainValue::Bool(b), EncryptedType::Ebool).unwrap();
        prop_assert_eq!(decode(&encrypted).unwrap(), PlainValue::Bool(b));
    }

    #[test]
    fn addresses_round_trip(raw in prop::array::uniform20(any::<u8>())) {
        let addr = format!("0x{}", hex::encode(raw));
        let encrypted = encode(&PlainValue::address(addr.clone()), EncryptedType::Eaddress).unwrap();
        prop_assert_eq!(&encrypted.bytes[..], &raw[..]);
        prop_assert_eq!(decode(&encrypted).unwrap(), PlainValue::Address(addr));
    }
}
