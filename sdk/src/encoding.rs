//! Fixed-width little-endian packing of plaintext values.
//!
//! This is the seam where a real FHE library plugs in: `encode` would
//! become a public-key encryption call with the same inputs and outputs.

use num_bigint::BigUint;

use crate::error::{SdkError, SdkResult};
use crate::types::{EncryptedType, EncryptedValue, PlainValue, ADDRESS_LEN};

/// Check that `value` fits the declared type.
pub fn validate(value: &PlainValue, value_type: EncryptedType) -> SdkResult<()> {
    encode_bytes(value, value_type).map(|_| ())
}

/// Validate and encode `value` as `value_type`.
pub fn encode(value: &PlainValue, value_type: EncryptedType) -> SdkResult<EncryptedValue> {
    let bytes = encode_bytes(value, value_type)?;
    Ok(EncryptedValue { value_type, bytes })
}

/// Recover the plaintext from an encoded value.
pub fn decode(encrypted: &EncryptedValue) -> SdkResult<PlainValue> {
    let value_type = encrypted.value_type;
    let bytes = &encrypted.bytes;
    if bytes.len() != value_type.byte_len() {
        return Err(SdkError::Validation(format!(
            "{value_type} expects {} bytes, got {}",
            value_type.byte_len(),
            bytes.len()
        )));
    }

    match value_type {
        EncryptedType::Ebool => match bytes[0] {
            0 => Ok(PlainValue::Bool(false)),
            1 => Ok(PlainValue::Bool(true)),
            other => Err(SdkError::Validation(format!("invalid ebool byte {other:#04x}"))),
        },
        EncryptedType::Eaddress => Ok(PlainValue::Address(format!("0x{}", hex::encode(bytes)))),
        _ => Ok(PlainValue::Uint(BigUint::from_bytes_le(bytes))),
    }
}

fn encode_bytes(value: &PlainValue, value_type: EncryptedType) -> SdkResult<Vec<u8>> {
    match (value_type, value) {
        (EncryptedType::Ebool, PlainValue::Bool(b)) => Ok(vec![u8::from(*b)]),
        (EncryptedType::Ebool, PlainValue::Uint(v)) => {
            if *v == BigUint::from(0u8) {
                Ok(vec![0])
            } else if *v == BigUint::from(1u8) {
                Ok(vec![1])
            } else {
                Err(SdkError::Validation(format!("{v} is not a valid ebool")))
            }
        }
        (EncryptedType::Eaddress, PlainValue::Address(addr)) => parse_address(addr).map(Vec::from),
        (t, PlainValue::Uint(v)) if t.is_unsigned() => {
            let bits = t.bits().unwrap_or_default();
            if v.bits() > bits {
                return Err(SdkError::Validation(format!("{v} is out of range for {t}")));
            }
            let mut bytes = v.to_bytes_le();
            bytes.resize(t.byte_len(), 0);
            Ok(bytes)
        }
        (t, other) => Err(SdkError::Validation(format!(
            "{} cannot be encoded as {t}",
            describe(other)
        ))),
    }
}

/// Parse a `0x`-prefixed 20-byte hex address.
pub fn parse_address(addr: &str) -> SdkResult<[u8; ADDRESS_LEN]> {
    let digits = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .ok_or_else(|| SdkError::Validation(format!("address must start with 0x: {addr}")))?;
    let raw = hex::decode(digits)
        .map_err(|e| SdkError::Validation(format!("invalid address {addr}: {e}")))?;
    <[u8; ADDRESS_LEN]>::try_from(raw.as_slice()).map_err(|_| {
        SdkError::Validation(format!(
            "address must be {ADDRESS_LEN} bytes, got {}",
            raw.len()
        ))
    })
}

fn describe(value: &PlainValue) -> &'static str {
    match value {
        PlainValue::Bool(_) => "a boolean",
        PlainValue::Uint(_) => "an integer",
        PlainValue::Address(_) => "an address",
    }
}
