//! Value types exchanged with the gateway

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{SdkError, SdkResult};

/// Declared type of an encrypted value. The serde form is the gateway
/// wire tag (`euint32`, `ebool`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncryptedType {
    Ebool,
    Euint8,
    Euint16,
    Euint32,
    Euint64,
    Euint128,
    Euint256,
    Eaddress,
}

impl EncryptedType {
    pub const ALL: [EncryptedType; 8] = [
        EncryptedType::Ebool,
        EncryptedType::Euint8,
        EncryptedType::Euint16,
        EncryptedType::Euint32,
        EncryptedType::Euint64,
        EncryptedType::Euint128,
        EncryptedType::Euint256,
        EncryptedType::Eaddress,
    ];

    pub const UNSIGNED: [EncryptedType; 6] = [
        EncryptedType::Euint8,
        EncryptedType::Euint16,
        EncryptedType::Euint32,
        EncryptedType::Euint64,
        EncryptedType::Euint128,
        EncryptedType::Euint256,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            EncryptedType::Ebool => "ebool",
            EncryptedType::Euint8 => "euint8",
            EncryptedType::Euint16 => "euint16",
            EncryptedType::Euint32 => "euint32",
            EncryptedType::Euint64 => "euint64",
            EncryptedType::Euint128 => "euint128",
            EncryptedType::Euint256 => "euint256",
            EncryptedType::Eaddress => "eaddress",
        }
    }

    /// Bit width for the unsigned types, `None` for bool and address.
    pub fn bits(&self) -> Option<u64> {
        match self {
            EncryptedType::Euint8 => Some(8),
            EncryptedType::Euint16 => Some(16),
            EncryptedType::Euint32 => Some(32),
            EncryptedType::Euint64 => Some(64),
            EncryptedType::Euint128 => Some(128),
            EncryptedType::Euint256 => Some(256),
            EncryptedType::Ebool | EncryptedType::Eaddress => None,
        }
    }

    /// Encoded length in bytes.
    pub fn byte_len(&self) -> usize {
        match self {
            EncryptedType::Ebool => 1,
            EncryptedType::Eaddress => ADDRESS_LEN,
            other => other.bits().map(|b| (b / 8) as usize).unwrap_or_default(),
        }
    }

    pub fn is_unsigned(&self) -> bool {
        self.bits().is_some()
    }

    fn discriminant(&self) -> u8 {
        match self {
            EncryptedType::Ebool => 0,
            EncryptedType::Euint8 => 1,
            EncryptedType::Euint16 => 2,
            EncryptedType::Euint32 => 3,
            EncryptedType::Euint64 => 4,
            EncryptedType::Euint128 => 5,
            EncryptedType::Euint256 => 6,
            EncryptedType::Eaddress => 7,
        }
    }
}

impl fmt::Display for EncryptedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EncryptedType {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        EncryptedType::ALL
            .into_iter()
            .find(|t| t.tag() == lowered)
            .ok_or_else(|| SdkError::Validation(format!("unknown encrypted type: {s}")))
    }
}

/// Length of an account address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A plaintext value before encryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlainValue {
    Bool(bool),
    Uint(BigUint),
    /// `0x`-prefixed hex, validated when encoded
    Address(String),
}

impl PlainValue {
    pub fn address(addr: impl Into<String>) -> Self {
        PlainValue::Address(addr.into())
    }

    /// Parse user input for the given declared type.
    pub fn parse(raw: &str, value_type: EncryptedType) -> SdkResult<Self> {
        let raw = raw.trim();
        match value_type {
            EncryptedType::Ebool => parse_bool(raw)
                .map(PlainValue::Bool)
                .ok_or_else(|| SdkError::Validation(format!("not a boolean: {raw}"))),
            EncryptedType::Eaddress => Ok(PlainValue::Address(raw.to_string())),
            _ => parse_biguint(raw)
                .map(PlainValue::Uint)
                .ok_or_else(|| SdkError::Validation(format!("not an unsigned integer: {raw}"))),
        }
    }
}

impl From<bool> for PlainValue {
    fn from(v: bool) -> Self {
        PlainValue::Bool(v)
    }
}

macro_rules! impl_from_uint {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PlainValue {
                fn from(v: $t) -> Self {
                    PlainValue::Uint(BigUint::from(v))
                }
            }
        )*
    };
}

impl_from_uint!(u8, u16, u32, u64, u128);

impl From<BigUint> for PlainValue {
    fn from(v: BigUint) -> Self {
        PlainValue::Uint(v)
    }
}

/// Encoded value paired with its declared type.
///
/// No homomorphic transform is applied: `bytes` is the little-endian
/// fixed-width encoding. A real FHE backend replaces the bytes with its
/// ciphertext and keeps this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedValue {
    pub value_type: EncryptedType,
    pub bytes: Vec<u8>,
}

impl EncryptedValue {
    /// `0x`-prefixed hex of the encoded bytes, as sent to the gateway.
    pub fn data(&self) -> String {
        format!("0x{}", hex::encode(&self.bytes))
    }

    /// 32-byte on-chain handle: SHA-256 over the type and the encoded bytes.
    pub fn handle(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update([self.value_type.discriminant()]);
        hasher.update(&self.bytes);
        hasher.finalize().into()
    }

    pub fn handle_hex(&self) -> String {
        format!("0x{}", hex::encode(self.handle()))
    }
}

/// Value returned by one of the decrypt endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecryptedValue {
    Bool(bool),
    Uint(BigUint),
    Address(String),
}

impl DecryptedValue {
    /// Interpret the gateway's `value` string according to the declared type.
    pub fn parse(raw: &str, value_type: EncryptedType) -> SdkResult<Self> {
        match value_type {
            EncryptedType::Ebool => parse_bool(raw)
                .map(DecryptedValue::Bool)
                .ok_or_else(|| SdkError::InvalidResponse(format!("expected boolean, got {raw:?}"))),
            EncryptedType::Eaddress => Ok(DecryptedValue::Address(raw.to_string())),
            _ => parse_biguint(raw)
                .map(DecryptedValue::Uint)
                .ok_or_else(|| SdkError::InvalidResponse(format!("expected integer, got {raw:?}"))),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DecryptedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<&BigUint> {
        match self {
            DecryptedValue::Uint(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for DecryptedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecryptedValue::Bool(b) => write!(f, "{b}"),
            DecryptedValue::Uint(v) => write!(f, "{v}"),
            DecryptedValue::Address(a) => f.write_str(a),
        }
    }
}

/// Property categories used by listings and requests, encrypted as `euint8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PropertyType {
    Apartment = 0,
    House = 1,
    Condo = 2,
    Studio = 3,
}

impl PropertyType {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PropertyType {
    type Error = SdkError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PropertyType::Apartment),
            1 => Ok(PropertyType::House),
            2 => Ok(PropertyType::Condo),
            3 => Ok(PropertyType::Studio),
            other => Err(SdkError::Validation(format!("unknown property type: {other}"))),
        }
    }
}

impl FromStr for PropertyType {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apartment" => Ok(PropertyType::Apartment),
            "house" => Ok(PropertyType::House),
            "condo" => Ok(PropertyType::Condo),
            "studio" => Ok(PropertyType::Studio),
            other => other
                .parse::<u8>()
                .map_err(|_| SdkError::Validation(format!("unknown property type: {s}")))
                .and_then(PropertyType::try_from),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_biguint(raw: &str) -> Option<BigUint> {
    let raw = raw.trim();
    // `parse_bytes` alone would also take `+` and `_` separators.
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) => {
            BigUint::parse_bytes(digits.as_bytes(), 16)
        }
        None if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
            BigUint::parse_bytes(raw.as_bytes(), 10)
        }
        _ => None,
    }
}
