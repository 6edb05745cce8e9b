//! Chain value types
//!
//! Addresses and constructor/call argument tokens passed to the chain deployer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of an account address in bytes
pub const ADDRESS_LENGTH: usize = 20;

/// 20-byte account address
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_LENGTH]);

/// Address parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address must be {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Address is not valid hex: {0}")]
    InvalidHex(String),
}

impl Address {
    /// The zero address
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    /// Create an address from raw bytes
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Raw address bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Lowercase 0x-prefixed hex form
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parse a hex address. The `0x` prefix is optional and the mixed-case
    /// checksum is not verified.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != ADDRESS_LENGTH * 2 {
            return Err(AddressError::InvalidLength {
                expected: ADDRESS_LENGTH * 2,
                actual: digits.len(),
            });
        }

        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Typed argument for a constructor or a contract call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// `address`
    Address(Address),
    /// `uint256` (all values used by the upgrade fit in 64 bits)
    Uint(u64),
    /// `uint256[]`
    UintArray(Vec<u64>),
    /// `address[]`
    AddressArray(Vec<Address>),
    /// `string[]`
    StringArray(Vec<String>),
}

impl Token {
    /// Solidity type name of this token
    pub fn type_name(&self) -> &'static str {
        match self {
            Token::Address(_) => "address",
            Token::Uint(_) => "uint256",
            Token::UintArray(_) => "uint256[]",
            Token::AddressArray(_) => "address[]",
            Token::StringArray(_) => "string[]",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Address(address) => write!(f, "{}", address),
            Token::Uint(value) => write!(f, "{}", value),
            Token::UintArray(values) => write!(f, "{:?}", values),
            Token::AddressArray(addresses) => write!(f, "[{} addresses]", addresses.len()),
            Token::StringArray(strings) => write!(f, "[{} strings]", strings.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_case_address() {
        let address: Address = "0x000F3df6D732807Ef1319fB7B8bB8522d0Beac02".parse().unwrap();
        assert_eq!(
            address.to_hex(),
            "0x000f3df6d732807ef1319fb7b8bb8522d0beac02"
        );
        assert!(!address.is_zero());
    }

    #[test]
    fn test_parse_without_prefix() {
        let address: Address = "1111111111111111111111111111111111111111".parse().unwrap();
        assert_eq!(address.as_bytes(), &[0x11u8; ADDRESS_LENGTH]);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "0x1234".parse::<Address>(),
            Err(AddressError::InvalidLength {
                expected: 40,
                actual: 4
            })
        );
        assert!(matches!(
            "0xzz00000000000000000000000000000000000000".parse::<Address>(),
            Err(AddressError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_address_serde_as_hex_string() {
        let address = Address::new([0xab; ADDRESS_LENGTH]);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "ab".repeat(20)));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }

    #[test]
    fn test_token_type_names() {
        assert_eq!(Token::Address(Address::ZERO).type_name(), "address");
        assert_eq!(Token::Uint(1).type_name(), "uint256");
        assert_eq!(Token::UintArray(vec![]).type_name(), "uint256[]");
        assert_eq!(Token::AddressArray(vec![]).type_name(), "address[]");
        assert_eq!(Token::StringArray(vec![]).type_name(), "string[]");
    }

    #[test]
    fn test_token_serializes_tagged() {
        let json = serde_json::to_value(Token::Uint(8192)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "uint", "value": 8192}));
    }
}
