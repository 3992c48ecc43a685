use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PrimitiveKind, Result, ValidationError};
use crate::scan::{fixed_hex, HEX_PREFIX};

const EXPECTED: &str = "20-byte hex string (0x followed by 40 hex characters)";

/// A 20-byte account address: `0x` followed by 40 hex digits of any case.
///
/// Mixed case is accepted because addresses may carry EIP-55 checksum
/// capitalization. The checksum itself is not verified here; this is a
/// shape check only. The caller's casing is preserved on serialization.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    /// Number of raw bytes.
    pub const BYTES: usize = 20;

    /// Length of the wire string, prefix included.
    pub const LEN: usize = HEX_PREFIX.len() + 2 * Self::BYTES;

    /// Parse and validate an address string.
    pub fn parse(s: &str) -> Result<Self> {
        if Self::is_valid(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(ValidationError::new(PrimitiveKind::Address, s, EXPECTED))
        }
    }

    /// Returns `true` if `s` would parse as an address.
    pub fn is_valid(s: &str) -> bool {
        fixed_hex(s, 2 * Self::BYTES, |b| b.is_ascii_hexdigit())
    }

    /// Encode raw bytes. The result is all lowercase.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(format!("{HEX_PREFIX}{}", hex::encode(bytes)))
    }

    /// Decode to raw bytes, ignoring case.
    pub fn to_bytes(&self) -> [u8; 20] {
        let mut out = [0u8; 20];
        let decoded = hex::decode_to_slice(&self.0[HEX_PREFIX.len()..], &mut out);
        debug_assert!(decoded.is_ok(), "address holds 40 hex digits");
        out
    }

    /// The wire string, in the casing it was parsed with.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns `true` if `s` is a valid [`Address`].
pub fn is_address(s: &str) -> bool {
    Address::is_valid(s)
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self> {
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::new(PrimitiveKind::Address, s, EXPECTED))
        }
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}
