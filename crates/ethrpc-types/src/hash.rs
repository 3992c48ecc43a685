use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PrimitiveKind, Result, ValidationError};
use crate::scan::{fixed_hex, is_lower_hex_digit, HEX_PREFIX};

const EXPECTED: &str = "lowercase 32-byte hex string (0x followed by 64 hex characters)";

/// A 32-byte hash in its wire form: `0x` followed by 64 lowercase hex digits.
///
/// Unlike [`Address`](crate::Address), uppercase digits are rejected. The
/// value is stored exactly as parsed and is never case-folded or padded.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash(String);

impl Hash {
    /// Number of raw bytes.
    pub const BYTES: usize = 32;

    /// Length of the wire string, prefix included.
    pub const LEN: usize = HEX_PREFIX.len() + 2 * Self::BYTES;

    /// Parse and validate a hash string.
    pub fn parse(s: &str) -> Result<Self> {
        if Self::is_valid(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(ValidationError::new(PrimitiveKind::Hash, s, EXPECTED))
        }
    }

    /// Returns `true` if `s` would parse as a hash.
    pub fn is_valid(s: &str) -> bool {
        fixed_hex(s, 2 * Self::BYTES, is_lower_hex_digit)
    }

    /// Encode raw bytes in canonical lowercase form.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(format!("{HEX_PREFIX}{}", hex::encode(bytes)))
    }

    /// Decode to raw bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let decoded = hex::decode_to_slice(&self.0[HEX_PREFIX.len()..], &mut out);
        debug_assert!(decoded.is_ok(), "hash holds 64 hex digits");
        out
    }

    /// The wire string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns `true` if `s` is a valid [`Hash`].
pub fn is_hash(s: &str) -> bool {
    Hash::is_valid(s)
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.0)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Hash {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Hash {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Hash {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self> {
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::new(PrimitiveKind::Hash, s, EXPECTED))
        }
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<str> for Hash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Hash> for String {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VALID: &str = "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

    #[test]
    fn accepts_lowercase_64_digits() {
        let hash = Hash::parse(VALID).unwrap();
        assert_eq!(hash.as_str(), VALID);
        assert_eq!(VALID.len(), Hash::LEN);
    }

    #[test]
    fn rejects_uppercase_digit() {
        let upper = VALID.replacen('a', "A", 1);
        let err = Hash::parse(&upper).unwrap_err();
        assert_eq!(err.kind(), PrimitiveKind::Hash);
        assert_eq!(err.input(), upper);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Hash::parse(&VALID[..65]).is_err());
        assert!(Hash::parse(&format!("{VALID}0")).is_err());
        assert!(Hash::parse("0x").is_err());
        assert!(Hash::parse("").is_err());
    }

    #[test]
    fn rejects_missing_or_wrong_prefix() {
        assert!(Hash::parse(&VALID[2..]).is_err());
        assert!(Hash::parse(&VALID.replacen("0x", "0X", 1)).is_err());
        assert!(Hash::parse(&format!("00{}", &VALID[2..])).is_err());
    }

    #[test]
    fn rejects_non_hex() {
        let bad = VALID.replacen('1', "g", 1);
        assert!(Hash::parse(&bad).is_err());
    }

    #[test]
    fn bytes_roundtrip() {
        let hash = Hash::from_bytes([0xab; 32]);
        assert_eq!(hash.as_str(), format!("0x{}", "ab".repeat(32)));
        assert_eq!(hash.to_bytes(), [0xab; 32]);
        assert!(Hash::is_valid(hash.as_str()));
    }

    #[test]
    fn serde_is_a_plain_string() {
        let hash = Hash::parse(VALID).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{VALID}\""));
        let parsed: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, hash);
    }

    #[test]
    fn deserialize_applies_validation() {
        let upper = format!("\"{}\"", VALID.to_uppercase().replacen("0X", "0x", 1));
        let err = serde_json::from_str::<Hash>(&upper).unwrap_err();
        assert!(err.to_string().contains("invalid hash"));
    }

    #[test]
    fn deserialize_non_string_is_json_error() {
        let err = serde_json::from_str::<Hash>("42").unwrap_err();
        assert!(!err.to_string().contains("invalid hash"));
    }

    #[test]
    fn display_and_debug() {
        let hash = Hash::parse(VALID).unwrap();
        assert_eq!(format!("{hash}"), VALID);
        assert_eq!(format!("{hash:?}"), format!("Hash({VALID})"));
    }

    proptest! {
        #[test]
        fn predicate_agrees_with_parse(s in "(0x)?[0-9a-fA-Fg]{62,66}") {
            prop_assert_eq!(Hash::is_valid(&s), Hash::parse(&s).is_ok());
        }

        #[test]
        fn generated_hashes_roundtrip(body in "[0-9a-f]{64}") {
            let hash = Hash::parse(&format!("0x{body}")).unwrap();
            let json = serde_json::to_string(&hash).unwrap();
            prop_assert_eq!(serde_json::from_str::<Hash>(&json).unwrap(), hash);
        }
    }
}
