use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PrimitiveKind, Result, ValidationError};
use crate::scan::{is_lower_hex_digit, HEX_PREFIX};

const EXPECTED: &str = "lowercase hex string with no leading zeros (0x0 or 0x[1-9a-f][0-9a-f]*)";

/// A hex-encoded unsigned integer in canonical form.
///
/// The grammar is `0x(0|[1-9a-f][0-9a-f]*)`: zero is `0x0`, there are no
/// leading zeros, no uppercase digits, and `0x` alone is not a value. Only
/// the encoding is checked. The magnitude is never interpreted, so there is
/// no upper bound on the number of digits.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Quantity(String);

impl Quantity {
    /// Prefix of every quantity.
    pub const PREFIX: &str = HEX_PREFIX;

    /// Parse and validate a quantity string.
    pub fn parse(s: &str) -> Result<Self> {
        if Self::is_valid(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(ValidationError::new(PrimitiveKind::Quantity, s, EXPECTED))
        }
    }

    /// Returns `true` if `s` would parse as a quantity.
    pub fn is_valid(s: &str) -> bool {
        let Some(digits) = s.strip_prefix(HEX_PREFIX) else {
            return false;
        };
        match digits.as_bytes() {
            [] => false,
            [b'0'] => true,
            [b'0', ..] => false,
            bytes => bytes.iter().copied().all(is_lower_hex_digit),
        }
    }

    /// The canonical encoding of zero.
    pub fn zero() -> Self {
        Self(format!("{HEX_PREFIX}0"))
    }

    /// Returns `true` for `0x0`.
    pub fn is_zero(&self) -> bool {
        self.digits() == "0"
    }

    /// The hex digits without the `0x` prefix.
    pub fn digits(&self) -> &str {
        &self.0[HEX_PREFIX.len()..]
    }

    /// The wire string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns `true` if `s` is a valid [`Quantity`].
pub fn is_quantity(s: &str) -> bool {
    Quantity::is_valid(s)
}

impl Default for Quantity {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({})", self.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Quantity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Quantity {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Quantity {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self> {
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::new(PrimitiveKind::Quantity, s, EXPECTED))
        }
    }
}

/// `{:x}` never emits leading zeros, so every native integer encodes canonically.
impl From<u64> for Quantity {
    fn from(n: u64) -> Self {
        Self(format!("{HEX_PREFIX}{n:x}"))
    }
}

impl AsRef<str> for Quantity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Quantity> for String {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}
