//! Block specifier: a block identified by number, tag, or hash.
//!
//! The wire form carries no discriminator. A specifier is just the JSON
//! string of whichever primitive it holds, and decoding recovers the variant
//! from the shape of that string:
//!
//! 1. an exact block tag literal is a [`BlockSpecifier::Tag`];
//! 2. a 66-character string starting with `0x` must be a [`Hash`];
//! 3. anything else of length 3 or more must be a [`Quantity`];
//! 4. shorter input is rejected outright.
//!
//! Steps 2 and 3 do not fall through. A hash-shaped string that fails hash
//! validation reports the hash error rather than trying the quantity grammar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::block_tag::BlockTag;
use crate::error::{PrimitiveKind, Result, ValidationError};
use crate::hash::Hash;
use crate::quantity::Quantity;
use crate::scan::HEX_PREFIX;

const EXPECTED: &str = "a block tag, a 32-byte hash, or a hex quantity";

const EXPECTED_NUMBER: &str = "a quantity shorter than a 32-byte hash (at most 63 hex digits)";

/// Shortest input that could be a quantity: `0x` plus one digit.
const MIN_QUANTITY_LEN: usize = HEX_PREFIX.len() + 1;

/// Any of the three ways a JSON-RPC caller may identify a block.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockSpecifier {
    /// By block number.
    ///
    /// A quantity with exactly 64 digits has the length of a hash and decodes
    /// back as [`BlockSpecifier::Hash`]. `TryFrom<Quantity>` refuses those.
    Number(Quantity),
    /// By symbolic position.
    Tag(BlockTag),
    /// By block hash.
    Hash(Hash),
}

impl BlockSpecifier {
    /// Decode a specifier from its wire string.
    pub fn parse(s: &str) -> Result<Self> {
        let result = Self::disambiguate(s);
        match &result {
            Ok(spec) => {
                trace!(input = s, variant = spec.variant_name(), "resolved block specifier")
            }
            Err(e) => debug!(input = s, kind = %e.kind(), "rejected block specifier"),
        }
        result
    }

    fn disambiguate(s: &str) -> Result<Self> {
        if BlockTag::is_block_tag(s) {
            return BlockTag::parse(s).map(Self::Tag);
        }
        if s.len() == Hash::LEN && s.starts_with(HEX_PREFIX) {
            return Hash::parse(s).map(Self::Hash);
        }
        if s.len() >= MIN_QUANTITY_LEN {
            return Quantity::parse(s).map(Self::Number);
        }
        Err(ValidationError::new(PrimitiveKind::BlockSpecifier, s, EXPECTED))
    }

    /// The block number, if this is a [`BlockSpecifier::Number`].
    pub fn as_number(&self) -> Option<&Quantity> {
        match self {
            Self::Number(q) => Some(q),
            _ => None,
        }
    }

    /// The block tag, if this is a [`BlockSpecifier::Tag`].
    pub fn as_tag(&self) -> Option<BlockTag> {
        match self {
            Self::Tag(tag) => Some(*tag),
            _ => None,
        }
    }

    /// The block hash, if this is a [`BlockSpecifier::Hash`].
    pub fn as_hash(&self) -> Option<&Hash> {
        match self {
            Self::Hash(h) => Some(h),
            _ => None,
        }
    }

    /// Returns `true` if this is a block number.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` if this is a block tag.
    pub fn is_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }

    /// Returns `true` if this is a block hash.
    pub fn is_hash(&self) -> bool {
        matches!(self, Self::Hash(_))
    }

    /// The wire string of the active variant.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number(q) => q.as_str(),
            Self::Tag(tag) => tag.as_str(),
            Self::Hash(h) => h.as_str(),
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Tag(_) => "tag",
            Self::Hash(_) => "hash",
        }
    }
}

impl Default for BlockSpecifier {
    fn default() -> Self {
        Self::Tag(BlockTag::Latest)
    }
}

impl fmt::Display for BlockSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockSpecifier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BlockSpecifier {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Fails for a 64-digit quantity, which would re-decode as a hash.
impl TryFrom<Quantity> for BlockSpecifier {
    type Error = ValidationError;

    fn try_from(q: Quantity) -> Result<Self> {
        if q.as_str().len() == Hash::LEN {
            return Err(ValidationError::new(PrimitiveKind::BlockSpecifier, q, EXPECTED_NUMBER));
        }
        Ok(Self::Number(q))
    }
}

impl From<BlockTag> for BlockSpecifier {
    fn from(tag: BlockTag) -> Self {
        Self::Tag(tag)
    }
}

impl From<Hash> for BlockSpecifier {
    fn from(h: Hash) -> Self {
        Self::Hash(h)
    }
}

impl Serialize for BlockSpecifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Number(q) => q.serialize(serializer),
            Self::Tag(tag) => tag.serialize(serializer),
            Self::Hash(h) => h.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for BlockSpecifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
