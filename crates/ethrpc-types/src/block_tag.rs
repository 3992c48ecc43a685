use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PrimitiveKind, Result, ValidationError};

const EXPECTED: &str = "one of [earliest, finalized, safe, latest, pending]";

/// A symbolic reference to a block position in the chain.
///
/// Matching is exact: no case folding and no aliases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockTag {
    /// The lowest numbered block the client has available.
    Earliest,
    /// The most recent crypto-economically secure block. Cannot be
    /// re-orged outside of manual intervention.
    Finalized,
    /// The most recent block that is safe from re-orgs under honest
    /// majority and certain synchronicity assumptions.
    Safe,
    /// The most recent block in the canonical chain observed by the client.
    /// May be re-orged out even under normal conditions.
    #[default]
    Latest,
    /// A sample next block built on top of `latest` from the local mempool.
    Pending,
}

impl BlockTag {
    /// All tags, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Earliest,
        Self::Finalized,
        Self::Safe,
        Self::Latest,
        Self::Pending,
    ];

    /// Parse a tag literal.
    pub fn parse(s: &str) -> Result<Self> {
        Self::lookup(s).ok_or_else(|| ValidationError::new(PrimitiveKind::BlockTag, s, EXPECTED))
    }

    /// Returns `true` if `s` is exactly one of the five tag literals.
    pub fn is_block_tag(s: &str) -> bool {
        Self::lookup(s).is_some()
    }

    /// The wire literal.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Earliest => "earliest",
            Self::Finalized => "finalized",
            Self::Safe => "safe",
            Self::Latest => "latest",
            Self::Pending => "pending",
        }
    }

    fn lookup(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == s)
    }
}

/// Returns `true` if `s` is a valid [`BlockTag`] literal.
pub fn is_block_tag(s: &str) -> bool {
    BlockTag::is_block_tag(s)
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BlockTag {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BlockTag {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl AsRef<str> for BlockTag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<BlockTag> for String {
    fn from(tag: BlockTag) -> Self {
        tag.as_str().to_owned()
    }
}

impl Serialize for BlockTag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlockTag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
