//! Validation error shared by every primitive.

use std::fmt;

use thiserror::Error;

use crate::codes::JsonRpcErrorCode;

/// The primitive whose grammar rejected an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Hash,
    Address,
    Quantity,
    BlockTag,
    BlockSpecifier,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash => write!(f, "hash"),
            Self::Address => write!(f, "address"),
            Self::Quantity => write!(f, "quantity"),
            Self::BlockTag => write!(f, "block tag"),
            Self::BlockSpecifier => write!(f, "block specifier"),
        }
    }
}

/// An input string failed the pattern of the primitive it was parsed as.
///
/// This is the only error the crate produces. It carries the rejected input
/// verbatim together with a description of the format that was expected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid {kind}: expected {expected}, got {input:?}")]
pub struct ValidationError {
    kind: PrimitiveKind,
    input: String,
    expected: &'static str,
}

impl ValidationError {
    pub(crate) fn new(
        kind: PrimitiveKind,
        input: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self {
            kind,
            input: input.into(),
            expected,
        }
    }

    /// Which primitive rejected the input.
    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// The rejected input, exactly as supplied.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Human-readable description of the accepted format.
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// JSON-RPC error code a server should answer with when a request
    /// parameter fails validation.
    pub fn rpc_code(&self) -> JsonRpcErrorCode {
        JsonRpcErrorCode::InvalidParams
    }
}

/// Convenience type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_expected_and_input() {
        let err = ValidationError::new(PrimitiveKind::Quantity, "0x01", "canonical hex");
        assert_eq!(
            err.to_string(),
            "invalid quantity: expected canonical hex, got \"0x01\""
        );
    }

    #[test]
    fn accessors() {
        let err = ValidationError::new(PrimitiveKind::BlockTag, "Latest", "one of the tags");
        assert_eq!(err.kind(), PrimitiveKind::BlockTag);
        assert_eq!(err.input(), "Latest");
        assert_eq!(err.expected(), "one of the tags");
    }

    #[test]
    fn maps_to_invalid_params() {
        let err = ValidationError::new(PrimitiveKind::Hash, "", "");
        assert_eq!(err.rpc_code().code(), -32602);
    }

    #[test]
    fn kind_display() {
        assert_eq!(PrimitiveKind::Hash.to_string(), "hash");
        assert_eq!(PrimitiveKind::BlockTag.to_string(), "block tag");
        assert_eq!(PrimitiveKind::BlockSpecifier.to_string(), "block specifier");
    }
}
