//! JSON-RPC error codes and the wire error object.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::error::ValidationError;

/// Standard JSON-RPC 2.0 error codes plus the Ethereum execution API
/// extensions in the `-32000..=-32006` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JsonRpcErrorCode {
    /// Invalid JSON was received.
    ParseError,
    /// The JSON sent is not a valid request object.
    InvalidRequest,
    /// The method does not exist or is not available.
    MethodNotFound,
    /// Invalid method parameters.
    InvalidParams,
    /// Internal JSON-RPC error.
    InternalError,
    /// Missing or invalid parameters.
    InvalidInput,
    /// Requested resource not found.
    ResourceNotFound,
    /// Requested resource not available.
    ResourceUnavailable,
    /// Transaction creation failed.
    TransactionRejected,
    /// Method is not implemented.
    MethodNotSupported,
    /// Request exceeds a defined limit.
    LimitExceeded,
    /// Version of the JSON-RPC protocol is not supported.
    VersionNotSupported,
}

impl JsonRpcErrorCode {
    /// Every known code, in ascending order of magnitude.
    pub const ALL: [Self; 12] = [
        Self::InvalidInput,
        Self::ResourceNotFound,
        Self::ResourceUnavailable,
        Self::TransactionRejected,
        Self::MethodNotSupported,
        Self::LimitExceeded,
        Self::VersionNotSupported,
        Self::InvalidRequest,
        Self::MethodNotFound,
        Self::InvalidParams,
        Self::InternalError,
        Self::ParseError,
    ];

    /// The numeric wire value.
    pub const fn code(self) -> i64 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
            Self::InvalidInput => -32000,
            Self::ResourceNotFound => -32001,
            Self::ResourceUnavailable => -32002,
            Self::TransactionRejected => -32003,
            Self::MethodNotSupported => -32004,
            Self::LimitExceeded => -32005,
            Self::VersionNotSupported => -32006,
        }
    }

    /// Look up a code by its numeric value.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Short human-readable meaning.
    pub fn message(self) -> &'static str {
        match self {
            Self::ParseError => "Parse error",
            Self::InvalidRequest => "Invalid request",
            Self::MethodNotFound => "Method not found",
            Self::InvalidParams => "Invalid params",
            Self::InternalError => "Internal error",
            Self::InvalidInput => "Invalid input",
            Self::ResourceNotFound => "Resource not found",
            Self::ResourceUnavailable => "Resource unavailable",
            Self::TransactionRejected => "Transaction rejected",
            Self::MethodNotSupported => "Method not supported",
            Self::LimitExceeded => "Limit exceeded",
            Self::VersionNotSupported => "JSON-RPC version not supported",
        }
    }
}

impl fmt::Display for JsonRpcErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl From<JsonRpcErrorCode> for i64 {
    fn from(code: JsonRpcErrorCode) -> Self {
        code.code()
    }
}

impl Serialize for JsonRpcErrorCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for JsonRpcErrorCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = i64::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown JSON-RPC error code: {code}")))
    }
}

/// A JSON-RPC error object: `{"code": -32602, "message": "..."}`.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("JSON-RPC error {}: {message}", .code.code())]
pub struct JsonRpcError {
    pub code: JsonRpcErrorCode,
    pub message: String,
}

impl JsonRpcError {
    /// Create an error with an explicit message.
    pub fn new(code: JsonRpcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<JsonRpcErrorCode> for JsonRpcError {
    fn from(code: JsonRpcErrorCode) -> Self {
        Self::new(code, code.message())
    }
}

impl From<ValidationError> for JsonRpcError {
    fn from(err: ValidationError) -> Self {
        Self::new(err.rpc_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_codes() {
        assert_eq!(JsonRpcErrorCode::ParseError.code(), -32700);
        assert_eq!(JsonRpcErrorCode::InvalidRequest.code(), -32600);
        assert_eq!(JsonRpcErrorCode::MethodNotFound.code(), -32601);
        assert_eq!(JsonRpcErrorCode::InvalidParams.code(), -32602);
        assert_eq!(JsonRpcErrorCode::InternalError.code(), -32603);
    }

    #[test]
    fn from_code_covers_every_variant() {
        for code in JsonRpcErrorCode::ALL {
            assert_eq!(JsonRpcErrorCode::from_code(code.code()), Some(code));
        }
        assert_eq!(JsonRpcErrorCode::from_code(-32007), None);
        assert_eq!(JsonRpcErrorCode::from_code(0), None);
    }

    #[test]
    fn display_format() {
        assert_eq!(JsonRpcErrorCode::LimitExceeded.to_string(), "Limit exceeded (-32005)");
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&JsonRpcErrorCode::InvalidParams).unwrap();
        assert_eq!(json, "-32602");
        let parsed: JsonRpcErrorCode = serde_json::from_str("-32001").unwrap();
        assert_eq!(parsed, JsonRpcErrorCode::ResourceNotFound);
    }

    #[test]
    fn error_object_json_shape() {
        let err = JsonRpcError::new(JsonRpcErrorCode::ResourceNotFound, "block not found");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"code":-32001,"message":"block not found"}"#);

        let parsed: JsonRpcError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, err);
        assert_eq!(err.to_string(), "JSON-RPC error -32001: block not found");
    }

    #[test]
    fn error_object_rejects_unknown_code() {
        let json = r#"{"code":7,"message":"nope"}"#;
        assert!(serde_json::from_str::<JsonRpcError>(json).is_err());
    }

    #[test]
    fn error_object_from_code_uses_default_message() {
        let err = JsonRpcError::from(JsonRpcErrorCode::MethodNotFound);
        assert_eq!(err.message, "Method not found");
    }

    #[test]
    fn validation_error_becomes_invalid_params() {
        let validation = crate::Quantity::parse("0x01").unwrap_err();
        let err = JsonRpcError::from(validation.clone());
        assert_eq!(err.code, JsonRpcErrorCode::InvalidParams);
        assert_eq!(err.message, validation.to_string());

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], -32602);
        assert!(json["message"].as_str().unwrap().contains("invalid quantity"));
    }

    #[test]
    fn rejects_unknown_code() {
        assert!(serde_json::from_str::<JsonRpcErrorCode>("-1").is_err());
        assert!(serde_json::from_str::<JsonRpcErrorCode>("\"-32602\"").is_err());
    }
}
