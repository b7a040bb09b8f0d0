//! ABI codec error types

use thiserror::Error;

/// ABI codec error type
///
/// All errors surface synchronously to the immediate caller; the codec never
/// retries or recovers internally.
#[derive(Debug, Error)]
pub enum AbiError {
    /// Types/values (or names/types) count mismatch
    #[error("arity mismatch: expected {expected} values, got {actual}")]
    ArityMismatch {
        /// Number of declared parameters
        expected: usize,
        /// Number of supplied values
        actual: usize,
    },

    /// Unknown or malformed type string
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Insufficient bytes to satisfy a declared type during decode
    #[error("truncated data: need {needed} bytes, have {have}")]
    TruncatedData {
        /// Bytes required to finish decoding
        needed: usize,
        /// Bytes actually available
        have: usize,
    },

    /// Input string is not valid hex
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded string bytes are not valid UTF-8
    #[error("invalid utf-8 in string value: {0}")]
    InvalidUtf8(String),

    /// Supplied value does not match the declared type
    #[error("type mismatch: expected {expected} value, got {actual}")]
    TypeMismatch {
        /// Declared parameter type
        expected: String,
        /// Kind of the supplied value
        actual: String,
    },

    /// Interface description JSON could not be parsed
    #[error("interface parse error: {0}")]
    InterfaceParse(String),
}

impl From<hex::FromHexError> for AbiError {
    fn from(e: hex::FromHexError) -> Self {
        AbiError::InvalidHex(e.to_string())
    }
}

impl From<serde_json::Error> for AbiError {
    fn from(e: serde_json::Error) -> Self {
        AbiError::InterfaceParse(e.to_string())
    }
}
