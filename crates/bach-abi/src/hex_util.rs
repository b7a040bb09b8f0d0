//! Hex string helpers for the codec surface
//!
//! The wire representation is lowercase hex, `0x`-prefixed by default.

use crate::error::AbiError;

/// Encode bytes as lowercase hex with 0x prefix
pub fn to_hex(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Encode bytes as lowercase hex without prefix
pub fn to_hex_no_prefix(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode a hex string, with or without 0x prefix
pub fn from_hex(s: &str) -> Result<Vec<u8>, AbiError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    Ok(hex::decode(s)?)
}
