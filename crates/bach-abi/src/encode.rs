//! ABI encoding: per-type word encoding and the head/tail parameter layout

use bach_primitives::U256;

use crate::error::AbiError;
use crate::hex_util;
use crate::registry;
use crate::types::{ParamType, Token};

/// Round a byte length up to the next 32-byte word boundary
pub(crate) fn align32(len: usize) -> usize {
    len.div_ceil(32) * 32
}

/// Encode values against type strings, producing a hex string
///
/// Fails with [`AbiError::ArityMismatch`] when the two lists differ in
/// length, and with [`AbiError::UnsupportedType`] for unknown type strings.
pub fn encode_params(
    types: &[&str],
    values: &[Token],
    no_hex_prefix: bool,
) -> Result<String, AbiError> {
    let resolved = types
        .iter()
        .map(|t| registry::resolve(t))
        .collect::<Result<Vec<_>, _>>()?;
    let data = encode_tokens(&resolved, values)?;
    if no_hex_prefix {
        Ok(hex_util::to_hex_no_prefix(&data))
    } else {
        Ok(hex_util::to_hex(&data))
    }
}

/// Encode resolved types and tokens into the raw head/tail buffer
///
/// Static parameters occupy their slot in the head directly; dynamic
/// parameters leave a 32-byte offset word in the head and append their body
/// to the tail. Offsets are relative to the start of the returned buffer.
pub fn encode_tokens(types: &[ParamType], tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    if types.len() != tokens.len() {
        return Err(AbiError::ArityMismatch {
            expected: types.len(),
            actual: tokens.len(),
        });
    }

    let mut chunks = Vec::with_capacity(types.len());
    for (param_type, token) in types.iter().zip(tokens.iter()) {
        chunks.push((param_type.is_dynamic(), encode_token(param_type, token)?));
    }

    let mut static_size = 0;
    let mut dynamic_size = 0;
    for (dynamic, bytes) in &chunks {
        if *dynamic {
            static_size += 32;
            dynamic_size += align32(bytes.len());
        } else {
            static_size += align32(bytes.len());
        }
    }

    let mut data = vec![0u8; static_size + dynamic_size];
    let mut offset = 0;
    let mut dynamic_offset = static_size;

    for (dynamic, bytes) in &chunks {
        if *dynamic {
            data[offset..offset + 32].copy_from_slice(&u256_word(&U256::from(dynamic_offset)));
            offset += 32;
            data[dynamic_offset..dynamic_offset + bytes.len()].copy_from_slice(bytes);
            dynamic_offset += align32(bytes.len());
        } else {
            data[offset..offset + bytes.len()].copy_from_slice(bytes);
            offset += align32(bytes.len());
        }
    }

    Ok(data)
}

/// Encode a single token into its body bytes (no head slot, no offset word)
fn encode_token(param_type: &ParamType, token: &Token) -> Result<Vec<u8>, AbiError> {
    match (param_type, token) {
        (ParamType::Address, Token::Address(addr)) => {
            let mut buf = [0u8; 32];
            buf[12..32].copy_from_slice(addr.as_bytes());
            Ok(buf.to_vec())
        }
        // Declared width affects only decode-time masking; encode always
        // writes the full word.
        (ParamType::Uint(_), Token::Uint(value)) => Ok(u256_word(value).to_vec()),
        (ParamType::Int(_), Token::Int(value)) => {
            if value.negative && !value.abs.is_zero() {
                Ok(twos_complement(&value.abs).to_vec())
            } else {
                Ok(u256_word(&value.abs).to_vec())
            }
        }
        (ParamType::Bool, Token::Bool(b)) => {
            let mut buf = [0u8; 32];
            buf[31] = u8::from(*b);
            Ok(buf.to_vec())
        }
        (ParamType::FixedBytes(width), Token::FixedBytes(data)) => {
            // Left-aligned, zero-padded to one word
            let mut buf = [0u8; 32];
            let len = data.len().min(*width);
            buf[..len].copy_from_slice(&data[..len]);
            Ok(buf.to_vec())
        }
        (ParamType::Bytes, Token::Bytes(data)) => Ok(encode_length_prefixed(data)),
        (ParamType::String, Token::String(s)) => Ok(encode_length_prefixed(s.as_bytes())),
        (ParamType::Array(inner), Token::Array(tokens)) => {
            // Length word, then the array body laid out as its own
            // parameter list with tail offsets relative to the body start.
            let mut result = u256_word(&U256::from(tokens.len())).to_vec();
            let inner_types = vec![(**inner).clone(); tokens.len()];
            result.extend(encode_tokens(&inner_types, tokens)?);
            Ok(result)
        }
        (ParamType::FixedArray(inner, len), Token::FixedArray(tokens)) => {
            if tokens.len() != *len {
                return Err(AbiError::ArityMismatch {
                    expected: *len,
                    actual: tokens.len(),
                });
            }
            let inner_types = vec![(**inner).clone(); tokens.len()];
            encode_tokens(&inner_types, tokens)
        }
        (param_type, token) => Err(AbiError::TypeMismatch {
            expected: format!("{:?}", param_type),
            actual: token.kind().to_string(),
        }),
    }
}

/// Encode dynamic bytes: length word, raw bytes, zero-pad to a word boundary
fn encode_length_prefixed(data: &[u8]) -> Vec<u8> {
    let mut result = u256_word(&U256::from(data.len())).to_vec();
    let mut padded = vec![0u8; align32(data.len())];
    padded[..data.len()].copy_from_slice(data);
    result.extend(padded);
    result
}

/// Convert U256 to a 32-byte big-endian word
pub(crate) fn u256_word(value: &U256) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    bytes
}

/// Two's complement of a non-zero absolute value
fn twos_complement(abs: &U256) -> [u8; 32] {
    let abs_bytes = u256_word(abs);
    let mut bytes = [0u8; 32];
    for i in 0..32 {
        bytes[i] = !abs_bytes[i];
    }
    let mut carry = 1u16;
    for i in (0..32).rev() {
        let sum = (bytes[i] as u16) + carry;
        bytes[i] = sum as u8;
        carry = sum >> 8;
    }
    bytes
}
