//! ABI decoding: region-relative head/tail walk and the parameter decoder

use bach_primitives::{Address, U256};

use crate::error::AbiError;
use crate::registry;
use crate::result::DecodedParams;
use crate::types::{I256, ParamType, Token};

/// Decode values by type strings into a result container
///
/// `names` is optional; when present it must match `types` in length, and
/// each non-empty name becomes an alias for the value at that position.
/// With `use_numbered_params` unset the result is addressable by name only.
pub fn decode_params(
    names: Option<&[&str]>,
    types: &[&str],
    data: &[u8],
    use_numbered_params: bool,
) -> Result<DecodedParams, AbiError> {
    let mut values = DecodedParams::with_len(types.len());
    values.set_numbered(use_numbered_params);
    decode_params_into(names, types, data, &mut values)?;
    Ok(values)
}

/// Decode values by type strings from a hex string
pub fn decode_params_hex(
    names: Option<&[&str]>,
    types: &[&str],
    data: &str,
    use_numbered_params: bool,
) -> Result<DecodedParams, AbiError> {
    let bytes = crate::hex_util::from_hex(data)?;
    decode_params(names, types, &bytes, use_numbered_params)
}

/// Decode into an existing result container
pub fn decode_params_into(
    names: Option<&[&str]>,
    types: &[&str],
    data: &[u8],
    values: &mut DecodedParams,
) -> Result<(), AbiError> {
    if let Some(names) = names {
        if names.len() != types.len() {
            return Err(AbiError::ArityMismatch {
                expected: types.len(),
                actual: names.len(),
            });
        }
    }

    let resolved = types
        .iter()
        .map(|t| registry::resolve(t))
        .collect::<Result<Vec<_>, _>>()?;
    let tokens = decode_tokens(&resolved, data)?;

    for (index, token) in tokens.into_iter().enumerate() {
        let name = names
            .and_then(|n| n.get(index).copied())
            .filter(|n| !n.is_empty());
        values.insert(index, name, token);
    }
    Ok(())
}

/// Decode resolved types from a raw buffer into tokens
pub fn decode_tokens(types: &[ParamType], data: &[u8]) -> Result<Vec<Token>, AbiError> {
    let mut offset = 0;
    let mut tokens = Vec::with_capacity(types.len());

    for param_type in types {
        let (token, consumed) = decode_head(param_type, data, offset)?;
        tokens.push(token);
        offset += consumed;
    }

    Ok(tokens)
}

/// Decode one head slot at `offset` within the region `data`
///
/// A dynamic type consumes one offset word from the head and reads its body
/// at the pointed-to position, relative to the start of the region. A static
/// type decodes in place and reports how far the head cursor advances.
fn decode_head(
    param_type: &ParamType,
    data: &[u8],
    offset: usize,
) -> Result<(Token, usize), AbiError> {
    if param_type.is_dynamic() {
        let body_offset = read_pointer_word(data, offset)?;
        let token = decode_body(param_type, data, body_offset)?;
        Ok((token, 32))
    } else {
        decode_static(param_type, data, offset)
    }
}

/// Decode a static type at `offset`, returning the value and bytes consumed
fn decode_static(
    param_type: &ParamType,
    data: &[u8],
    offset: usize,
) -> Result<(Token, usize), AbiError> {
    match param_type {
        ParamType::Address => {
            let word = read_word(data, offset)?;
            let mut addr_bytes = [0u8; 20];
            addr_bytes.copy_from_slice(&word[12..32]);
            Ok((Token::Address(Address::from_bytes(addr_bytes)), 32))
        }
        ParamType::Uint(bits) => {
            let word = read_word(data, offset)?;
            let mut value = U256::from_big_endian(&word);
            if *bits < 256 {
                value = value & width_mask(*bits);
            }
            Ok((Token::Uint(value), 32))
        }
        ParamType::Int(bits) => {
            let word = read_word(data, offset)?;
            Ok((Token::Int(decode_int(&word, *bits)), 32))
        }
        ParamType::Bool => {
            let word = read_word(data, offset)?;
            // Any nonzero word reads as true
            let value = word.iter().any(|b| *b != 0);
            Ok((Token::Bool(value), 32))
        }
        ParamType::FixedBytes(width) => {
            let word = read_word(data, offset)?;
            Ok((Token::FixedBytes(word[..*width].to_vec()), 32))
        }
        ParamType::FixedArray(inner, len) => {
            // All elements static here; a dynamic element would have routed
            // through decode_body.
            let mut tokens = Vec::with_capacity(*len);
            let mut cursor = offset;
            for _ in 0..*len {
                let (token, consumed) = decode_static(inner, data, cursor)?;
                tokens.push(token);
                cursor += consumed;
            }
            Ok((Token::FixedArray(tokens), cursor - offset))
        }
        ParamType::Bytes | ParamType::String | ParamType::Array(_) => {
            unreachable!("dynamic types decode through decode_body")
        }
    }
}

/// Decode a dynamic type's body at `at`, relative to the region `region`
fn decode_body(param_type: &ParamType, region: &[u8], at: usize) -> Result<Token, AbiError> {
    match param_type {
        ParamType::Bytes => {
            let bytes = read_length_prefixed(region, at)?;
            Ok(Token::Bytes(bytes))
        }
        ParamType::String => {
            let bytes = read_length_prefixed(region, at)?;
            let s = String::from_utf8(bytes).map_err(|e| AbiError::InvalidUtf8(e.to_string()))?;
            Ok(Token::String(s))
        }
        ParamType::Array(inner) => {
            let len = read_pointer_word(region, at)?;
            // Element offsets are relative to the array's own data region,
            // which starts immediately after the length word.
            let elements = &region[at + 32..];
            let mut tokens = Vec::with_capacity(len);
            let mut cursor = 0;
            for _ in 0..len {
                let (token, consumed) = decode_head(inner, elements, cursor)?;
                tokens.push(token);
                cursor += consumed;
            }
            Ok(Token::Array(tokens))
        }
        ParamType::FixedArray(inner, len) => {
            // Dynamic element type; no length word, the body is its own region
            let elements = &region[at..];
            let mut tokens = Vec::with_capacity(*len);
            let mut cursor = 0;
            for _ in 0..*len {
                let (token, consumed) = decode_head(inner, elements, cursor)?;
                tokens.push(token);
                cursor += consumed;
            }
            Ok(Token::FixedArray(tokens))
        }
        _ => unreachable!("static types decode through decode_static"),
    }
}

/// Decode a single 32-byte word as `param_type`
///
/// Used for event topics, where every indexed value occupies exactly one
/// word. An indexed value that does not fit in a word, dynamic or a static
/// array wider than 32 bytes, is stored as its keccak hash; the raw word is
/// surfaced as fixed bytes rather than decoded.
pub(crate) fn decode_topic_word(param_type: &ParamType, word: &[u8; 32]) -> Result<Token, AbiError> {
    if param_type.is_dynamic() || static_word_count(param_type) > 1 {
        return Ok(Token::FixedBytes(word.to_vec()));
    }
    let (token, _) = decode_static(param_type, word, 0)?;
    Ok(token)
}

/// Head words a static type occupies; only fixed arrays take more than one
fn static_word_count(param_type: &ParamType) -> usize {
    match param_type {
        ParamType::FixedArray(inner, len) => len * static_word_count(inner),
        _ => 1,
    }
}

/// Sign-extending two's complement decode within the declared bit width
fn decode_int(word: &[u8; 32], bits: usize) -> I256 {
    let mut value = U256::from_big_endian(word);
    if bits < 256 {
        value = value & width_mask(bits);
    }
    let negative = value.bit(bits - 1);
    if !negative {
        return I256::new(value, false);
    }
    let flipped = !value;
    let abs = if bits < 256 {
        (flipped & width_mask(bits)) + 1
    } else {
        flipped.overflowing_add(U256::one()).0
    };
    I256::new(abs, true)
}

fn width_mask(bits: usize) -> U256 {
    (U256::one() << bits) - 1
}

/// Read `[length][raw bytes][padding]` at `at` within `region`
fn read_length_prefixed(region: &[u8], at: usize) -> Result<Vec<u8>, AbiError> {
    let len = read_pointer_word(region, at)?;
    check_length(region, at + 32 + len)?;
    Ok(region[at + 32..at + 32 + len].to_vec())
}

/// Read a 32-byte word as an offset or length
///
/// A value larger than the region can never be satisfied, so it is rejected
/// up front instead of overflowing the cursor arithmetic.
fn read_pointer_word(data: &[u8], at: usize) -> Result<usize, AbiError> {
    let word = read_word(data, at)?;
    let value = U256::from_big_endian(&word);
    if value > U256::from(data.len()) {
        return Err(AbiError::TruncatedData {
            needed: value.low_u64() as usize,
            have: data.len(),
        });
    }
    Ok(value.as_usize())
}

fn read_word(data: &[u8], at: usize) -> Result<[u8; 32], AbiError> {
    check_length(data, at + 32)?;
    let mut word = [0u8; 32];
    word.copy_from_slice(&data[at..at + 32]);
    Ok(word)
}

fn check_length(data: &[u8], required: usize) -> Result<(), AbiError> {
    if data.len() < required {
        return Err(AbiError::TruncatedData {
            needed: required,
            have: data.len(),
        });
    }
    Ok(())
}
