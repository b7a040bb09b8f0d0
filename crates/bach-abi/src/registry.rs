//! Type string resolution with a process-wide memoized registry

use std::sync::OnceLock;

use dashmap::DashMap;

use crate::error::AbiError;
use crate::types::ParamType;

static REGISTRY: OnceLock<DashMap<String, ParamType>> = OnceLock::new();

fn cache() -> &'static DashMap<String, ParamType> {
    REGISTRY.get_or_init(DashMap::new)
}

/// Resolve a type string (e.g. `uint256`, `bytes32`, `uint256[]`) into its
/// coder description
///
/// Results are memoized process-wide. Population is idempotent, so a race on
/// first insert is harmless: both writers store equal values.
pub fn resolve(type_str: &str) -> Result<ParamType, AbiError> {
    if let Some(found) = cache().get(type_str) {
        return Ok(found.value().clone());
    }
    let parsed = parse_type(type_str)?;
    cache().insert(type_str.to_string(), parsed.clone());
    Ok(parsed)
}

/// Parse a type string without touching the cache
pub fn parse_type(s: &str) -> Result<ParamType, AbiError> {
    let s = s.trim();

    // Array suffixes bind outermost-last: uint256[2][] is a variable-length
    // array whose elements are uint256[2].
    if let Some(stripped) = s.strip_suffix(']') {
        let open = stripped
            .rfind('[')
            .ok_or_else(|| AbiError::UnsupportedType(s.to_string()))?;
        let element = parse_type(&stripped[..open])?;
        let len_part = &stripped[open + 1..];
        return if len_part.is_empty() {
            Ok(ParamType::Array(Box::new(element)))
        } else {
            let len: usize = len_part
                .parse()
                .map_err(|_| AbiError::UnsupportedType(s.to_string()))?;
            Ok(ParamType::FixedArray(Box::new(element), len))
        };
    }

    match s {
        "address" => return Ok(ParamType::Address),
        "bool" => return Ok(ParamType::Bool),
        "string" => return Ok(ParamType::String),
        "bytes" => return Ok(ParamType::Bytes),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("uint") {
        return Ok(ParamType::Uint(parse_bit_width(s, rest)?));
    }
    if let Some(rest) = s.strip_prefix("int") {
        return Ok(ParamType::Int(parse_bit_width(s, rest)?));
    }
    if let Some(rest) = s.strip_prefix("bytes") {
        let width: usize = rest
            .parse()
            .map_err(|_| AbiError::UnsupportedType(s.to_string()))?;
        if width == 0 || width > 32 {
            return Err(AbiError::UnsupportedType(s.to_string()));
        }
        return Ok(ParamType::FixedBytes(width));
    }

    Err(AbiError::UnsupportedType(s.to_string()))
}

fn parse_bit_width(full: &str, suffix: &str) -> Result<usize, AbiError> {
    if suffix.is_empty() {
        return Ok(256);
    }
    let bits: usize = suffix
        .parse()
        .map_err(|_| AbiError::UnsupportedType(full.to_string()))?;
    if bits == 0 || bits > 256 || bits % 8 != 0 {
        return Err(AbiError::UnsupportedType(full.to_string()));
    }
    Ok(bits)
}
