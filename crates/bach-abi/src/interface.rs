//! Call and event facade: selector derivation, method encode/decode, and
//! event/log decoding

use std::collections::HashMap;

use bach_primitives::H256;
use tracing::debug;

use crate::decode::{decode_params, decode_tokens, decode_topic_word};
use crate::descriptor::{AbiItem, EventDescriptor, LogEntry, MethodDescriptor, Param};
use crate::encode::encode_params;
use crate::error::AbiError;
use crate::registry;
use crate::result::DecodedParams;
use crate::types::{ParamType, Token};

/// Canonical signature string: `name(type1,type2,...)`, no spaces, no names
fn canonical_signature(name: &str, inputs: &[Param]) -> String {
    let types: Vec<&str> = inputs.iter().map(|p| p.kind.as_str()).collect();
    format!("{}({})", name, types.join(","))
}

/// Raw 4-byte call selector for a method
pub fn method_selector(method: &MethodDescriptor) -> [u8; 4] {
    let hash = bach_crypto::keccak256(canonical_signature(&method.name, &method.inputs).as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash.as_bytes()[..4]);
    selector
}

/// 4-byte call selector for a method, hex-encoded with 0x prefix
pub fn encode_signature(method: &MethodDescriptor) -> String {
    format!("0x{}", hex::encode(method_selector(method)))
}

/// 32-byte topic identifier for an event
pub fn event_topic(event: &EventDescriptor) -> H256 {
    bach_crypto::keccak256(canonical_signature(&event.name, &event.inputs).as_bytes())
}

/// Topic identifier for an event, hex-encoded with 0x prefix
pub fn event_signature(event: &EventDescriptor) -> String {
    event_topic(event).to_hex()
}

fn encode_call(name: &str, inputs: &[Param], values: &[Token]) -> Result<String, AbiError> {
    let types: Vec<&str> = inputs.iter().map(|p| p.kind.as_str()).collect();
    let params = encode_params(&types, values, true)?;
    let hash = bach_crypto::keccak256(canonical_signature(name, inputs).as_bytes());
    Ok(format!("0x{}{}", hex::encode(&hash.as_bytes()[..4]), params))
}

/// Encode a method call: selector followed by the encoded inputs
///
/// Values are supplied positionally, matching the declared input order.
pub fn encode_method(method: &MethodDescriptor, values: &[Token]) -> Result<String, AbiError> {
    encode_call(&method.name, &method.inputs, values)
}

/// Decode call-result bytes (hex) against a method's outputs
///
/// Call results carry no selector, only the encoded output values.
pub fn decode_method(method: &MethodDescriptor, data: &str) -> Result<DecodedParams, AbiError> {
    let bytes = crate::hex_util::from_hex(data)?;
    let names: Vec<&str> = method.outputs.iter().map(|p| p.name.as_str()).collect();
    let types: Vec<&str> = method.outputs.iter().map(|p| p.kind.as_str()).collect();
    decode_params(Some(&names), &types, &bytes, true)
}

/// Encode an event's inputs as call data, selector-prefixed
///
/// Producer-side helper with the same mechanics as [`encode_method`].
pub fn encode_event(event: &EventDescriptor, values: &[Token]) -> Result<String, AbiError> {
    encode_call(&event.name, &event.inputs, values)
}

/// Decode a log's data and topics against an event descriptor
///
/// Non-indexed inputs decode from `data` via the head/tail walk; each
/// indexed input decodes from its topic word. Indexed dynamic values are
/// stored as their keccak hash, so they surface as 32 raw bytes rather than
/// the original value.
pub fn decode_event(
    event: &EventDescriptor,
    data: &[u8],
    topics: &[H256],
    use_numbered_params: bool,
) -> Result<DecodedParams, AbiError> {
    let data_types = event
        .inputs
        .iter()
        .filter(|p| !p.indexed)
        .map(|p| registry::resolve(&p.kind))
        .collect::<Result<Vec<ParamType>, _>>()?;
    let mut data_values = decode_tokens(&data_types, data)?.into_iter();

    let topic_offset = usize::from(!event.anonymous);

    let mut values = DecodedParams::with_len(event.inputs.len());
    values.set_numbered(use_numbered_params);

    let mut indexed_seen = 0;
    for (index, input) in event.inputs.iter().enumerate() {
        let token = if input.indexed {
            let topic = topics.get(indexed_seen + topic_offset).ok_or_else(|| {
                AbiError::TruncatedData {
                    needed: (indexed_seen + topic_offset + 1) * 32,
                    have: topics.len() * 32,
                }
            })?;
            indexed_seen += 1;
            let param_type = registry::resolve(&input.kind)?;
            decode_topic_word(&param_type, topic.as_bytes())?
        } else {
            // Arity matches the filter above by construction
            data_values.next().ok_or(AbiError::ArityMismatch {
                expected: event.inputs.len(),
                actual: index,
            })?
        };
        let name = (!input.name.is_empty()).then_some(input.name.as_str());
        values.insert(index, name, token);
    }

    values.set_event_type(&event.name);
    Ok(values)
}

/// Decode one log entry against one event descriptor
///
/// Returns `Ok(None)` when `topics[0]` does not carry this event's topic
/// identifier; a non-match is a normal outcome, not an error.
pub fn decode_log_item(
    event: &EventDescriptor,
    log: &LogEntry,
    use_numbered_params: bool,
) -> Result<Option<DecodedParams>, AbiError> {
    match log.topics.first() {
        Some(first) if *first == event_topic(event) => {
            decode_event(event, &log.data, &log.topics, use_numbered_params).map(Some)
        }
        _ => Ok(None),
    }
}

/// Reusable decoder over every event of a contract interface
///
/// Built once from a full interface description; maps any sequence of log
/// entries to the subsequence that decodes against a known event.
pub struct LogDecoder {
    events: HashMap<H256, EventDescriptor>,
    use_numbered_params: bool,
}

impl LogDecoder {
    /// Build a topic-identifier map from the `event` entries of an interface
    pub fn new(abi: &[AbiItem], use_numbered_params: bool) -> Self {
        let mut events = HashMap::new();
        for event in abi.iter().filter_map(AbiItem::as_event) {
            events.insert(event_topic(&event), event);
        }
        Self {
            events,
            use_numbered_params,
        }
    }

    /// Decode the log entries that match a known event, preserving order and
    /// silently dropping non-matches
    pub fn decode_logs(&self, logs: &[LogEntry]) -> Vec<DecodedParams> {
        logs.iter()
            .filter_map(|log| {
                let event = self.events.get(log.topics.first()?)?;
                match decode_event(event, &log.data, &log.topics, self.use_numbered_params) {
                    Ok(decoded) => Some(decoded),
                    Err(e) => {
                        debug!(event = %event.name, error = %e, "dropping undecodable log");
                        None
                    }
                }
            })
            .collect()
    }
}
