//! # bach-abi
//!
//! Solidity contract ABI encoding and decoding for BachLedger.
//!
//! Implements the canonical contract-call wire format: a fixed-word
//! head/tail layout where static values occupy their slot directly and
//! dynamic values are reached through 32-byte offset words. On top of the
//! layout engine sit selector/topic derivation and the call/event facade.
//!
//! - **encode_params / decode_params**: the parameter layout engine
//! - **encode_method / decode_method**: selector-prefixed call data
//! - **decode_event / LogDecoder**: log topic/data splitting for events
//!
//! # Example
//!
//! ```rust
//! use bach_abi::{decode_params, encode_params, Token};
//! use bach_primitives::{Address, U256};
//!
//! let types = ["uint256", "address"];
//! let values = [
//!     Token::Uint(U256::from(1)),
//!     Token::Address(Address::ZERO),
//! ];
//!
//! let encoded = encode_params(&types, &values, false).unwrap();
//! assert!(encoded.starts_with("0x"));
//!
//! let bytes = bach_abi::hex_util::from_hex(&encoded).unwrap();
//! let decoded = decode_params(None, &types, &bytes, true).unwrap();
//! assert_eq!(decoded.get(0), Some(&Token::Uint(U256::from(1))));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decode;
mod descriptor;
mod encode;
mod error;
pub mod hex_util;
mod interface;
mod registry;
mod result;
mod types;

pub use decode::{decode_params, decode_params_hex, decode_params_into, decode_tokens};
pub use descriptor::{
    AbiItem, EventDescriptor, LogEntry, MethodDescriptor, Param, parse_interface,
};
pub use encode::{encode_params, encode_tokens};
pub use error::AbiError;
pub use interface::{
    LogDecoder, decode_event, decode_log_item, decode_method, encode_event, encode_method,
    encode_signature, event_signature, event_topic, method_selector,
};
pub use registry::{parse_type, resolve};
pub use result::DecodedParams;
pub use types::{I256, ParamType, Token};
