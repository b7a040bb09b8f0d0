//! Interface description metadata: methods, events, and log entries
//!
//! These types are constructed once from contract interface metadata (or
//! deserialized from the standard JSON ABI form) and never mutated by the
//! codec.

use bach_primitives::H256;
use serde::Deserialize;

use crate::error::AbiError;

/// One parameter of a method or event
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Param {
    /// Parameter name; may be empty for unnamed outputs
    #[serde(default)]
    pub name: String,
    /// Canonical type string, e.g. `uint256` or `address[2]`
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether an event parameter is stored in the log topics
    #[serde(default)]
    pub indexed: bool,
}

impl Param {
    /// Create an unnamed, non-indexed parameter
    pub fn of_type(kind: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            kind: kind.into(),
            indexed: false,
        }
    }

    /// Create a named, non-indexed parameter
    pub fn named(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            indexed: false,
        }
    }

    /// Create a named, indexed event parameter
    pub fn indexed(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            indexed: true,
        }
    }
}

/// Method descriptor (a `function` entry of a contract interface)
#[derive(Debug, Clone, Deserialize)]
pub struct MethodDescriptor {
    /// Method name
    pub name: String,
    /// Ordered input parameters
    #[serde(default)]
    pub inputs: Vec<Param>,
    /// Ordered output parameters
    #[serde(default)]
    pub outputs: Vec<Param>,
}

/// Event descriptor (an `event` entry of a contract interface)
#[derive(Debug, Clone, Deserialize)]
pub struct EventDescriptor {
    /// Event name
    pub name: String,
    /// Ordered input parameters, indexed and non-indexed interleaved
    #[serde(default)]
    pub inputs: Vec<Param>,
    /// Anonymous events carry no topic identifier in topics[0]
    #[serde(default)]
    pub anonymous: bool,
}

/// One entry of a JSON contract interface
#[derive(Debug, Clone, Deserialize)]
pub struct AbiItem {
    /// Entry kind: `function`, `event`, `constructor`, ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Entry name; absent for constructors and fallbacks
    #[serde(default)]
    pub name: String,
    /// Input parameters
    #[serde(default)]
    pub inputs: Vec<Param>,
    /// Output parameters (functions only)
    #[serde(default)]
    pub outputs: Vec<Param>,
    /// Anonymous flag (events only)
    #[serde(default)]
    pub anonymous: bool,
}

impl AbiItem {
    /// Check if this entry describes an event
    pub fn is_event(&self) -> bool {
        self.kind == "event"
    }

    /// View this entry as an event descriptor
    pub fn as_event(&self) -> Option<EventDescriptor> {
        self.is_event().then(|| EventDescriptor {
            name: self.name.clone(),
            inputs: self.inputs.clone(),
            anonymous: self.anonymous,
        })
    }

    /// View this entry as a method descriptor
    pub fn as_method(&self) -> Option<MethodDescriptor> {
        (self.kind == "function").then(|| MethodDescriptor {
            name: self.name.clone(),
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
        })
    }
}

/// Parse a JSON contract interface into its entries
pub fn parse_interface(json: &str) -> Result<Vec<AbiItem>, AbiError> {
    Ok(serde_json::from_str(json)?)
}

/// A log entry as delivered by getLogs or a transaction receipt
///
/// `topics[0]` is conventionally the event topic identifier, unless the
/// event is anonymous.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Non-indexed event data, head/tail encoded
    pub data: Vec<u8>,
    /// Ordered 32-byte topic words
    pub topics: Vec<H256>,
}

impl LogEntry {
    /// Build from the raw hex-string form used on the RPC surface
    pub fn from_raw(data: &str, topics: &[String]) -> Result<Self, AbiError> {
        let data = crate::hex_util::from_hex(data)?;
        let topics = topics
            .iter()
            .map(|t| H256::from_hex(t).map_err(|e| AbiError::InvalidHex(e.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { data, topics })
    }
}

impl<'de> Deserialize<'de> for LogEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawLogEntry {
            #[serde(default)]
            data: String,
            #[serde(default)]
            topics: Vec<String>,
        }

        let raw = RawLogEntry::deserialize(deserializer)?;
        LogEntry::from_raw(&raw.data, &raw.topics).map_err(serde::de::Error::custom)
    }
}
