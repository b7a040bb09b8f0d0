//! Decoded parameter container with positional and named access

use std::collections::HashMap;

use crate::types::Token;

/// Ordered, sparse container for decoded values
///
/// Addressable both by declaration-order index and by parameter name when
/// one was supplied. Both access paths resolve to the same backing slot, so
/// a named view is never a copy of the positional one.
#[derive(Debug, Clone)]
pub struct DecodedParams {
    values: Vec<Option<Token>>,
    names: HashMap<String, usize>,
    numbered: bool,
    event_type: Option<String>,
}

impl DecodedParams {
    /// Create an empty, growable container
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            names: HashMap::new(),
            numbered: true,
            event_type: None,
        }
    }

    /// Create a container with a known arity
    pub fn with_len(len: usize) -> Self {
        Self {
            values: vec![None; len],
            names: HashMap::new(),
            numbered: true,
            event_type: None,
        }
    }

    /// Number of positional slots
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the container has no slots
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Store a value at `index`, aliasing it under `name` when given
    pub fn insert(&mut self, index: usize, name: Option<&str>, value: Token) {
        if index >= self.values.len() {
            self.values.resize(index + 1, None);
        }
        self.values[index] = Some(value);
        if let Some(name) = name {
            self.names.insert(name.to_string(), index);
        }
    }

    /// Get a value by positional index
    ///
    /// Returns `None` when positional access was disabled at decode time.
    pub fn get(&self, index: usize) -> Option<&Token> {
        if !self.numbered {
            return None;
        }
        self.values.get(index).and_then(Option::as_ref)
    }

    /// Get a value by parameter name
    pub fn get_by_name(&self, name: &str) -> Option<&Token> {
        let index = *self.names.get(name)?;
        self.values.get(index).and_then(Option::as_ref)
    }

    /// Iterate positional slots in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Option<&Token>> {
        self.values.iter().map(Option::as_ref)
    }

    /// The event name, set on results produced by event decoding
    pub fn event_type(&self) -> Option<&str> {
        self.event_type.as_deref()
    }

    pub(crate) fn set_numbered(&mut self, numbered: bool) {
        self.numbered = numbered;
    }

    pub(crate) fn set_event_type(&mut self, name: &str) {
        self.event_type = Some(name.to_string());
    }
}

impl Default for DecodedParams {
    fn default() -> Self {
        Self::new()
    }
}
