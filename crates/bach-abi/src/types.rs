//! ABI type definitions

use bach_primitives::{Address, H256, U256};

/// Solidity ABI token values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Address (20 bytes)
    Address(Address),
    /// Unsigned integer (8-256 bits)
    Uint(U256),
    /// Signed integer (8-256 bits)
    Int(I256),
    /// Boolean
    Bool(bool),
    /// Dynamic bytes
    Bytes(Vec<u8>),
    /// Fixed-size bytes (1-32)
    FixedBytes(Vec<u8>),
    /// UTF-8 string
    String(String),
    /// Dynamic array
    Array(Vec<Token>),
    /// Fixed-size array
    FixedArray(Vec<Token>),
}

/// Signed 256-bit integer, two's complement on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I256 {
    /// Absolute value
    pub abs: U256,
    /// Sign (true if negative)
    pub negative: bool,
}

impl I256 {
    /// Create a new I256
    pub fn new(abs: U256, negative: bool) -> Self {
        Self { abs, negative }
    }

    /// Create from i128
    pub fn from_i128(value: i128) -> Self {
        if value < 0 {
            Self {
                abs: U256::from(value.unsigned_abs()),
                negative: true,
            }
        } else {
            Self {
                abs: U256::from(value as u128),
                negative: false,
            }
        }
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.abs.is_zero()
    }
}

/// Parsed description of one parameter's type
///
/// Every `ParamType` maps to exactly one coder; whether a value lives in the
/// head region or is reached through an offset pointer is a static property
/// of the variant (see [`ParamType::is_dynamic`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// Address
    Address,
    /// Unsigned integer with bit width (8, 16, ..., 256)
    Uint(usize),
    /// Signed integer with bit width
    Int(usize),
    /// Boolean
    Bool,
    /// Dynamic bytes
    Bytes,
    /// Fixed-size bytes (width 1-32)
    FixedBytes(usize),
    /// UTF-8 string
    String,
    /// Variable-length array
    Array(Box<ParamType>),
    /// Fixed-length array
    FixedArray(Box<ParamType>, usize),
}

impl ParamType {
    /// Check if this type is dynamic (variable length, or containing one)
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            _ => false,
        }
    }
}

impl Token {
    /// Create an address token
    pub fn address(addr: Address) -> Self {
        Token::Address(addr)
    }

    /// Create a uint256 token
    pub fn uint256(value: U256) -> Self {
        Token::Uint(value)
    }

    /// Create a uint256 from u128
    pub fn uint256_from_u128(value: u128) -> Self {
        Token::Uint(U256::from(value))
    }

    /// Create a bool token
    pub fn bool(value: bool) -> Self {
        Token::Bool(value)
    }

    /// Create a bytes token
    pub fn bytes(data: Vec<u8>) -> Self {
        Token::Bytes(data)
    }

    /// Create a string token
    pub fn string(s: impl Into<String>) -> Self {
        Token::String(s.into())
    }

    /// Create a bytes32 token
    pub fn bytes32(data: H256) -> Self {
        Token::FixedBytes(data.as_bytes().to_vec())
    }

    /// Short name of the value's kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Address(_) => "address",
            Token::Uint(_) => "uint",
            Token::Int(_) => "int",
            Token::Bool(_) => "bool",
            Token::Bytes(_) => "bytes",
            Token::FixedBytes(_) => "fixed bytes",
            Token::String(_) => "string",
            Token::Array(_) => "array",
            Token::FixedArray(_) => "fixed array",
        }
    }
}
