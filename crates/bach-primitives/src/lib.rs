//! # bach-primitives
//!
//! Primitive types for BachLedger.
//!
//! This crate provides the fundamental value types the ABI codec is built on:
//! addresses, 32-byte hashes, and 256-bit integers.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod hash;

pub use address::{Address, AddressError};
pub use hash::{H256, HashError};

// Re-export primitive-types for U256
pub use primitive_types::U256;
