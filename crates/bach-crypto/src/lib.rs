//! # bach-crypto
//!
//! Cryptographic primitives for BachLedger.
//!
//! Keccak-256 hashing, used by the ABI codec to derive call selectors and
//! event topic identifiers from canonical signature strings.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::keccak256;
