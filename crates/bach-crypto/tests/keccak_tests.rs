//! Keccak-256 known-vector and consistency tests

use bach_crypto::keccak256;
use bach_primitives::H256;

// ==================== Known vectors ====================

#[test]
fn test_abc_vector() {
    let hash = keccak256(b"abc");
    let expected = H256::from_hex(
        "0x4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45",
    )
    .unwrap();
    assert_eq!(hash, expected);
}

#[test]
fn test_single_zero_byte_vector() {
    let hash = keccak256(&[0x00]);
    let expected = H256::from_hex(
        "0xbc36789e7a1e281436464229828f817d6612f7b477d66591ff96a9e064bcc98a",
    )
    .unwrap();
    assert_eq!(hash, expected);
}

#[test]
fn test_quick_brown_fox_vector() {
    let hash = keccak256(b"The quick brown fox jumps over the lazy dog");
    let expected = H256::from_hex(
        "0x4d741b6f1eb29cb2a9b9911c82f56fa8d73b04959d3d9d222895df6c0b28aa15",
    )
    .unwrap();
    assert_eq!(hash, expected);

    // One trailing period, an entirely different digest
    let with_period = keccak256(b"The quick brown fox jumps over the lazy dog.");
    let expected = H256::from_hex(
        "0x578951e24efd62a3d63a86f7cd19aaa53c898fe287d2552133220370240b572d",
    )
    .unwrap();
    assert_eq!(with_period, expected);
}

// ==================== Consistency ====================

#[test]
fn test_hash_of_hash_differs() {
    let first = keccak256(&[]);
    let second = keccak256(first.as_bytes());
    assert_ne!(first, second);
}

#[test]
fn test_long_input() {
    let input = vec![0u8; 4096];
    let hash = keccak256(&input);
    assert_eq!(hash, keccak256(&input));
    assert!(!hash.is_zero());
}

#[test]
fn test_concurrent_hashing() {
    use std::thread;

    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let input = format!("worker {}", i);
                keccak256(input.as_bytes())
            })
        })
        .collect();

    let results: Vec<H256> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for i in 0..results.len() {
        for j in (i + 1)..results.len() {
            assert_ne!(results[i], results[j]);
        }
    }
}
