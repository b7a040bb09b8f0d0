//! Parameter layout tests for bach-abi
//!
//! Golden byte layouts for the head/tail wire format, plus the error paths
//! of the public encode/decode surface.

use bach_abi::{
    AbiError, Token, decode_params, decode_params_hex, encode_params, hex_util,
};
use bach_primitives::{Address, U256};

// ==================== Golden layouts ====================

#[test]
fn test_encode_uint_and_address() {
    let addr = Address::from_hex("0x0000000000000000000000000000000000000001").unwrap();
    let encoded = encode_params(
        &["uint256", "address"],
        &[Token::Uint(U256::from(1)), Token::Address(addr)],
        false,
    )
    .unwrap();

    assert_eq!(
        encoded,
        "0x0000000000000000000000000000000000000000000000000000000000000001\
0000000000000000000000000000000000000000000000000000000000000001"
    );

    let decoded = decode_params_hex(None, &["uint256", "address"], &encoded, true).unwrap();
    assert_eq!(decoded.get(0), Some(&Token::Uint(U256::from(1))));
    assert_eq!(decoded.get(1), Some(&Token::Address(addr)));
}

#[test]
fn test_encode_no_hex_prefix() {
    let encoded = encode_params(&["bool"], &[Token::Bool(true)], true).unwrap();
    assert!(!encoded.starts_with("0x"));
    assert_eq!(encoded.len(), 64);
    assert!(encoded.ends_with('1'));
}

#[test]
fn test_dynamic_offsets_increase_in_declaration_order() {
    // (uint8, string, bool, bytes): head is 4 words; the two dynamic bodies
    // are written back-to-back after it
    let encoded = encode_params(
        &["uint8", "string", "bool", "bytes"],
        &[
            Token::Uint(U256::from(3)),
            Token::string("hey"),
            Token::bool(true),
            Token::bytes(vec![0xaa]),
        ],
        true,
    )
    .unwrap();
    let bytes = hex_util::from_hex(&encoded).unwrap();

    assert_eq!(bytes.len() % 32, 0);
    // String offset: 4 head words = 128
    assert_eq!(bytes[63], 128);
    // Bytes offset: past the string's length word and padded body
    assert_eq!(bytes[127], 192);
    // Static values sit in their declared head slots
    assert_eq!(bytes[31], 3);
    assert_eq!(bytes[95], 1);
    // String body
    assert_eq!(bytes[159], 3);
    assert_eq!(&bytes[160..163], b"hey");
}

#[test]
fn test_empty_string_and_bytes_boundary() {
    let encoded = encode_params(
        &["string", "bytes"],
        &[Token::String(String::new()), Token::Bytes(vec![])],
        true,
    )
    .unwrap();
    let bytes = hex_util::from_hex(&encoded).unwrap();

    // Two offset words and two zero-length words, no bodies
    assert_eq!(bytes.len(), 128);

    let decoded = decode_params(None, &["string", "bytes"], &bytes, true).unwrap();
    assert_eq!(decoded.get(0), Some(&Token::String(String::new())));
    assert_eq!(decoded.get(1), Some(&Token::Bytes(vec![])));
}

// ==================== Arrays ====================

#[test]
fn test_variable_array_layout() {
    let encoded = encode_params(
        &["uint256[]"],
        &[Token::Array(vec![
            Token::Uint(U256::from(5)),
            Token::Uint(U256::from(6)),
        ])],
        true,
    )
    .unwrap();
    let bytes = hex_util::from_hex(&encoded).unwrap();

    // Offset word, count word, two element words
    assert_eq!(bytes.len(), 128);
    assert_eq!(bytes[31], 32);
    assert_eq!(bytes[63], 2);
    assert_eq!(bytes[95], 5);
    assert_eq!(bytes[127], 6);

    let decoded = decode_params(None, &["uint256[]"], &bytes, true).unwrap();
    assert_eq!(
        decoded.get(0),
        Some(&Token::Array(vec![
            Token::Uint(U256::from(5)),
            Token::Uint(U256::from(6)),
        ]))
    );
}

#[test]
fn test_fixed_array_has_no_count_word() {
    let encoded = encode_params(
        &["bool[3]"],
        &[Token::FixedArray(vec![
            Token::Bool(true),
            Token::Bool(false),
            Token::Bool(true),
        ])],
        true,
    )
    .unwrap();
    let bytes = hex_util::from_hex(&encoded).unwrap();

    // Static array lives entirely in the head: three words, no offset
    assert_eq!(bytes.len(), 96);
    assert_eq!(bytes[31], 1);
    assert_eq!(bytes[63], 0);
    assert_eq!(bytes[95], 1);
}

#[test]
fn test_array_of_strings_roundtrip() {
    let value = Token::Array(vec![
        Token::String("hello".to_string()),
        Token::String("world!".to_string()),
    ]);
    let encoded = encode_params(&["string[]"], &[value.clone()], true).unwrap();
    let bytes = hex_util::from_hex(&encoded).unwrap();

    let decoded = decode_params(None, &["string[]"], &bytes, true).unwrap();
    assert_eq!(decoded.get(0), Some(&value));
}

#[test]
fn test_fixed_array_of_dynamic_elements_roundtrip() {
    let value = Token::FixedArray(vec![
        Token::Bytes(vec![1, 2, 3]),
        Token::Bytes(vec![]),
    ]);
    let encoded = encode_params(&["bytes[2]"], &[value.clone()], true).unwrap();
    let bytes = hex_util::from_hex(&encoded).unwrap();

    let decoded = decode_params(None, &["bytes[2]"], &bytes, true).unwrap();
    assert_eq!(decoded.get(0), Some(&value));
}

#[test]
fn test_nested_array_roundtrip() {
    // uint256[2][] : variable-length array of fixed pairs
    let value = Token::Array(vec![
        Token::FixedArray(vec![Token::Uint(U256::from(1)), Token::Uint(U256::from(2))]),
        Token::FixedArray(vec![Token::Uint(U256::from(3)), Token::Uint(U256::from(4))]),
    ]);
    let encoded = encode_params(&["uint256[2][]"], &[value.clone()], true).unwrap();
    let bytes = hex_util::from_hex(&encoded).unwrap();

    let decoded = decode_params(None, &["uint256[2][]"], &bytes, true).unwrap();
    assert_eq!(decoded.get(0), Some(&value));
}

#[test]
fn test_empty_array_roundtrip() {
    let encoded = encode_params(&["uint256[]"], &[Token::Array(vec![])], true).unwrap();
    let bytes = hex_util::from_hex(&encoded).unwrap();

    // Offset word plus a zero count word
    assert_eq!(bytes.len(), 64);
    let decoded = decode_params(None, &["uint256[]"], &bytes, true).unwrap();
    assert_eq!(decoded.get(0), Some(&Token::Array(vec![])));
}

// ==================== Error paths ====================

#[test]
fn test_encode_arity_mismatch() {
    let result = encode_params(&["uint256", "bool"], &[Token::Bool(true)], false);
    assert!(matches!(
        result,
        Err(AbiError::ArityMismatch { expected: 2, actual: 1 })
    ));
}

#[test]
fn test_encode_unsupported_type() {
    let result = encode_params(&["quint256"], &[Token::Bool(true)], false);
    assert!(matches!(result, Err(AbiError::UnsupportedType(_))));
}

#[test]
fn test_decode_truncated_buffer() {
    let result = decode_params(None, &["uint256", "uint256"], &[0u8; 32], true);
    assert!(matches!(result, Err(AbiError::TruncatedData { .. })));
}

#[test]
fn test_decode_malformed_hex() {
    let result = decode_params_hex(None, &["uint256"], "0xnothex", true);
    assert!(matches!(result, Err(AbiError::InvalidHex(_))));
}
