use bitvec::prelude::*;
use des_crypto::crypto::bits::{
    bits_from_hex, bits_from_int, bits_to_bytes, bits_to_hex, bytes_to_bits,
};
use des_crypto::crypto::des_tables::{self, IP};
use des_crypto::crypto::permutation::{permute, validate_table};
use des_crypto::CipherError;

#[test]
fn test_bits_from_hex() {
    let bits = bits_from_hex("A5", 8).unwrap();
    assert_eq!(bits, bitvec![1, 0, 1, 0, 0, 1, 0, 1]);
}

#[test]
fn test_bits_from_hex_is_case_insensitive() {
    assert_eq!(
        bits_from_hex("abcdef", 24).unwrap(),
        bits_from_hex("ABCDEF", 24).unwrap()
    );
}

#[test]
fn test_bits_from_hex_rejects_invalid_digit() {
    let err = bits_from_hex("ZZZZZZZZZZZZZZZZ", 64).unwrap_err();
    assert!(matches!(err, CipherError::Format(_)));
}

#[test]
fn test_bits_from_hex_rejects_wrong_digit_count() {
    // 15 digits for a 64-bit field is a format error, never padded.
    let err = bits_from_hex("0123456789ABCDE", 64).unwrap_err();
    assert!(matches!(err, CipherError::Format(_)));

    let err = bits_from_hex("0123456789ABCDEF0", 64).unwrap_err();
    assert!(matches!(err, CipherError::Format(_)));
}

#[test]
fn test_bits_from_int_pads_to_width() {
    let bits = bits_from_int(5, 8).unwrap();
    assert_eq!(bits, bitvec![0, 0, 0, 0, 0, 1, 0, 1]);
}

#[test]
fn test_bits_from_int_rejects_oversized_value() {
    let err = bits_from_int(0x100, 8).unwrap_err();
    assert!(matches!(err, CipherError::Format(_)));
}

#[test]
fn test_bits_to_hex_preserves_leading_zeros() {
    let bits = bits_from_int(0xF, 64).unwrap();
    assert_eq!(bits_to_hex(&bits), "000000000000000F");
}

#[test]
fn test_hex_round_trip() {
    let hex = "0123456789ABCDEF";
    assert_eq!(bits_to_hex(&bits_from_hex(hex, 64).unwrap()), hex);
}

#[test]
fn test_bytes_to_bits() {
    let input = hex_literal::hex!("AACC");
    let expected = bitvec![1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0];
    assert_eq!(bytes_to_bits(&input), expected);
}

#[test]
fn test_bits_to_bytes() {
    let bits = bitvec![1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0];
    assert_eq!(bits_to_bytes(&bits), hex_literal::hex!("AACC"));
}

#[test]
fn test_permute_reorders_by_1_based_index() {
    let input = bitvec![1, 0, 1, 1];
    let reversed = permute(&input, &[4, 3, 2, 1]);
    assert_eq!(reversed, bitvec![1, 1, 0, 1]);
}

#[test]
fn test_permute_expands_with_repetition() {
    let input = bitvec![1, 0];
    let expanded = permute(&input, &[2, 1, 1, 2]);
    assert_eq!(expanded, bitvec![0, 1, 1, 0]);
}

#[test]
fn test_permute_contracts() {
    let input = bitvec![1, 0, 1, 1];
    let contracted = permute(&input, &[3, 1]);
    assert_eq!(contracted, bitvec![1, 1]);
}

#[test]
fn test_initial_permutation_walkthrough_value() {
    let block = bits_from_hex("0123456789ABCDEF", 64).unwrap();
    assert_eq!(bits_to_hex(&permute(&block, &IP)), "CC00CCFFF0AAF0AA");
}

#[test]
fn test_validate_table_accepts_in_range_entries() {
    assert!(validate_table("T", &[1, 4, 2, 3], 4).is_ok());
}

#[test]
fn test_validate_table_rejects_out_of_range_entries() {
    let err = validate_table("T", &[1, 5], 4).unwrap_err();
    assert!(matches!(err, CipherError::Configuration(_)));

    let err = validate_table("T", &[0, 1], 4).unwrap_err();
    assert!(matches!(err, CipherError::Configuration(_)));
}

#[test]
fn test_standard_tables_validate() {
    assert!(des_tables::validate_tables().is_ok());
}
