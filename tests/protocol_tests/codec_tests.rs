//! Codec Tests
//!
//! Tests for message encoding/decoding.

use proptest::prelude::*;
use timebox::protocol::{
    checksum, decode, encode, Masking, Message, MAX_ARGS_SIZE, PREFIX, SUFFIX,
};
use timebox::TimeboxError;

// =============================================================================
// Checksum
// =============================================================================

#[test]
fn test_checksum_sums_header_command_and_args() {
    // 0x06 + 0x6f + 0xff
    assert_eq!(checksum(&[0x06, 0x00, 0x6f, 0xff, 0x00, 0x00]), 0x174);
}

#[test]
fn test_checksum_wraps_at_16_bits() {
    let bytes = vec![0xff; 300];
    assert_eq!(checksum(&bytes), ((0xff * 300) & 0xffff) as u16);
}

#[test]
fn test_checksum_empty() {
    assert_eq!(checksum(&[]), 0);
}

// =============================================================================
// Encoding
// =============================================================================

#[test]
fn test_encode_set_color_raw() {
    let encoded = encode(0x6f, &[255, 0, 0], Masking::Raw).unwrap();
    assert_eq!(
        encoded,
        vec![0x01, 0x06, 0x00, 0x6f, 0xff, 0x00, 0x00, 0x74, 0x01, 0x02]
    );
}

#[test]
fn test_encode_full_masking_escapes_checksum() {
    // Checksum high byte is 0x01 and must be escaped
    let encoded = encode(0x6f, &[255, 0, 0], Masking::Full).unwrap();
    assert_eq!(
        encoded,
        vec![0x01, 0x06, 0x00, 0x6f, 0xff, 0x00, 0x00, 0x74, 0x03, 0x04, 0x02]
    );
}

#[test]
fn test_encode_body_masking_leaves_checksum_raw() {
    let encoded = encode(0x6f, &[255, 0, 0], Masking::Body).unwrap();
    assert_eq!(
        encoded,
        vec![0x01, 0x06, 0x00, 0x6f, 0xff, 0x00, 0x00, 0x74, 0x01, 0x02]
    );
}

#[test]
fn test_encode_escapes_reserved_args() {
    let encoded = encode(0x6f, &[0x01, 0x02, 0x03], Masking::Full).unwrap();
    assert_eq!(
        encoded,
        vec![
            0x01, 0x06, 0x00, 0x6f, 0x03, 0x04, 0x03, 0x05, 0x03, 0x06, 0x7b, 0x00, 0x02
        ]
    );
}

#[test]
fn test_encode_checksum_with_reserved_low_and_high_bytes() {
    // 0x04 + 0x74 + 0x89 = 0x0101
    let full = encode(0x74, &[0x89], Masking::Full).unwrap();
    assert_eq!(
        full,
        vec![0x01, 0x04, 0x00, 0x74, 0x89, 0x03, 0x04, 0x03, 0x04, 0x02]
    );

    let body = encode(0x74, &[0x89], Masking::Body).unwrap();
    assert_eq!(body, vec![0x01, 0x04, 0x00, 0x74, 0x89, 0x01, 0x01, 0x02]);
}

#[test]
fn test_encode_raw_keeps_reserved_bytes() {
    let encoded = encode(0x44, &[0x01, 0x02, 0x03], Masking::Raw).unwrap();
    assert_eq!(&encoded[4..7], &[0x01, 0x02, 0x03]);
    assert_eq!(encoded.len(), 3 + 7);
}

#[test]
fn test_encode_no_args() {
    let encoded = encode(0x45, &[], Masking::Raw).unwrap();
    // len = 3, sum = 0x03 + 0x45
    assert_eq!(encoded, vec![0x01, 0x03, 0x00, 0x45, 0x48, 0x00, 0x02]);
}

#[test]
fn test_encode_length_is_little_endian() {
    let args = vec![0x10; 300];
    let encoded = encode(0x49, &args, Masking::Raw).unwrap();
    let len = u16::from_le_bytes([encoded[1], encoded[2]]);
    assert_eq!(len, 303);
}

#[test]
fn test_encode_payload_too_large() {
    let args = vec![0u8; MAX_ARGS_SIZE + 1];
    let result = encode(0x49, &args, Masking::Raw);
    assert!(matches!(result, Err(TimeboxError::PayloadTooLarge(_))));
}

#[test]
fn test_encode_largest_payload() {
    let args = vec![0u8; MAX_ARGS_SIZE];
    let encoded = encode(0x49, &args, Masking::Raw).unwrap();
    assert_eq!(u16::from_le_bytes([encoded[1], encoded[2]]), u16::MAX);
}

#[test]
fn test_masked_message_only_frames_at_edges() {
    let encoded = encode(0x02, &[0x01, 0x02, 0x03, 0x01], Masking::Full).unwrap();
    assert_eq!(encoded[0], PREFIX);
    assert_eq!(*encoded.last().unwrap(), SUFFIX);
    let inner = &encoded[1..encoded.len() - 1];
    assert!(!inner.contains(&PREFIX));
    assert!(!inner.contains(&SUFFIX));
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn test_decode_raw() {
    let bytes = [0x01, 0x06, 0x00, 0x6f, 0xff, 0x00, 0x00, 0x74, 0x01, 0x02];
    let message = decode(&bytes, Masking::Raw).unwrap();
    assert_eq!(
        message,
        Message {
            command: 0x6f,
            args: vec![0xff, 0x00, 0x00],
        }
    );
}

#[test]
fn test_decode_body_masked_with_raw_checksum() {
    let bytes = [0x01, 0x04, 0x00, 0x74, 0x89, 0x01, 0x01, 0x02];
    let message = decode(&bytes, Masking::Body).unwrap();
    assert_eq!(message.command, 0x74);
    assert_eq!(message.args, vec![0x89]);
}

#[test]
fn test_decode_bad_prefix() {
    let bytes = [0x00, 0x06, 0x00, 0x6f, 0xff, 0x00, 0x00, 0x74, 0x01, 0x02];
    assert!(matches!(decode(&bytes, Masking::Raw), Err(TimeboxError::Framing(_))));
}

#[test]
fn test_decode_bad_suffix() {
    let bytes = [0x01, 0x06, 0x00, 0x6f, 0xff, 0x00, 0x00, 0x74, 0x01, 0x00];
    assert!(matches!(decode(&bytes, Masking::Raw), Err(TimeboxError::Framing(_))));
}

#[test]
fn test_decode_too_short() {
    assert!(matches!(decode(&[], Masking::Raw), Err(TimeboxError::Framing(_))));
    assert!(matches!(decode(&[0x01], Masking::Raw), Err(TimeboxError::Framing(_))));
    assert!(matches!(
        decode(&[0x01, 0x02], Masking::Raw),
        Err(TimeboxError::Framing(_))
    ));
    assert!(matches!(
        decode(&[0x01, 0x03, 0x00, 0x45, 0x48, 0x02], Masking::Raw),
        Err(TimeboxError::Framing(_))
    ));
}

#[test]
fn test_decode_checksum_mismatch() {
    let bytes = [0x01, 0x06, 0x00, 0x6f, 0xff, 0x00, 0x00, 0x75, 0x01, 0x02];
    match decode(&bytes, Masking::Raw) {
        Err(TimeboxError::ChecksumMismatch { expected, actual }) => {
            assert_eq!(expected, 0x175);
            assert_eq!(actual, 0x174);
        }
        other => panic!("Expected checksum mismatch, got {:?}", other),
    }
}

#[test]
fn test_decode_length_mismatch() {
    // Length claims 5, message carries 6; checksum itself is consistent
    let bytes = [0x01, 0x05, 0x00, 0x6f, 0xff, 0x00, 0x00, 0x73, 0x01, 0x02];
    assert!(matches!(decode(&bytes, Masking::Raw), Err(TimeboxError::Framing(_))));
}

#[test]
fn test_decode_truncated_escape() {
    let bytes = [0x01, 0x05, 0x03, 0x02];
    assert!(matches!(
        decode(&bytes, Masking::Full),
        Err(TimeboxError::TruncatedEscapeSequence)
    ));
}

#[test]
fn test_decode_with_wrong_masking_fails() {
    let encoded = encode(0x6f, &[0x01, 0x02, 0x03], Masking::Full).unwrap();
    assert!(decode(&encoded, Masking::Raw).is_err());
}

// =============================================================================
// Round Trips
// =============================================================================

fn args_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![Just(0x00u8), Just(0x01u8), Just(0x02u8), Just(0x03u8), any::<u8>()],
        0..400,
    )
}

proptest! {
    #[test]
    fn prop_full_masking_round_trip(command in any::<u8>(), args in args_strategy()) {
        let encoded = encode(command, &args, Masking::Full).unwrap();
        let decoded = decode(&encoded, Masking::Full).unwrap();
        prop_assert_eq!(decoded, Message { command, args });
    }

    #[test]
    fn prop_body_masking_round_trip(command in any::<u8>(), args in args_strategy()) {
        let encoded = encode(command, &args, Masking::Body).unwrap();
        let decoded = decode(&encoded, Masking::Body).unwrap();
        prop_assert_eq!(decoded, Message { command, args });
    }

    #[test]
    fn prop_raw_round_trip(command in any::<u8>(), args in args_strategy()) {
        let encoded = encode(command, &args, Masking::Raw).unwrap();
        prop_assert_eq!(encoded.len(), args.len() + 7);
        let decoded = decode(&encoded, Masking::Raw).unwrap();
        prop_assert_eq!(decoded, Message { command, args });
    }

    #[test]
    fn prop_length_field_counts_command_args_and_checksum(args in args_strategy()) {
        let encoded = encode(0x49, &args, Masking::Raw).unwrap();
        let len = u16::from_le_bytes([encoded[1], encoded[2]]) as usize;
        prop_assert_eq!(len, args.len() + 3);
    }
}
