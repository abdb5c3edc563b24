//! Integration tests for data-unit decoding through the public decoder.

use meterframe_rs::constants::{FRAME_END, FRAME_START};
use meterframe_rs::{
    decode_frame, decode_frame_with, table_number, DataValue, DecodeOptions, FrameError,
    ResultCodeRule, ValueKind,
};

fn build_frame(afn: u8, units: &[u8], trailer: &[u8]) -> Vec<u8> {
    let body_len = 8 + 3 + units.len();
    let mut data = vec![FRAME_START, (body_len >> 8) as u8, body_len as u8, FRAME_START];
    data.extend_from_slice(&[0x23, 0x35, 0x00, 0x10, 0x00, 0x00, 0x00, 0x11]);
    data.extend_from_slice(&[afn, 0x31, 0x61]);
    data.extend_from_slice(units);
    data.extend_from_slice(trailer);
    data
}

const TRAILER: [u8; 3] = [0x32, 0x3F, FRAME_END];

#[test]
fn test_table_number_examples() {
    assert_eq!(table_number(1, 0x01), 1);
    assert_eq!(table_number(2, 0x01), 9);
    assert_eq!(table_number(1, 0x03), 3);
}

#[test]
fn test_signed_minus_one() {
    let data = build_frame(0x06, &[0x01, 0x01, 0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xFF], &TRAILER);
    let frame = decode_frame(&data).unwrap();
    assert_eq!(frame.data_units[0].kind, ValueKind::Signed);
    assert_eq!(frame.data_units[0].value, DataValue::Signed(-1));
}

#[test]
fn test_unsigned_one() {
    let data = build_frame(0x06, &[0x01, 0x01, 0x00, 0x08, 0x00, 0x00, 0x00, 0x01], &TRAILER);
    let frame = decode_frame(&data).unwrap();
    assert_eq!(frame.data_units[0].kind, ValueKind::Unsigned);
    assert_eq!(frame.data_units[0].value, DataValue::Unsigned(1));
}

#[test]
fn test_unsigned_keeps_high_values() {
    let data = build_frame(0x06, &[0x01, 0x01, 0x00, 0x08, 0xFF, 0xFF, 0xFF, 0xFF], &TRAILER);
    let frame = decode_frame(&data).unwrap();
    assert_eq!(frame.data_units[0].value, DataValue::Unsigned(u32::MAX));
}

#[test]
fn test_unknown_type_word_falls_back_to_signed() {
    let data = build_frame(0x06, &[0x01, 0x01, 0x12, 0x34, 0xFF, 0xFF, 0xFE, 0x0C], &TRAILER);
    let frame = decode_frame(&data).unwrap();
    assert_eq!(frame.data_units[0].type_word(), 0x1234);
    assert_eq!(frame.data_units[0].kind, ValueKind::Signed);
    assert_eq!(frame.data_units[0].value, DataValue::Signed(-500));
}

#[test]
fn test_text_unit() {
    let units = [0x01, 0x01, 0x00, 0x02, 0x00, 0x03, 0x41, 0x42, 0x43];
    let data = build_frame(0x06, &units, &TRAILER);
    let frame = decode_frame(&data).unwrap();
    let unit = &frame.data_units[0];
    assert_eq!(unit.kind, ValueKind::Text);
    assert_eq!(unit.value.as_text(), Some("ABC"));
    assert_eq!(unit.declared_length, 3);
    assert_eq!(frame.crc, Some(0x323F));
}

#[test]
fn test_empty_text_unit() {
    let data = build_frame(0x06, &[0x01, 0x01, 0x00, 0x02, 0x00, 0x00], &TRAILER);
    let frame = decode_frame(&data).unwrap();
    assert_eq!(frame.data_units[0].value, DataValue::Text(String::new()));
    assert_eq!(frame.data_units[0].declared_length, 0);
}

/// A text length that overruns the buffer drops that unit and every later one.
#[test]
fn test_text_overrun_stops_scan() {
    let units = [
        0x01, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, // complete
        0x01, 0x02, 0x00, 0x02, 0x00, 0x40, 0x41, 0x42, // declares 64 bytes
    ];
    let frame = decode_frame(&build_frame(0x06, &units, &TRAILER)).unwrap();
    assert_eq!(frame.data_units.len(), 1);
    assert_eq!(frame.data_units[0].value, DataValue::Signed(2));
}

#[test]
fn test_units_keep_buffer_order() {
    let units = [
        0x02, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x0A, //
        0x01, 0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x0B, //
        0x03, 0x80, 0x00, 0x08, 0x00, 0x00, 0x00, 0x0C,
    ];
    let frame = decode_frame(&build_frame(0x06, &units, &TRAILER)).unwrap();
    let tables: Vec<i32> = frame.data_units.iter().map(|u| u.table_number).collect();
    let values: Vec<i64> = frame.data_units.iter().filter_map(|u| u.value.as_i64()).collect();
    assert_eq!(tables, vec![9, 1, 24]);
    assert_eq!(values, vec![10, 11, 12]);
}

/// With the literal rule the raw AFN byte must be 0x06 while the direction
/// bit is set, which cannot both hold, so no result code is read.
#[test]
fn test_raw_rule_never_reads_result_code() {
    let units = [0x01, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00];
    for afn in [0x06, 0x86] {
        let frame = decode_frame(&build_frame(afn, &units, &TRAILER)).unwrap();
        assert_eq!(frame.data_units.len(), 1);
        assert_eq!(frame.data_units[0].result_code, None);
    }
}

#[test]
fn test_masked_rule_reads_result_code_on_uplink() {
    let options = DecodeOptions::new().result_code_rule(ResultCodeRule::Masked);
    let units = [
        0x01, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, //
        0x01, 0x02, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x04,
    ];
    let frame = decode_frame_with(&build_frame(0x86, &units, &TRAILER), &options).unwrap();
    assert_eq!(frame.data_units.len(), 2);
    assert_eq!(frame.data_units[0].result_code, Some(0x00));
    assert_eq!(frame.data_units[1].result_code, Some(0x04));
    assert_eq!(frame.data_units[1].wire_len(), 9);
    assert_eq!(frame.crc, Some(0x323F));
    assert_eq!(frame.end_flag, Some(0x16));
}

#[test]
fn test_masked_rule_ignores_downlink() {
    let options = DecodeOptions::new().result_code_rule(ResultCodeRule::Masked);
    let units = [0x01, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01];
    let frame = decode_frame_with(&build_frame(0x06, &units, &TRAILER), &options).unwrap();
    assert_eq!(frame.data_units[0].result_code, None);
    assert_eq!(frame.crc, Some(0x323F));
}

/// A missing result code byte drops the whole unit; its value bytes are
/// still consumed, so nothing is left for the trailer.
#[test]
fn test_missing_result_code_drops_unit() {
    let options = DecodeOptions::new().result_code_rule(ResultCodeRule::Masked);
    let units = [0x01, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01];
    let frame = decode_frame_with(&build_frame(0x86, &units, &[]), &options).unwrap();
    assert!(frame.data_units.is_empty());
    assert_eq!(frame.crc, None);
    assert_eq!(frame.end_flag, None);
    assert_eq!(frame.consumed, 15 + 8);
}

/// With a result code missing, the trailer is read after the unit's value.
#[test]
fn test_missing_result_code_keeps_trailer() {
    let options = DecodeOptions::new().result_code_rule(ResultCodeRule::Masked);
    let units = [0x01, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01];
    let frame = decode_frame_with(&build_frame(0x86, &units, &[0x32, 0x3F]), &options).unwrap();
    assert!(frame.data_units.is_empty());
    assert_eq!(frame.crc, Some(0x323F));
    assert_eq!(frame.end_flag, None);
}

#[test]
fn test_hex_kind_override() {
    let options = DecodeOptions::new().with_kind(0x0010, ValueKind::Hex);
    let units = [0x01, 0x01, 0x00, 0x10, 0xDE, 0xAD, 0xBE, 0xEF];
    let frame = decode_frame_with(&build_frame(0x06, &units, &TRAILER), &options).unwrap();
    assert_eq!(frame.data_units[0].kind, ValueKind::Hex);
    assert_eq!(frame.data_units[0].value, DataValue::Hex("DEADBEEF".to_string()));
}

#[test]
fn test_strict_length_bounds_scan() {
    let units = [
        0x01, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, //
        0x01, 0x02, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02,
    ];
    let mut data = build_frame(0x06, &units, &TRAILER);
    // Declare only the first unit.
    data[2] -= 8;
    let strict = decode_frame_with(&data, &DecodeOptions::new().strict_length(true)).unwrap();
    assert_eq!(strict.data_units.len(), 1);
    assert_eq!(strict.crc, Some(0x0102));
    assert_eq!(strict.end_flag, Some(0x00));

    let lenient = decode_frame(&data).unwrap();
    assert_eq!(lenient.data_units.len(), 2);
    assert_eq!(lenient.crc, Some(0x323F));
}

#[test]
fn test_strict_length_rejects_overrun() {
    let mut data = build_frame(0x06, &[], &TRAILER);
    data[1] = 0x01;
    let err = decode_frame_with(&data, &DecodeOptions::new().strict_length(true)).unwrap_err();
    assert_eq!(
        err,
        FrameError::LengthMismatch {
            declared: 0x010B,
            available: data.len() - 4
        }
    );
}

#[test]
fn test_strict_length_rejects_too_short_declaration() {
    let mut data = build_frame(0x06, &[], &TRAILER);
    data[2] = 0x05;
    let result = decode_frame_with(&data, &DecodeOptions::new().strict_length(true));
    assert!(matches!(result, Err(FrameError::LengthMismatch { declared: 5, .. })));
}
