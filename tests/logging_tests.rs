//! Unit tests for the logging functionality in the `meterframe-rs` crate.

use meterframe_rs::{decode_frame, decode_frame_with, DecodeOptions};
use meterframe_rs::logging::{init_logger, log_debug, log_error, log_info, log_warn};

/// Tests that the logging helpers work as expected.
#[test]
fn test_logging() {
    // Just ensure logging functions do not panic after init.
    init_logger();
    log_error("This is an error message");
    log_warn("This is a warning message");
    log_info("This is an info message");
    log_debug("This is a debug message");
}

/// Tests that the logger can be initialized more than once.
#[test]
fn test_init_logger_twice() {
    init_logger();
    init_logger();
}

/// Decoding logs per unit; make sure that path runs with a logger installed.
#[test]
fn test_decode_with_logger() {
    init_logger();
    let mut data = vec![
        0x68, 0x00, 0x13, 0x68, 0x23, 0x35, 0x00, 0x10, 0x00, 0x00, 0x00, 0x11, 0x06, 0x31, 0x61,
    ];
    data.extend_from_slice(&[0x01, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x05, 0x32, 0x3F, 0x16]);
    assert_eq!(decode_frame(&data).unwrap().data_units.len(), 1);
}

/// Bytes inside the declared length that do not form a unit are reported
/// through the warning helper in strict mode.
#[test]
fn test_strict_leftover_with_logger() {
    init_logger();
    let mut data = vec![
        0x68, 0x00, 0x0E, 0x68, 0x23, 0x35, 0x00, 0x10, 0x00, 0x00, 0x00, 0x11, 0x06, 0x31, 0x61,
    ];
    data.extend_from_slice(&[0x01, 0x01, 0x00, 0x32, 0x3F, 0x16]);
    let frame = decode_frame_with(&data, &DecodeOptions::new().strict_length(true)).unwrap();
    assert!(frame.data_units.is_empty());
    assert_eq!(frame.crc, Some(0x323F));
    assert_eq!(frame.end_flag, Some(0x16));
}
