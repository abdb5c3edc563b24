//! # meterframe-rs - Decoder for AFN-style Telemetry/Metering Frames
//!
//! The meterframe-rs crate decodes a single binary frame of the
//! `68 L L 68 | address | AFN SEQ | data units | CRC 16` family used by
//! metering terminals into a structured [`Frame`].
//!
//! ## Features
//!
//! - Decode the fixed header, including the direction bit of the AFN byte
//! - Scan a variable number of data units whose value shape (signed, unsigned,
//!   enumerated, length-prefixed ASCII text, hex) depends on the DT type word
//! - Compute the address-table number of each unit from its DA bytes
//! - Extract, without verifying, the CRC and the end marker
//! - Treat frames that run out of bytes after the header as short but valid
//! - Render decoded frames as a text report or JSON
//!
//! ## Usage
//!
//! ```rust
//! use meterframe_rs::{decode_frame, util::hex::decode_hex};
//!
//! let bytes = decode_hex("6800136823350010000000110631610101000100000005323F16").unwrap();
//! let frame = decode_frame(&bytes).unwrap();
//! assert_eq!(frame.data_units.len(), 1);
//! assert_eq!(frame.data_units[0].table_number, 1);
//! assert_eq!(frame.end_flag, Some(0x16));
//! ```

pub mod constants;
pub mod error;
pub mod frame;
pub mod logging;
pub mod payload;
pub mod report;
pub mod util;

pub use crate::error::FrameError;
pub use crate::logging::{init_logger, log_error, log_info};

pub use frame::{
    decode_frame, decode_frame_with, DecodeOptions, Direction, Frame, FrameHeader, ResultCodeRule,
};
pub use payload::{table_number, DataUnit, DataValue, ValueKind};

/// Decodes a frame given as hex text (whitespace and `0x` markers allowed).
///
/// # Arguments
/// * `hex` - Frame bytes as hexadecimal text
/// * `options` - Decoder settings
///
/// # Returns
/// * `Ok(Frame)` - Decoded frame, possibly short
/// * `Err(FrameError)` - Invalid hex or truncated header
pub fn decode_hex_frame(hex: &str, options: &DecodeOptions) -> Result<Frame, FrameError> {
    let bytes = util::hex::decode_hex(hex)?;
    decode_frame_with(&bytes, options)
}
