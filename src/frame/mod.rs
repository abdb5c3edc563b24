//! # Frame Decoder
//!
//! Decodes one frame in a single left-to-right pass:
//!
//! ```text
//! 68 | L L | 68 | A A A A A A A A | AFN | SEQ SEQ | data units ... | CRC CRC | 16
//! ```
//!
//! The header is mandatory; everything after it is decoded for as long as
//! whole items fit. A frame that runs out of bytes early is still a valid
//! result, with fewer data units and/or no `crc`/`end_flag`.
//!
//! ## Usage
//!
//! ```rust
//! use meterframe_rs::frame::decode_frame;
//! use meterframe_rs::payload::DataValue;
//!
//! let bytes = [
//!     0x68, 0x00, 0x13, 0x68, // start, length, start
//!     0x23, 0x35, 0x00, 0x10, 0x00, 0x00, 0x00, 0x11, // address
//!     0x06, 0x31, 0x61, // AFN, SEQ
//!     0x01, 0x01, 0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, // DA, DT, value
//!     0x12, 0x34, 0x16, // CRC, end
//! ];
//! let frame = decode_frame(&bytes).unwrap();
//! assert_eq!(frame.data_units[0].value, DataValue::Signed(-1));
//! assert_eq!(frame.crc, Some(0x1234));
//! ```

pub mod header;
pub mod trailer;

pub use header::{parse_header, Direction, FrameHeader};
pub use trailer::parse_trailer;

use crate::constants::{AFN_DIRECTION_MASK, AFN_RESULT_CODE, FRAME_HEADER_LEN, FRAME_LENGTH_PREFIX};
use crate::error::FrameError;
use crate::logging::log_warn;
use crate::payload::{scan_data_units, DataUnit, KindTable, UnitContext, ValueKind};
use crate::util::hex::encode_hex_upper;
use crate::util::logging::log_frame_hex;
use log::debug;
use serde::Serialize;

/// How the per-unit result code byte is gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultCodeRule {
    /// Uplink direction and the raw AFN byte equal to 0x06.
    #[default]
    Raw,
    /// Uplink direction and the AFN byte without its direction bit equal to 0x06.
    Masked,
}

impl ResultCodeRule {
    pub fn applies(&self, header: &FrameHeader) -> bool {
        let function_code = match self {
            ResultCodeRule::Raw => header.function_code,
            ResultCodeRule::Masked => header.function_code & !AFN_DIRECTION_MASK,
        };
        header.direction.is_uplink() && function_code == AFN_RESULT_CODE
    }
}

/// Decoder settings. The default reproduces the plain byte-driven decode.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Bound the data-unit scan by the declared length field.
    pub strict_length: bool,
    pub result_code_rule: ResultCodeRule,
    pub kinds: KindTable,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_length(mut self, strict: bool) -> Self {
        self.strict_length = strict;
        self
    }

    pub fn result_code_rule(mut self, rule: ResultCodeRule) -> Self {
        self.result_code_rule = rule;
        self
    }

    /// Overrides the value kind selected for one DT type word.
    pub fn with_kind(mut self, type_word: u16, kind: ValueKind) -> Self {
        self.kinds.set(type_word, kind);
        self
    }
}

/// A decoded frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    #[serde(flatten)]
    pub header: FrameHeader,
    /// Units in buffer order.
    pub data_units: Vec<DataUnit>,
    pub crc: Option<u16>,
    pub end_flag: Option<u8>,
    /// Offset just past the last byte decoded (end marker, CRC or last unit).
    pub consumed: usize,
}

impl Frame {
    /// True when both the CRC and the end marker were present.
    pub fn is_complete(&self) -> bool {
        self.crc.is_some() && self.end_flag.is_some()
    }

    pub fn direction(&self) -> Direction {
        self.header.direction
    }
}

/// Decodes a frame with the default options.
pub fn decode_frame(input: &[u8]) -> Result<Frame, FrameError> {
    decode_frame_with(input, &DecodeOptions::default())
}

/// Decodes a frame.
///
/// Only a buffer shorter than the fixed header (or, in strict length mode, a
/// declared length running past the buffer) is an error.
pub fn decode_frame_with(input: &[u8], options: &DecodeOptions) -> Result<Frame, FrameError> {
    log_frame_hex("Decoding frame", input);

    if input.len() < FRAME_HEADER_LEN {
        return Err(FrameError::TruncatedHeader { actual: input.len() });
    }
    let (rest, header) =
        parse_header(input).map_err(|_| FrameError::TruncatedHeader { actual: input.len() })?;

    debug!(
        "Header: L={} AFN=0x{:02X} DIR={} SEQ={}",
        header.length,
        header.function_code,
        header.direction,
        encode_hex_upper(&header.sequence)
    );

    // Strict mode: the units end where the declared length says.
    let (units_region, tail) = if options.strict_length {
        let available = input.len() - FRAME_LENGTH_PREFIX;
        let declared = usize::from(header.length);
        if declared > available || declared < FRAME_HEADER_LEN - FRAME_LENGTH_PREFIX {
            return Err(FrameError::LengthMismatch { declared: header.length, available });
        }
        rest.split_at(FRAME_LENGTH_PREFIX + declared - FRAME_HEADER_LEN)
    } else {
        (rest, &[][..])
    };

    let ctx = UnitContext {
        has_result_code: options.result_code_rule.applies(&header),
        kinds: &options.kinds,
    };
    let (leftover, data_units) = scan_data_units(units_region, &ctx);

    let trailer_input = if options.strict_length {
        if !leftover.is_empty() {
            log_warn(&format!(
                "{} bytes inside the declared length did not form a data unit",
                leftover.len()
            ));
        }
        tail
    } else {
        leftover
    };

    let (remaining, crc, end_flag) = parse_trailer(trailer_input);
    if crc.is_none() || end_flag.is_none() {
        debug!("Frame trailer incomplete: crc={crc:?} end_flag={end_flag:?}");
    }
    if !remaining.is_empty() {
        debug!("{} bytes after the end marker were not decoded", remaining.len());
    }

    let consumed = input.len() - remaining.len();
    Ok(Frame {
        header,
        data_units,
        crc,
        end_flag,
        consumed,
    })
}
