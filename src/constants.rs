//! Frame Protocol Constants
//!
//! Byte offsets, masks and type words used by the frame decoder.

/// Conventional start marker (`start_flag` and `start_flag2`). Not validated.
pub const FRAME_START: u8 = 0x68;

/// Conventional end marker. Not validated.
pub const FRAME_END: u8 = 0x16;

/// Fixed header size: start(1) + length(2) + start(1) + address(8) + AFN(1) + SEQ(2)
pub const FRAME_HEADER_LEN: usize = 15;

/// Bytes preceding the region counted by the declared length field
pub const FRAME_LENGTH_PREFIX: usize = 4;

/// Address field size
pub const FRAME_ADDRESS_LEN: usize = 8;

/// Sequence field size
pub const FRAME_SEQUENCE_LEN: usize = 2;

/// Minimum bytes for one data unit identifier (DA + DT)
pub const DATA_UNIT_ID_LEN: usize = 4;

/// Size of every fixed-length value
pub const DATA_UNIT_FIXED_VALUE_LEN: usize = 4;

/// Direction bit of the AFN byte (0 = downlink, 1 = uplink)
pub const AFN_DIRECTION_MASK: u8 = 0x80;

/// Function code that gates the per-unit result code byte
pub const AFN_RESULT_CODE: u8 = 0x06;

// Type words (DT) of the default kind table
pub const DT_SIGNED: u16 = 0x0001;
pub const DT_TEXT: u16 = 0x0002;
pub const DT_ENUMERATED: u16 = 0x0004;
pub const DT_UNSIGNED: u16 = 0x0008;
