//! Fixed header reader: `start(1) length(2,BE) start(1) address(8) AFN(1) SEQ(2)`.

use crate::constants::{AFN_DIRECTION_MASK, FRAME_ADDRESS_LEN, FRAME_SEQUENCE_LEN};
use crate::util::hex::serialize_hex_upper;
use nom::{
    bytes::complete::take,
    number::complete::{be_u16, be_u8},
    IResult,
};
use serde::Serialize;
use std::fmt;

/// Transfer direction, taken from bit 7 of the AFN byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// DIR = 0, request from the master station
    Downlink,
    /// DIR = 1, response from the terminal
    Uplink,
}

impl Direction {
    pub fn from_function_code(function_code: u8) -> Self {
        if function_code & AFN_DIRECTION_MASK != 0 {
            Direction::Uplink
        } else {
            Direction::Downlink
        }
    }

    /// The DIR bit value, 0 or 1.
    pub fn bit(&self) -> u8 {
        match self {
            Direction::Downlink => 0,
            Direction::Uplink => 1,
        }
    }

    pub fn is_uplink(&self) -> bool {
        *self == Direction::Uplink
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bit())
    }
}

/// The decoded fixed header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameHeader {
    pub start_flag: u8,
    /// Declared length (address through last data unit). Advisory.
    pub length: u16,
    pub start_flag2: u8,
    #[serde(serialize_with = "serialize_hex_upper")]
    pub address: [u8; FRAME_ADDRESS_LEN],
    /// Raw AFN byte, direction bit included.
    pub function_code: u8,
    pub direction: Direction,
    #[serde(serialize_with = "serialize_hex_upper")]
    pub sequence: [u8; FRAME_SEQUENCE_LEN],
}

/// Parses the fixed header with nom.
pub fn parse_header(input: &[u8]) -> IResult<&[u8], FrameHeader> {
    let (input, start_flag) = be_u8(input)?;
    let (input, length) = be_u16(input)?;
    let (input, start_flag2) = be_u8(input)?;
    let (input, address) = take(FRAME_ADDRESS_LEN)(input)?;
    let (input, function_code) = be_u8(input)?;
    let (input, sequence) = take(FRAME_SEQUENCE_LEN)(input)?;

    let mut address_bytes = [0u8; FRAME_ADDRESS_LEN];
    address_bytes.copy_from_slice(address);

    Ok((
        input,
        FrameHeader {
            start_flag,
            length,
            start_flag2,
            address: address_bytes,
            function_code,
            direction: Direction::from_function_code(function_code),
            sequence: [sequence[0], sequence[1]],
        },
    ))
}
