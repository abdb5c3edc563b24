//! Trailer reader: optional CRC (2 bytes, BE) then optional end marker.
//!
//! The CRC is extracted, never verified.

use nom::{
    combinator::opt,
    number::complete::{be_u16, be_u8},
    IResult,
};

/// Reads whatever part of the trailer is present. Never fails.
pub fn parse_trailer(input: &[u8]) -> (&[u8], Option<u16>, Option<u8>) {
    match trailer(input) {
        Ok((rest, (crc, end_flag))) => (rest, crc, end_flag),
        Err(_) => (input, None, None),
    }
}

fn trailer(input: &[u8]) -> IResult<&[u8], (Option<u16>, Option<u8>)> {
    let (input, crc) = opt(be_u16)(input)?;
    let (input, end_flag) = opt(be_u8)(input)?;
    Ok((input, (crc, end_flag)))
}
