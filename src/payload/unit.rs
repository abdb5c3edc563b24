//! Data-unit scanner.
//!
//! A data unit is `DA(2) DT(2) value [result_code(1)]`. The value shape is
//! picked from the DT type word, and the result code is only present when the
//! frame's header says so (see [`UnitContext`]).
//!
//! Units are parsed atomically: when the remaining bytes cannot hold a whole
//! unit the scan stops and that unit is dropped. That is the normal way a
//! scan ends, because CRC and end marker look like the start of a truncated
//! unit. The fields read before the shortfall (DA and DT, the text length
//! prefix, a value whose result code is missing) stay consumed, and the
//! trailer is read from the bytes after them.

use crate::constants::DATA_UNIT_ID_LEN;
use crate::payload::table::table_number;
use crate::payload::value::{parse_value, DataValue, KindTable, ValueKind};
use crate::util::hex::{encode_hex_upper, serialize_hex_upper};
use crate::logging::log_debug;
use log::debug;
use nom::{
    bytes::complete::take,
    number::complete::{be_u16, be_u8},
    IResult,
};
use serde::Serialize;

/// One addressed measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataUnit {
    /// DA: `[DA_H, DA_L]`
    #[serde(serialize_with = "serialize_hex_upper")]
    pub address_code: [u8; 2],
    pub table_number: i32,
    /// DT, big-endian on the wire
    #[serde(serialize_with = "serialize_hex_upper")]
    pub type_code: [u8; 2],
    pub kind: ValueKind,
    pub value: DataValue,
    pub result_code: Option<u8>,
    /// Value bytes consumed: 4 for fixed kinds, the length prefix for text.
    pub declared_length: usize,
}

impl DataUnit {
    pub fn da_h(&self) -> u8 {
        self.address_code[0]
    }

    pub fn da_l(&self) -> u8 {
        self.address_code[1]
    }

    pub fn type_word(&self) -> u16 {
        u16::from_be_bytes(self.type_code)
    }

    /// DA as uppercase hex, e.g. "0680".
    pub fn da_hex(&self) -> String {
        encode_hex_upper(&self.address_code)
    }

    /// DT as uppercase hex, e.g. "0001".
    pub fn dt_hex(&self) -> String {
        encode_hex_upper(&self.type_code)
    }

    /// Bytes this unit occupied in the frame.
    pub fn wire_len(&self) -> usize {
        let prefix = if self.kind == ValueKind::Text { 2 } else { 0 };
        DATA_UNIT_ID_LEN + prefix + self.declared_length + usize::from(self.result_code.is_some())
    }
}

/// Per-frame settings the scanner needs from the header and the options.
#[derive(Debug, Clone, Copy)]
pub struct UnitContext<'a> {
    /// Whether every unit carries a trailing result code byte.
    pub has_result_code: bool,
    pub kinds: &'a KindTable,
}

/// DA bytes and the DT type word.
fn unit_id(input: &[u8]) -> IResult<&[u8], (&[u8], u16)> {
    let (input, da) = take(2usize)(input)?;
    let (input, type_word) = be_u16(input)?;
    Ok((input, (da, type_word)))
}

/// Parses a single data unit. Consumes the whole unit or nothing.
pub fn parse_data_unit<'i>(input: &'i [u8], ctx: &UnitContext<'_>) -> IResult<&'i [u8], DataUnit> {
    let (input, (da, type_word)) = unit_id(input)?;
    let kind = ctx.kinds.lookup(type_word);
    let (input, (value, declared_length)) = parse_value(kind, input)?;

    let (input, result_code) = if ctx.has_result_code {
        let (input, code) = be_u8(input)?;
        (input, Some(code))
    } else {
        (input, None)
    };

    let address_code = [da[0], da[1]];
    Ok((
        input,
        DataUnit {
            address_code,
            table_number: table_number(da[0], da[1]),
            type_code: type_word.to_be_bytes(),
            kind,
            value,
            result_code,
            declared_length,
        },
    ))
}

/// Bytes of a unit that does not fit which are read before the shortfall.
///
/// DA and DT always are. A text unit adds its length prefix when both prefix
/// bytes are there, and a unit that only lacks its result code adds its value.
fn incomplete_unit_len(input: &[u8], ctx: &UnitContext<'_>) -> usize {
    let Ok((rest, (_, type_word))) = unit_id(input) else {
        return 0;
    };
    let kind = ctx.kinds.lookup(type_word);
    match parse_value(kind, rest) {
        Ok((after, _)) => input.len() - after.len(),
        Err(_) if kind == ValueKind::Text && rest.len() >= 2 => DATA_UNIT_ID_LEN + 2,
        Err(_) => DATA_UNIT_ID_LEN,
    }
}

/// Scans units until fewer than [`DATA_UNIT_ID_LEN`] bytes remain or the next
/// unit does not fit. Returns the unconsumed input and the units in buffer order.
pub fn scan_data_units<'i>(
    mut input: &'i [u8],
    ctx: &UnitContext<'_>,
) -> (&'i [u8], Vec<DataUnit>) {
    let mut units = Vec::new();

    while input.len() >= DATA_UNIT_ID_LEN {
        match parse_data_unit(input, ctx) {
            Ok((rest, unit)) => {
                debug!(
                    "Data unit {}: DA={} (table {}) DT={} kind={} value={}",
                    units.len() + 1,
                    unit.da_hex(),
                    unit.table_number,
                    unit.dt_hex(),
                    unit.kind,
                    unit.value
                );
                units.push(unit);
                input = rest;
            }
            Err(_) => {
                let read = incomplete_unit_len(input, ctx);
                log_debug(&format!(
                    "Stopping data unit scan: next unit does not fit in {} remaining bytes, \
                     skipping {read} bytes already read",
                    input.len()
                ));
                input = &input[read..];
                break;
            }
        }
    }

    (input, units)
}
