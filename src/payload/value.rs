//! Value kinds selected by the DT type word, and the values they decode to.

use crate::constants::{DATA_UNIT_FIXED_VALUE_LEN, DT_ENUMERATED, DT_SIGNED, DT_TEXT, DT_UNSIGNED};
use nom::{
    bytes::complete::take,
    number::complete::{be_i32, be_u16, be_u32},
    IResult,
};
use serde::Serialize;
use std::fmt;

/// Encoding of a data unit's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueKind {
    /// F1: signed 4-byte big-endian integer. Also the fallback for unknown type words.
    Signed,
    /// F2: 2-byte big-endian length prefix followed by ASCII text.
    Text,
    /// F3: signed 4-byte big-endian integer carrying an enumeration.
    Enumerated,
    /// F4: unsigned 4-byte big-endian integer.
    Unsigned,
    /// F5: 4 raw bytes kept as hex. Only reachable through a kind override.
    Hex,
}

impl ValueKind {
    /// Default lookup from a DT type word.
    pub fn from_type_word(type_word: u16) -> Self {
        match type_word {
            DT_SIGNED => ValueKind::Signed,
            DT_TEXT => ValueKind::Text,
            DT_ENUMERATED => ValueKind::Enumerated,
            DT_UNSIGNED => ValueKind::Unsigned,
            _ => ValueKind::Signed,
        }
    }

    /// Short protocol label ("F1".."F5").
    pub fn label(&self) -> &'static str {
        match self {
            ValueKind::Signed => "F1",
            ValueKind::Text => "F2",
            ValueKind::Enumerated => "F3",
            ValueKind::Unsigned => "F4",
            ValueKind::Hex => "F5",
        }
    }

    /// Value size in bytes, `None` for length-prefixed text.
    pub fn fixed_length(&self) -> Option<usize> {
        match self {
            ValueKind::Text => None,
            _ => Some(DATA_UNIT_FIXED_VALUE_LEN),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind lookup: the default table plus per-type-word overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindTable {
    overrides: Vec<(u16, ValueKind)>,
}

impl KindTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the kind for one type word. A later override for the same
    /// word wins.
    pub fn set(&mut self, type_word: u16, kind: ValueKind) {
        self.overrides.retain(|(word, _)| *word != type_word);
        self.overrides.push((type_word, kind));
    }

    pub fn lookup(&self, type_word: u16) -> ValueKind {
        self.overrides
            .iter()
            .find(|(word, _)| *word == type_word)
            .map(|(_, kind)| *kind)
            .unwrap_or_else(|| ValueKind::from_type_word(type_word))
    }
}

/// A decoded data unit value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DataValue {
    Signed(i32),
    Unsigned(u32),
    Text(String),
    Hex(String),
}

impl DataValue {
    /// Integer view of numeric values.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DataValue::Signed(v) => Some(i64::from(*v)),
            DataValue::Unsigned(v) => Some(i64::from(*v)),
            DataValue::Text(_) | DataValue::Hex(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Signed(v) => write!(f, "{v}"),
            DataValue::Unsigned(v) => write!(f, "{v}"),
            DataValue::Text(s) => write!(f, "\"{s}\""),
            DataValue::Hex(s) => write!(f, "0x{s}"),
        }
    }
}

/// Parses one value of `kind`, returning it with the number of value bytes
/// it declared (4 for fixed kinds, the length prefix for text).
///
/// Fails without consuming anything when the input is too short.
pub fn parse_value(kind: ValueKind, input: &[u8]) -> IResult<&[u8], (DataValue, usize)> {
    match kind {
        ValueKind::Text => {
            let (input, text_length) = be_u16(input)?;
            let (input, raw) = take(text_length)(input)?;
            Ok((input, (DataValue::Text(ascii_lossy(raw)), usize::from(text_length))))
        }
        ValueKind::Signed | ValueKind::Enumerated => {
            let (input, v) = be_i32(input)?;
            Ok((input, (DataValue::Signed(v), DATA_UNIT_FIXED_VALUE_LEN)))
        }
        ValueKind::Unsigned => {
            let (input, v) = be_u32(input)?;
            Ok((input, (DataValue::Unsigned(v), DATA_UNIT_FIXED_VALUE_LEN)))
        }
        ValueKind::Hex => {
            let (input, raw) = take(DATA_UNIT_FIXED_VALUE_LEN)(input)?;
            Ok((input, (DataValue::Hex(hex::encode_upper(raw)), DATA_UNIT_FIXED_VALUE_LEN)))
        }
    }
}

/// ASCII decode that drops non-ASCII bytes instead of failing.
fn ascii_lossy(raw: &[u8]) -> String {
    raw.iter().filter(|b| b.is_ascii()).map(|&b| char::from(b)).collect()
}
