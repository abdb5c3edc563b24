//! # Hex Encoding/Decoding Utilities
//!
//! Hex helpers used by the CLI front end, the report renderer and the JSON
//! output. The decoder itself only ever sees raw bytes.
//!
//! ## Usage
//!
//! ```rust
//! use meterframe_rs::util::hex::{decode_hex, encode_hex_upper, format_hex_compact};
//!
//! let data = decode_hex("68 00AB 68").unwrap();
//! assert_eq!(data, [0x68, 0x00, 0xAB, 0x68]);
//! assert_eq!(encode_hex_upper(&data), "6800AB68");
//! assert_eq!(format_hex_compact(&data), "68 00 ab 68");
//! ```

use serde::Serializer;
use thiserror::Error;

/// Errors that can occur during hex operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("Invalid hex character: {0}")]
    InvalidCharacter(char),

    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    #[error("Empty hex string")]
    EmptyString,
}

/// Encode bytes to uppercase hex string
pub fn encode_hex_upper(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Decode a frame given as hex text.
///
/// Whitespace anywhere in the input is ignored, as is any `0x`/`0X` marker,
/// so `"68 00 AB 68"`, `"0x6800ab68"` and `"6800AB68"` are equivalent.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    let cleaned: String = hex_str
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase()
        .replace("0x", "");

    if cleaned.is_empty() {
        return Err(HexError::EmptyString);
    }

    if let Some(bad) = cleaned.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidCharacter(bad));
    }

    if cleaned.len() % 2 != 0 {
        return Err(HexError::OddLength(cleaned.len()));
    }

    hex::decode(&cleaned).map_err(|_| HexError::OddLength(cleaned.len()))
}

/// Format hex data for compact display (useful for logs)
///
/// Formats data as "68 00 ab 68" with spaces between bytes.
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `serialize_with` helper writing byte fields as uppercase hex strings.
pub fn serialize_hex_upper<S, T>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    serializer.serialize_str(&hex::encode_upper(bytes.as_ref()))
}
