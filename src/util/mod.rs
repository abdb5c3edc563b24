//! # Utility Modules
//!
//! Hex encoding/decoding and hex-dump logging helpers shared by the decoder,
//! the report renderer and the CLI.

pub mod hex;
pub mod logging;

// Re-export commonly used types and functions
pub use hex::{decode_hex, encode_hex_upper, format_hex_compact, HexError};
pub use logging::log_frame_hex;
