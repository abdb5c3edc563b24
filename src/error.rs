//! # Frame Error Handling
//!
//! This module defines the FrameError enum, which represents the different error
//! types that can occur in the meterframe-rs crate.
//!
//! Running out of bytes while scanning data units or the trailer is not an
//! error: the decoder returns a shorter [`crate::Frame`] instead.

use crate::util::hex::HexError;
use thiserror::Error;

/// Represents the different error types that can occur while decoding a frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// The buffer cannot hold the fixed header. No partial frame is produced.
    #[error("Truncated header: need 15 bytes, got {actual}")]
    TruncatedHeader { actual: usize },

    /// Strict length mode only: the declared length cannot cover the address
    /// and function fields, or runs past the buffer.
    #[error("Declared length {declared} does not fit the {available} bytes after the start markers")]
    LengthMismatch { declared: u16, available: usize },

    /// Indicates an invalid hexadecimal string was provided.
    #[error("Invalid hexadecimal string: {0}")]
    InvalidHex(#[from] HexError),
}
