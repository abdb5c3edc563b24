//! # Frame Logging Utilities
//!
//! Hex dump helpers used while decoding, so that a `RUST_LOG=trace` run shows
//! exactly which bytes the decoder was handed.

/// Upper bound on bytes written per hex dump line
pub const MAX_LOG_BYTES: usize = 64;

/// Log frame data in hex format for debugging
///
/// Output is limited to [`MAX_LOG_BYTES`] bytes; longer inputs get a
/// total-length suffix instead.
pub fn log_frame_hex(prefix: &str, data: &[u8]) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    log::trace!("{}", frame_hex_line(prefix, data));
}

/// Builds the line emitted by [`log_frame_hex`].
pub fn frame_hex_line(prefix: &str, data: &[u8]) -> String {
    let display_data = &data[..data.len().min(MAX_LOG_BYTES)];
    let hex_str = crate::util::hex::format_hex_compact(display_data);
    if data.len() > MAX_LOG_BYTES {
        format!("{prefix}: {hex_str} ... ({} bytes total)", data.len())
    } else {
        format!("{prefix}: {hex_str}")
    }
}
