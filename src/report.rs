//! Human-readable and JSON rendering of decoded frames.
//!
//! Layout of the text report:
//!
//! ```text
//! ========== Frame ==========
//! Start flag: 0x68
//! Length L: 171 (decimal)
//! ...
//! [Unit 1] DA=0680 (table 48) DT=0001 Value=1
//! ...
//! CRC: 0x323F
//! End flag: 0x16
//! ===========================
//! ```

use crate::frame::Frame;
use crate::payload::DataUnit;
use crate::util::hex::encode_hex_upper;
use std::fmt::{self, Write as _};

/// Renders one data unit as a single report line (without the index prefix).
pub fn render_unit(unit: &DataUnit) -> String {
    let mut line = format!(
        "DA={} (table {}) DT={} Value={}",
        unit.da_hex(),
        unit.table_number,
        unit.dt_hex(),
        unit.value
    );
    if let Some(code) = unit.result_code {
        let _ = write!(line, " ResultCode=0x{code:02X}");
    }
    line
}

/// Renders the full text report.
pub fn render(frame: &Frame) -> String {
    frame.to_string()
}

/// Renders the frame as pretty-printed JSON.
pub fn render_json(frame: &Frame) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(frame)
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = &self.header;
        writeln!(f, "========== Frame ==========")?;
        writeln!(f, "Start flag: 0x{:02X}", h.start_flag)?;
        writeln!(f, "Length L: {} (decimal)", h.length)?;
        writeln!(f, "Second start flag: 0x{:02X}", h.start_flag2)?;
        writeln!(f, "Address A: {}", encode_hex_upper(&h.address))?;
        writeln!(f, "AFN: 0x{:02X}", h.function_code)?;
        writeln!(f, "Direction DIR: {} (0=downlink, 1=uplink)", h.direction)?;
        writeln!(f, "SEQ: {}", encode_hex_upper(&h.sequence))?;

        writeln!(f)?;
        writeln!(f, "--- Data units ---")?;
        for (idx, unit) in self.data_units.iter().enumerate() {
            writeln!(f, "[Unit {}] {}", idx + 1, render_unit(unit))?;
        }
        writeln!(f)?;

        match self.crc {
            Some(crc) => writeln!(f, "CRC: 0x{crc:04X}")?,
            None => writeln!(f, "CRC: None")?,
        }
        match self.end_flag {
            Some(end) => writeln!(f, "End flag: 0x{end:02X}")?,
            None => writeln!(f, "End flag: None")?,
        }
        write!(f, "===========================")
    }
}
