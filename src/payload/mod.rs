//! The payload module decodes the data units that follow the frame header:
//! address-table numbers, value kinds and the unit scanner itself.

pub mod table;
pub mod unit;
pub mod value;

pub use table::table_number;
pub use unit::{parse_data_unit, scan_data_units, DataUnit, UnitContext};
pub use value::{parse_value, DataValue, KindTable, ValueKind};
