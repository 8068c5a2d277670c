//! Unit conversion module
//!
//! Conversion tables, rounding rules and imperial unit selection.

pub mod error;
pub mod rounding;
pub mod selector;
pub mod table;

pub use error::{ConversionError, ConversionResult};
pub use rounding::{round_to_nearest_five, round_to_nearest_quarter, round_to_nearest_ten, Rounding};
pub use selector::{imperial_volume_unit_for_tsp, select_imperial_volume_unit};
pub use table::{convert, Conversion, ConversionTable, Factor};
