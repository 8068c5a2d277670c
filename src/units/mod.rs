//! Measurement units
//!
//! Unit tags, families and display systems.

mod unit;

pub use unit::{Family, System, Unit};
