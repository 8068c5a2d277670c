//! Cookbook Units Library
//!
//! Metric/imperial conversion and display tables for recipe ingredients.

pub mod build_info;
pub mod config;
pub mod conversion;
pub mod models;
pub mod tools;
pub mod units;

pub use conversion::{convert, ConversionError, ConversionResult, ConversionTable};
pub use units::{Family, System, Unit};
