//! Conversion error types

use thiserror::Error;

use crate::units::Unit;

/// Conversion error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Unrecognized unit: '{0}'")]
    InvalidUnit(String),

    #[error("Unrecognized unit system: '{0}' (expected metric or imperial)")]
    InvalidSystem(String),

    #[error("Cannot convert {from} to {to}: mass and volume do not mix")]
    CrossFamily { from: Unit, to: Unit },

    #[error("No conversion path from {from} to {to}")]
    Unreachable { from: Unit, to: Unit },

    #[error("Unsupported base unit for drink tables: {0}")]
    UnsupportedBaseUnit(Unit),
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
