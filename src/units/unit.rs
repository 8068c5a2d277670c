//! Unit types
//!
//! Provides the measurement units recognized by the conversion tables and
//! their partition into families and display systems.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;

/// A measurement unit used in ingredient tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Milliliters
    Ml,
    /// Fluid ounces
    Oz,
    /// Cocktail parts (1 part = 1.5 oz)
    Parts,
    /// US cups
    Cups,
    /// Tablespoons
    Tbsp,
    /// Teaspoons
    Tsp,
    /// Grams
    G,
    /// Pounds
    Lbs,
}

/// Physical family of a unit; conversions never cross families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Mass,
    Volume,
}

/// Display system a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum System {
    Imperial,
    Metric,
}

impl Unit {
    /// Every unit, in display order
    pub const ALL: [Unit; 8] = [
        Unit::Ml,
        Unit::Oz,
        Unit::Parts,
        Unit::Cups,
        Unit::Tbsp,
        Unit::Tsp,
        Unit::G,
        Unit::Lbs,
    ];

    /// Get the canonical label for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Ml => "ml",
            Unit::Oz => "oz",
            Unit::Parts => "parts",
            Unit::Cups => "cups",
            Unit::Tbsp => "tbsp",
            Unit::Tsp => "tsp",
            Unit::G => "g",
            Unit::Lbs => "lbs",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Unit::G | Unit::Lbs => Family::Mass,
            Unit::Ml | Unit::Oz | Unit::Parts | Unit::Cups | Unit::Tbsp | Unit::Tsp => {
                Family::Volume
            }
        }
    }

    pub fn system(&self) -> System {
        match self {
            Unit::G | Unit::Ml => System::Metric,
            _ => System::Imperial,
        }
    }

    pub fn is_metric(&self) -> bool {
        self.system() == System::Metric
    }

    pub fn is_imperial(&self) -> bool {
        self.system() == System::Imperial
    }

    /// Parse a free-form unit label
    ///
    /// Returns None for anything that is not a canonical unit label, so
    /// callers can treat it as free text ("pinch", "dashes", ...).
    pub fn parse_label(label: &str) -> Option<Self> {
        let lower = label.to_lowercase();
        let trimmed = lower.trim();

        Unit::ALL.into_iter().find(|unit| unit.as_str() == trimmed)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse_label(s).ok_or_else(|| ConversionError::InvalidUnit(s.trim().to_string()))
    }
}

impl System {
    pub fn as_str(&self) -> &'static str {
        match self {
            System::Imperial => "imperial",
            System::Metric => "metric",
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for System {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "imperial" => Ok(System::Imperial),
            "metric" => Ok(System::Metric),
            other => Err(ConversionError::InvalidSystem(other.to_string())),
        }
    }
}
