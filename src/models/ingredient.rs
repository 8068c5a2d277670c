//! Ingredient model
//!
//! An ingredient line as authored in a recipe page.

use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// An ingredient with a quantity and an optional unit
///
/// The unit is kept as authored. Labels that are not a known unit
/// ("pinch", "dashes") are free text and never converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: None,
            notes: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Get the recognized unit, if the label is one
    pub fn known_unit(&self) -> Option<Unit> {
        self.unit.as_deref().and_then(Unit::parse_label)
    }

    /// Copy of this ingredient with a new quantity and unit
    pub fn converted(&self, quantity: f64, unit: Unit) -> Self {
        Self {
            quantity,
            unit: Some(unit.to_string()),
            ..self.clone()
        }
    }
}
