//! Recipe model
//!
//! A recipe page's ingredient table, as loaded from a JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Ingredient;
use crate::conversion::ConversionError;
use crate::units::{System, Unit};

/// Recipe loading and rendering errors
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Failed to read recipe: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid recipe JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),
}

/// Result type for recipe operations
pub type RecipeResult<T> = Result<T, RecipeError>;

/// Ingredient table definition, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TableSpec {
    /// Food: imperial and metric tabs, quantities carry their own units
    Food {
        base_system: System,
        ingredients: Vec<Ingredient>,
    },
    /// Drink: one tab per volume unit, quantities are in `base_unit`
    Drink {
        base_unit: Unit,
        #[serde(default)]
        excluded_units: Vec<Unit>,
        ingredients: Vec<Ingredient>,
    },
}

impl TableSpec {
    pub fn ingredients(&self) -> &[Ingredient] {
        match self {
            TableSpec::Food { ingredients, .. } | TableSpec::Drink { ingredients, .. } => {
                ingredients
            }
        }
    }
}

/// A recipe with its ingredient table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(flatten)]
    pub table: TableSpec,
}

impl Recipe {
    /// Parse a recipe from a JSON string
    pub fn from_json(json: &str) -> RecipeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a recipe from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> RecipeResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_food_recipe() {
        let recipe = Recipe::from_json(
            r#"{
                "title": "Pound cake",
                "kind": "food",
                "base_system": "imperial",
                "ingredients": [
                    {"name": "butter", "quantity": 1, "unit": "lbs"},
                    {"name": "eggs", "quantity": 4}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(recipe.title, "Pound cake");
        match &recipe.table {
            TableSpec::Food { base_system, ingredients } => {
                assert_eq!(*base_system, System::Imperial);
                assert_eq!(ingredients.len(), 2);
            }
            other => panic!("expected food table, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_drink_recipe_defaults_exclusions() {
        let recipe = Recipe::from_json(
            r#"{
                "title": "Daiquiri",
                "kind": "drink",
                "base_unit": "oz",
                "ingredients": [{"name": "rum", "quantity": 2}]
            }"#,
        )
        .unwrap();

        assert_eq!(
            recipe.table,
            TableSpec::Drink {
                base_unit: Unit::Oz,
                excluded_units: vec![],
                ingredients: vec![Ingredient::new("rum", 2.0)],
            }
        );
        assert_eq!(recipe.table.ingredients().len(), 1);
    }

    #[test]
    fn test_rejects_unknown_base_unit() {
        let err = Recipe::from_json(
            r#"{"title": "x", "kind": "drink", "base_unit": "jigger", "ingredients": []}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RecipeError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Recipe::from_path("/nonexistent/recipe.json").unwrap_err();
        assert!(matches!(err, RecipeError::Io(_)));
    }
}
