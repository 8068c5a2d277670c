//! Table rendering
//!
//! Display rows and tabs shared by food and drink tables, plus a markdown
//! text rendering of a whole recipe.

use serde::Serialize;

use super::drink_table::render_drink_table;
use super::food_table::render_food_table;
use super::format::format_quantity;
use crate::models::{Ingredient, Recipe, RecipeResult, TableSpec};

/// One ingredient line ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub name: String,
    /// Quantity with its unit, e.g. "1 1/2 cups"
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DisplayRow {
    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            quantity: format_quantity(ingredient.quantity, ingredient.unit.as_deref()),
            notes: ingredient.notes.clone(),
        }
    }
}

/// A tab of an ingredient table: one unit or one system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableTab {
    pub label: String,
    pub rows: Vec<DisplayRow>,
}

/// An ingredient table resolved for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTable {
    pub tabs: Vec<TableTab>,
    /// Index of the tab shown first, None when the base tab was excluded
    pub default_tab: Option<usize>,
}

/// A recipe with its rendered ingredient table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRecipe {
    pub title: String,
    pub table: RenderedTable,
}

/// Render a recipe's ingredient table
///
/// Conversion failures surface as `RecipeError::Conversion`.
pub fn render_recipe(recipe: &Recipe) -> RecipeResult<RenderedRecipe> {
    let table = match &recipe.table {
        TableSpec::Food {
            base_system,
            ingredients,
        } => render_food_table(ingredients, *base_system)?,
        TableSpec::Drink {
            base_unit,
            excluded_units,
            ingredients,
        } => render_drink_table(ingredients, *base_unit, excluded_units)?,
    };

    Ok(RenderedRecipe {
        title: recipe.title.clone(),
        table,
    })
}

/// Render a recipe as markdown, one table per tab
pub fn render_text(rendered: &RenderedRecipe) -> String {
    let mut out = format!("# {}\n", rendered.title);

    for (index, tab) in rendered.table.tabs.iter().enumerate() {
        let marker = if rendered.table.default_tab == Some(index) {
            " (default)"
        } else {
            ""
        };
        out.push_str(&format!("\n## {}{}\n\n", tab.label, marker));
        out.push_str("| Ingredient | Quantity | Notes |\n");
        out.push_str("| :--- | :---: | :---: |\n");
        for row in &tab.rows {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                row.name,
                row.quantity,
                row.notes.as_deref().unwrap_or("")
            ));
        }
    }

    out
}
