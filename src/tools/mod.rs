//! Ingredient table tools
//!
//! Resolve ingredient lists into display tables for each unit system.

pub mod drink_table;
pub mod food_table;
pub mod format;
pub mod render;

pub use drink_table::{render_drink_table, DRINK_TAB_UNITS};
pub use food_table::{convert_ingredient, convert_ingredient_units, render_food_table};
pub use format::{format_decimal, format_fraction, format_quantity};
pub use render::{render_recipe, render_text, DisplayRow, RenderedRecipe, RenderedTable, TableTab};
