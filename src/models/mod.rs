//! Data models
//!
//! Ingredients and recipes as authored in recipe pages.

mod ingredient;
mod recipe;

pub use ingredient::Ingredient;
pub use recipe::{Recipe, RecipeError, RecipeResult, TableSpec};
