//! Food ingredient tables
//!
//! Converts food ingredient lists between metric and imperial, and lays them
//! out as an imperial tab and a metric tab.

use crate::conversion::{select_imperial_volume_unit, ConversionResult, ConversionTable};
use crate::models::Ingredient;
use crate::units::{System, Unit};

use super::render::{DisplayRow, RenderedTable, TableTab};

/// Tab order for food tables
const FOOD_TABS: [System; 2] = [System::Imperial, System::Metric];

/// Metric unit paired with an imperial food unit
fn metric_counterpart(unit: Unit) -> Option<Unit> {
    match unit {
        Unit::Lbs => Some(Unit::G),
        Unit::Cups | Unit::Tbsp | Unit::Tsp => Some(Unit::Ml),
        _ => None,
    }
}

/// Imperial unit for a metric food quantity
///
/// Volumes pick a unit by magnitude; grams become pounds.
fn imperial_counterpart(unit: Unit, quantity: f64) -> Option<Unit> {
    match unit {
        Unit::Ml => Some(select_imperial_volume_unit(quantity)),
        Unit::G => Some(Unit::Lbs),
        _ => None,
    }
}

/// Convert a single ingredient toward a display system
///
/// Ingredients without a food unit, or already in the requested system, come
/// back unchanged.
pub fn convert_ingredient(ingredient: &Ingredient, to_metric: bool) -> ConversionResult<Ingredient> {
    let table = ConversionTable::food();

    let Some(unit) = ingredient.known_unit().filter(|u| table.contains(*u)) else {
        tracing::trace!("Passing through '{}': no food unit", ingredient.name);
        return Ok(ingredient.clone());
    };

    if unit.is_metric() == to_metric {
        return Ok(ingredient.clone());
    }

    let target = if to_metric {
        metric_counterpart(unit)
    } else {
        imperial_counterpart(unit, ingredient.quantity)
    };
    let Some(target) = target else {
        return Ok(ingredient.clone());
    };

    let quantity = table.convert(ingredient.quantity, unit, target)?;

    // Under an eighth of a pound rounds to 0 lbs; keep the grams instead
    if target == Unit::Lbs && quantity == 0.0 && ingredient.quantity > 0.0 {
        tracing::debug!(
            "Keeping '{}' in grams: {} g rounds to 0 lbs",
            ingredient.name,
            ingredient.quantity
        );
        return Ok(ingredient.clone());
    }
    tracing::debug!(
        "Converted '{}': {} {} -> {} {}",
        ingredient.name,
        ingredient.quantity,
        unit,
        quantity,
        target
    );

    Ok(ingredient.converted(quantity, target))
}

/// Convert every ingredient toward metric (`to_metric`) or imperial
pub fn convert_ingredient_units(
    ingredients: &[Ingredient],
    to_metric: bool,
) -> ConversionResult<Vec<Ingredient>> {
    ingredients
        .iter()
        .map(|ingredient| convert_ingredient(ingredient, to_metric))
        .collect()
}

/// Render a food ingredient table with imperial and metric tabs
pub fn render_food_table(
    ingredients: &[Ingredient],
    base_system: System,
) -> ConversionResult<RenderedTable> {
    let mut tabs = Vec::with_capacity(FOOD_TABS.len());

    for system in FOOD_TABS {
        let converted = convert_ingredient_units(ingredients, system == System::Metric)?;
        tabs.push(TableTab {
            label: system.to_string(),
            rows: converted.iter().map(DisplayRow::from_ingredient).collect(),
        });
    }

    Ok(RenderedTable {
        default_tab: FOOD_TABS.iter().position(|s| *s == base_system),
        tabs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_one(ingredient: Ingredient, to_metric: bool) -> Ingredient {
        convert_ingredient_units(&[ingredient], to_metric)
            .unwrap()
            .remove(0)
    }

    #[test]
    fn test_cups_to_metric() {
        let result = convert_one(Ingredient::new("milk", 1.0).with_unit("cups"), true);
        assert_eq!(result.quantity, 240.0);
        assert_eq!(result.unit.as_deref(), Some("ml"));
    }

    #[test]
    fn test_lbs_to_metric() {
        let result = convert_one(Ingredient::new("butter", 2.0).with_unit("lbs"), true);
        assert_eq!(result.quantity, 910.0);
        assert_eq!(result.unit.as_deref(), Some("g"));
    }

    #[test]
    fn test_spoons_to_metric() {
        let tbsp = convert_one(Ingredient::new("oil", 2.0).with_unit("tbsp"), true);
        assert_eq!(tbsp.quantity, 30.0);
        assert_eq!(tbsp.unit.as_deref(), Some("ml"));

        let tsp = convert_one(Ingredient::new("salt", 1.0).with_unit("tsp"), true);
        assert_eq!(tsp.quantity, 10.0);
    }

    #[test]
    fn test_ml_to_imperial_picks_unit_by_size() {
        let vanilla = convert_one(Ingredient::new("vanilla", 5.0).with_unit("ml"), false);
        assert_eq!(vanilla.unit.as_deref(), Some("tsp"));
        assert!((vanilla.quantity - 5.0 / 4.929).abs() < 1e-9);

        let vinegar = convert_one(Ingredient::new("vinegar", 30.0).with_unit("ml"), false);
        assert_eq!(vinegar.unit.as_deref(), Some("tbsp"));
        assert!((vinegar.quantity - 30.0 / 14.787).abs() < 1e-9);

        let stock = convert_one(Ingredient::new("stock", 500.0).with_unit("ml"), false);
        assert_eq!(stock.unit.as_deref(), Some("cups"));
        assert!((stock.quantity - 500.0 / 236.588).abs() < 1e-9);
    }

    #[test]
    fn test_grams_to_imperial() {
        let flour = convert_one(Ingredient::new("flour", 500.0).with_unit("g"), false);
        assert_eq!(flour.unit.as_deref(), Some("lbs"));
        // 500 / 453.592 = 1.102 -> 1
        assert_eq!(flour.quantity, 1.0);
    }

    #[test]
    fn test_small_gram_amounts_stay_in_grams() {
        let flour = Ingredient::new("flour", 50.0).with_unit("g");
        assert_eq!(convert_one(flour.clone(), false), flour);

        // 60 g is just over an eighth of a pound and rounds to 1/4 lbs
        let butter = convert_one(Ingredient::new("butter", 60.0).with_unit("g"), false);
        assert_eq!(butter.unit.as_deref(), Some("lbs"));
        assert_eq!(butter.quantity, 0.25);
    }

    #[test]
    fn test_render_keeps_small_grams_visible() {
        let ingredients = vec![Ingredient::new("yeast", 7.0).with_unit("g")];
        let table = render_food_table(&ingredients, System::Imperial).unwrap();
        assert_eq!(table.tabs[0].rows[0].quantity, "7 g");
        assert_eq!(table.tabs[1].rows[0].quantity, "7 g");
    }

    #[test]
    fn test_same_system_passes_through() {
        let cups = Ingredient::new("milk", 1.5).with_unit("cups");
        assert_eq!(convert_one(cups.clone(), false), cups);

        let grams = Ingredient::new("sugar", 123.4).with_unit("g");
        assert_eq!(convert_one(grams.clone(), true), grams);
    }

    #[test]
    fn test_free_text_passes_through() {
        let pinch = Ingredient::new("salt", 1.0).with_unit("pinch");
        assert_eq!(convert_one(pinch.clone(), true), pinch);
        assert_eq!(convert_one(pinch.clone(), false), pinch);

        let eggs = Ingredient::new("eggs", 3.0);
        assert_eq!(convert_one(eggs.clone(), true), eggs);
    }

    #[test]
    fn test_drink_units_pass_through() {
        let oz = Ingredient::new("cream", 4.0).with_unit("oz");
        assert_eq!(convert_one(oz.clone(), true), oz);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let ingredients = vec![Ingredient::new("milk", 1.0).with_unit("cups")];
        let converted = convert_ingredient_units(&ingredients, true).unwrap();
        assert_eq!(ingredients[0].unit.as_deref(), Some("cups"));
        assert_eq!(converted[0].unit.as_deref(), Some("ml"));
    }

    #[test]
    fn test_render_food_table() {
        let ingredients = vec![
            Ingredient::new("butter", 2.0).with_unit("lbs"),
            Ingredient::new("salt", 1.0).with_unit("pinch").with_notes("flaky"),
        ];
        let table = render_food_table(&ingredients, System::Metric).unwrap();

        assert_eq!(table.default_tab, Some(1));
        assert_eq!(table.tabs[0].label, "imperial");
        assert_eq!(table.tabs[1].label, "metric");
        assert_eq!(table.tabs[0].rows[0].quantity, "2 lbs");
        assert_eq!(table.tabs[1].rows[0].quantity, "910 g");
        assert_eq!(table.tabs[1].rows[1].quantity, "1 pinch");
        assert_eq!(table.tabs[1].rows[1].notes.as_deref(), Some("flaky"));
    }
}
