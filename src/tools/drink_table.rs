//! Drink ingredient tables
//!
//! Drink quantities are authored in a single base unit and shown in one tab
//! per volume unit. Ingredients with their own unit ("2 dashes") are shown
//! as authored in every tab.

use crate::conversion::{round_to_nearest_five, ConversionError, ConversionResult, ConversionTable};
use crate::models::Ingredient;
use crate::units::Unit;

use super::format::{format_decimal, format_fraction};
use super::render::{DisplayRow, RenderedTable, TableTab};

/// Tab order for drink tables
pub const DRINK_TAB_UNITS: [Unit; 4] = [Unit::Ml, Unit::Oz, Unit::Parts, Unit::Cups];

fn drink_row(ingredient: &Ingredient, base_unit: Unit, tab_unit: Unit) -> ConversionResult<DisplayRow> {
    let quantity = match ingredient.unit.as_deref() {
        Some(custom) => format!("{} {}", format_decimal(ingredient.quantity, 2), custom),
        None => {
            let value = ConversionTable::drink().convert(ingredient.quantity, base_unit, tab_unit)?;
            let amount = if tab_unit == Unit::Ml {
                format_decimal(round_to_nearest_five(value), 0)
            } else {
                format_fraction(value)
            };
            format!("{} {}", amount, tab_unit)
        }
    };

    Ok(DisplayRow {
        name: ingredient.name.clone(),
        quantity,
        notes: ingredient.notes.clone(),
    })
}

/// Render a drink ingredient table
///
/// `base_unit` is the unit the quantities are written in and selects the
/// default tab. Units in `excluded_units` get no tab.
pub fn render_drink_table(
    ingredients: &[Ingredient],
    base_unit: Unit,
    excluded_units: &[Unit],
) -> ConversionResult<RenderedTable> {
    if !DRINK_TAB_UNITS.contains(&base_unit) {
        return Err(ConversionError::UnsupportedBaseUnit(base_unit));
    }

    let units: Vec<Unit> = DRINK_TAB_UNITS
        .into_iter()
        .filter(|unit| !excluded_units.contains(unit))
        .collect();

    let mut tabs = Vec::with_capacity(units.len());
    for &unit in &units {
        let rows = ingredients
            .iter()
            .map(|ingredient| drink_row(ingredient, base_unit, unit))
            .collect::<ConversionResult<Vec<_>>>()?;
        tabs.push(TableTab {
            label: unit.to_string(),
            rows,
        });
    }

    let default_tab = units.iter().position(|u| *u == base_unit);
    if default_tab.is_none() {
        tracing::warn!("Base unit {} is excluded; no default tab", base_unit);
    }

    Ok(RenderedTable { tabs, default_tab })
}
