//! Imperial volume unit selection
//!
//! Picks the kitchen unit a cook would reach for given a metric volume:
//! teaspoons under a tablespoon, tablespoons under a quarter cup, cups above.

use super::table::ML_TO_TSP;
use crate::units::Unit;

/// Teaspoons in one tablespoon; below this stays in teaspoons
const TBSP_THRESHOLD_TSP: f64 = 3.0;
/// Teaspoons in a quarter cup; at or above this switches to cups
const CUP_THRESHOLD_TSP: f64 = 12.0;

/// Pick the imperial unit for a quantity already expressed in teaspoons
pub fn imperial_volume_unit_for_tsp(quantity_in_tsp: f64) -> Unit {
    if quantity_in_tsp < TBSP_THRESHOLD_TSP {
        Unit::Tsp
    } else if quantity_in_tsp < CUP_THRESHOLD_TSP {
        Unit::Tbsp
    } else {
        Unit::Cups
    }
}

/// Pick the imperial unit for a quantity in milliliters
pub fn select_imperial_volume_unit(quantity_in_ml: f64) -> Unit {
    imperial_volume_unit_for_tsp(ML_TO_TSP.apply(quantity_in_ml))
}
