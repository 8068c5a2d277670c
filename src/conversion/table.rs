//! Conversion tables
//!
//! A table is a directed graph over units: each edge is a fixed factor plus
//! an optional rounding rule. Pairs without a direct edge are routed through
//! one intermediate unit, picked in edge declaration order.

use super::error::{ConversionError, ConversionResult};
use super::rounding::Rounding;
use crate::units::Unit;

// ============================================================================
// Conversion Constants
// ============================================================================

/// Grams per pound
pub const G_PER_LB: f64 = 453.592;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 14.787;
/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 4.929;
/// Tablespoons per cup
pub const TBSP_PER_CUP: f64 = 16.0;
/// Teaspoons per cup
pub const TSP_PER_CUP: f64 = 48.0;
/// Teaspoons per tablespoon
pub const TSP_PER_TBSP: f64 = 3.0;
/// Milliliters per fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.5735;
/// Milliliters per part
pub const ML_PER_PART: f64 = 44.3603;
/// Fluid ounces per part
pub const OZ_PER_PART: f64 = 1.5;
/// Fluid ounces per cup
pub const OZ_PER_CUP: f64 = 8.0;
/// Parts per cup
pub const PARTS_PER_CUP: f64 = 5.333;

/// How an edge scales its input
///
/// Kept as multiply/divide rather than a single reciprocal factor so results
/// match the published tables to the last digit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor {
    Multiply(f64),
    Divide(f64),
}

impl Factor {
    pub fn apply(&self, quantity: f64) -> f64 {
        match self {
            Factor::Multiply(k) => quantity * k,
            Factor::Divide(k) => quantity / k,
        }
    }
}

/// A direct conversion from one unit to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub from: Unit,
    pub to: Unit,
    pub factor: Factor,
    pub rounding: Rounding,
}

impl Conversion {
    pub const fn new(from: Unit, to: Unit, factor: Factor, rounding: Rounding) -> Self {
        Self {
            from,
            to,
            factor,
            rounding,
        }
    }

    pub const fn raw(from: Unit, to: Unit, factor: Factor) -> Self {
        Self::new(from, to, factor, Rounding::None)
    }

    pub fn apply(&self, quantity: f64) -> f64 {
        self.rounding.apply(self.factor.apply(quantity))
    }
}

use Factor::{Divide, Multiply};
use Unit::{Cups, Lbs, Ml, Oz, Parts, Tbsp, Tsp, G};

/// Milliliters to teaspoons, also used to size imperial volumes
pub const ML_TO_TSP: Conversion = Conversion::raw(Ml, Tsp, Divide(ML_PER_TSP));

const FOOD_CONVERSIONS: &[Conversion] = &[
    Conversion::new(G, Lbs, Divide(G_PER_LB), Rounding::NearestQuarter),
    Conversion::raw(Ml, Cups, Divide(ML_PER_CUP)),
    Conversion::raw(Ml, Tbsp, Divide(ML_PER_TBSP)),
    ML_TO_TSP,
    Conversion::new(Lbs, G, Multiply(G_PER_LB), Rounding::UpToFive),
    Conversion::new(Cups, Ml, Multiply(ML_PER_CUP), Rounding::UpToTen),
    Conversion::raw(Cups, Tbsp, Multiply(TBSP_PER_CUP)),
    Conversion::raw(Cups, Tsp, Multiply(TSP_PER_CUP)),
    Conversion::new(Tbsp, Ml, Multiply(ML_PER_TBSP), Rounding::UpToTen),
    Conversion::raw(Tbsp, Cups, Divide(TBSP_PER_CUP)),
    Conversion::raw(Tbsp, Tsp, Multiply(TSP_PER_TBSP)),
    Conversion::new(Tsp, Ml, Multiply(ML_PER_TSP), Rounding::UpToTen),
    Conversion::raw(Tsp, Cups, Divide(TSP_PER_CUP)),
    Conversion::raw(Tsp, Tbsp, Divide(TSP_PER_TBSP)),
];

const DRINK_CONVERSIONS: &[Conversion] = &[
    Conversion::raw(Oz, Parts, Divide(OZ_PER_PART)),
    Conversion::raw(Oz, Ml, Multiply(ML_PER_FL_OZ)),
    Conversion::raw(Oz, Cups, Divide(OZ_PER_CUP)),
    Conversion::raw(Ml, Parts, Divide(ML_PER_PART)),
    Conversion::raw(Ml, Oz, Divide(ML_PER_FL_OZ)),
    Conversion::raw(Ml, Cups, Divide(ML_PER_CUP)),
    Conversion::raw(Parts, Oz, Multiply(OZ_PER_PART)),
    Conversion::raw(Parts, Ml, Multiply(ML_PER_PART)),
    Conversion::raw(Parts, Cups, Divide(PARTS_PER_CUP)),
    Conversion::raw(Cups, Parts, Multiply(PARTS_PER_CUP)),
    Conversion::raw(Cups, Oz, Multiply(OZ_PER_CUP)),
    Conversion::raw(Cups, Ml, Multiply(ML_PER_CUP)),
];

/// An immutable set of conversions between units
#[derive(Debug, Clone, Copy)]
pub struct ConversionTable {
    name: &'static str,
    edges: &'static [Conversion],
}

impl ConversionTable {
    /// Build a table from a static edge list
    pub const fn new(name: &'static str, edges: &'static [Conversion]) -> Self {
        Self { name, edges }
    }

    /// Food table: grams, pounds and kitchen volumes, with display rounding
    pub const fn food() -> Self {
        Self {
            name: "food",
            edges: FOOD_CONVERSIONS,
        }
    }

    /// Drink table: ml, oz, parts and cups, unrounded
    pub const fn drink() -> Self {
        Self {
            name: "drink",
            edges: DRINK_CONVERSIONS,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All edges in declaration order
    pub fn edges(&self) -> &'static [Conversion] {
        self.edges
    }

    /// Units that have at least one outgoing edge, in declaration order
    pub fn units(&self) -> Vec<Unit> {
        let mut units = Vec::new();
        for edge in self.edges {
            if !units.contains(&edge.from) {
                units.push(edge.from);
            }
        }
        units
    }

    pub fn contains(&self, unit: Unit) -> bool {
        self.edges.iter().any(|e| e.from == unit)
    }

    /// Get the direct edge between two units, if any
    pub fn direct(&self, from: Unit, to: Unit) -> Option<&'static Conversion> {
        self.edges.iter().find(|e| e.from == from && e.to == to)
    }

    /// Convert a quantity between two units of the same family
    ///
    /// Uses the direct edge when one exists, otherwise routes through the
    /// first unit reachable from `from` that has a direct edge to `to`.
    pub fn convert(&self, quantity: f64, from: Unit, to: Unit) -> ConversionResult<f64> {
        if from == to {
            return Ok(quantity);
        }

        if from.family() != to.family() {
            return Err(ConversionError::CrossFamily { from, to });
        }

        if let Some(edge) = self.direct(from, to) {
            return Ok(edge.apply(quantity));
        }

        let (first, second) = self
            .edges
            .iter()
            .filter(|e| e.from == from)
            .find_map(|first| self.direct(first.to, to).map(|second| (first, second)))
            .ok_or(ConversionError::Unreachable { from, to })?;

        tracing::debug!(
            "Routing {} -> {} through {} ({} table)",
            from,
            to,
            first.to,
            self.name
        );
        Ok(second.apply(first.apply(quantity)))
    }
}

/// Convert a quantity with the food table
pub fn convert(quantity: f64, from: Unit, to: Unit) -> ConversionResult<f64> {
    ConversionTable::food().convert(quantity, from, to)
}
