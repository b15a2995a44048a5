//! Unit systems and conversion constants
//!
//! Body measurements arrive either as metric (kg, cm) or imperial (lb, in)
//! and are normalised to metric before any formula runs.

use serde::{Deserialize, Serialize};

/// Unit system a caller supplies measurements in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Some(UnitSystem::Metric),
            "imperial" | "us" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }

    /// Unit label for body weight
    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }

    /// Unit label for height
    pub fn height_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }
}

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;
/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;
/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per cup (metric cup, as used for drinking water)
pub const ML_PER_CUP: f64 = 240.0;
/// Milliliters per fluid ounce (US)
pub const ML_PER_FL_OZ: f64 = 29.5735;

// ============================================================================
// Conversions
// ============================================================================

pub fn pounds_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

pub fn kg_to_pounds(kg: f64) -> f64 {
    kg * LB_PER_KG
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_IN
}

/// Body weight in kilograms from a value in the given unit system
pub fn weight_to_kg(weight: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => weight,
        UnitSystem::Imperial => pounds_to_kg(weight),
    }
}

/// Height in centimeters from a value in the given unit system
pub fn height_to_cm(height: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => height,
        UnitSystem::Imperial => inches_to_cm(height),
    }
}

/// Kilograms expressed back in the given unit system
pub fn kg_to_weight(kg: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => kg,
        UnitSystem::Imperial => kg_to_pounds(kg),
    }
}

/// Round half away from zero to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
