//! Daily water intake
//!
//! Baseline of 35 ml per kg of body weight, scaled by activity and climate.

use serde::{Deserialize, Serialize};

use super::categories::{Climate, WaterActivity};
use super::error::{ensure_finite, ensure_positive, HealthResult};
use super::units::{round_to_tenth, weight_to_kg, UnitSystem, ML_PER_CUP, ML_PER_FL_OZ, ML_PER_LITER};

/// Baseline milliliters per kilogram of body weight
pub const ML_PER_KG: f64 = 35.0;

/// Recommended daily intake in three units at once
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterIntakeResult {
    pub liters: f64,
    pub cups: f64,
    pub ounces: f64,
}

impl WaterIntakeResult {
    fn from_ml(ml: f64) -> Self {
        Self {
            liters: round_to_tenth(ml / ML_PER_LITER),
            cups: round_to_tenth(ml / ML_PER_CUP),
            ounces: round_to_tenth(ml / ML_PER_FL_OZ),
        }
    }
}

/// Unrounded total intake in milliliters
pub fn water_intake_ml(weight_kg: f64, activity: WaterActivity, climate: Climate) -> f64 {
    weight_kg * ML_PER_KG * activity.multiplier() * climate.multiplier()
}

/// Calculate daily water intake; weight is kg (metric) or lb (imperial)
pub fn calculate_water_intake(
    weight: f64,
    activity: WaterActivity,
    climate: Climate,
    unit_system: UnitSystem,
) -> HealthResult<WaterIntakeResult> {
    let weight_kg = weight_to_kg(ensure_positive("weight", weight)?, unit_system);
    let total_ml = ensure_finite("weight", water_intake_ml(weight_kg, activity, climate))?;

    tracing::debug!(
        weight_kg,
        activity = activity.as_str(),
        climate = climate.as_str(),
        total_ml,
        "calculated water intake"
    );

    Ok(WaterIntakeResult::from_ml(total_ml))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderate_normal_metric() {
        // 70 * 35 = 2450 ml, * 1.2 = 2940 ml
        let result =
            calculate_water_intake(70.0, WaterActivity::Moderate, Climate::Normal, UnitSystem::Metric)
                .unwrap();
        assert_eq!(result.liters, 2.9);
        assert_eq!(result.cups, 12.3);
        assert_eq!(result.ounces, 99.4);
    }

    #[test]
    fn test_baseline() {
        assert!((water_intake_ml(70.0, WaterActivity::Low, Climate::Normal) - 2450.0).abs() < 1e-9);
    }

    #[test]
    fn test_hot_climate_high_activity() {
        // 80 * 35 * 1.5 * 1.2 = 5040 ml
        let result =
            calculate_water_intake(80.0, WaterActivity::High, Climate::Hot, UnitSystem::Metric).unwrap();
        assert_eq!(result.liters, 5.0);
        assert_eq!(result.cups, 21.0);
        assert_eq!(result.ounces, 170.4);
    }

    #[test]
    fn test_imperial_weight() {
        let metric =
            calculate_water_intake(70.0, WaterActivity::Low, Climate::Humid, UnitSystem::Metric).unwrap();
        let imperial = calculate_water_intake(
            70.0 / 0.453592,
            WaterActivity::Low,
            Climate::Humid,
            UnitSystem::Imperial,
        )
        .unwrap();
        assert!((metric.liters - imperial.liters).abs() <= 0.1);
        assert!((metric.ounces - imperial.ounces).abs() <= 0.1);
    }

    #[test]
    fn test_rejects_weights_that_overflow() {
        let err = calculate_water_intake(1e307, WaterActivity::High, Climate::Hot, UnitSystem::Metric)
            .unwrap_err();
        assert_eq!(err.field(), "weight");
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        assert!(calculate_water_intake(0.0, WaterActivity::Low, Climate::Normal, UnitSystem::Metric).is_err());
    }
}
