//! Daily calorie needs
//!
//! BMR uses the Mifflin-St Jeor equation (Mifflin et al., 1990):
//!
//! - male:   10·kg + 6.25·cm − 5·age + 5
//! - female: 10·kg + 6.25·cm − 5·age − 161
//!
//! TDEE scales BMR by the activity multiplier. Loss and gain targets are fixed
//! kcal offsets from the rounded TDEE.

use serde::{Deserialize, Serialize};

use super::categories::{ActivityLevel, Sex};
use super::error::{ensure_finite, HealthResult};
use super::input::{AnthropometricInput, MetricBody};
use super::units::UnitSystem;

/// Daily deficit for mild weight loss (~0.25 kg/week)
pub const MILD_DEFICIT_KCAL: f64 = 250.0;
/// Daily deficit for moderate weight loss (~0.5 kg/week)
pub const MODERATE_DEFICIT_KCAL: f64 = 500.0;
/// Daily deficit for aggressive weight loss (~0.75 kg/week)
pub const AGGRESSIVE_DEFICIT_KCAL: f64 = 750.0;
/// Daily surplus for mild weight gain
pub const MILD_SURPLUS_KCAL: f64 = 250.0;
/// Daily surplus for moderate weight gain
pub const MODERATE_SURPLUS_KCAL: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightLossTargets {
    pub mild: f64,
    pub moderate: f64,
    pub aggressive: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightGainTargets {
    pub mild: f64,
    pub moderate: f64,
}

/// Energy expenditure and intake targets, all in whole kcal/day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieResult {
    pub bmr: f64,
    pub tdee: f64,
    pub weight_loss: WeightLossTargets,
    pub weight_gain: WeightGainTargets,
    pub activity_level: ActivityLevel,
}

/// Unrounded Mifflin-St Jeor BMR in kcal/day
pub fn bmr_mifflin_st_jeor(body: &MetricBody, age: u32, sex: Sex) -> f64 {
    10.0 * body.weight_kg() + 6.25 * body.height_cm() - 5.0 * f64::from(age) + sex.bmr_constant()
}

/// Calculate BMR, TDEE and weight loss/gain targets
///
/// Metric: kg and cm. Imperial: lb and in.
pub fn calculate_calories(
    weight: f64,
    height: f64,
    age: u32,
    sex: Sex,
    activity_level: ActivityLevel,
    unit_system: UnitSystem,
) -> HealthResult<CalorieResult> {
    let input = AnthropometricInput {
        weight,
        height,
        age,
        sex,
        unit_system,
    };
    calculate_calories_for(&input, activity_level)
}

/// Same as [`calculate_calories`], from a prepared profile
pub fn calculate_calories_for(
    input: &AnthropometricInput,
    activity_level: ActivityLevel,
) -> HealthResult<CalorieResult> {
    let body = input.validate()?;

    let bmr = ensure_finite("bmr", bmr_mifflin_st_jeor(&body, input.age, input.sex))?;
    let tdee = ensure_finite("tdee", (bmr * activity_level.multiplier()).round())?;

    tracing::debug!(
        weight_kg = body.weight_kg(),
        height_cm = body.height_cm(),
        age = input.age,
        sex = input.sex.as_str(),
        activity = activity_level.as_str(),
        bmr,
        tdee,
        "calculated calorie needs"
    );

    Ok(CalorieResult {
        bmr: bmr.round(),
        tdee,
        weight_loss: WeightLossTargets {
            mild: tdee - MILD_DEFICIT_KCAL,
            moderate: tdee - MODERATE_DEFICIT_KCAL,
            aggressive: tdee - AGGRESSIVE_DEFICIT_KCAL,
        },
        weight_gain: WeightGainTargets {
            mild: tdee + MILD_SURPLUS_KCAL,
            moderate: tdee + MODERATE_SURPLUS_KCAL,
        },
        activity_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_sedentary_metric() {
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
        let result =
            calculate_calories(70.0, 175.0, 30, Sex::Male, ActivityLevel::Sedentary, UnitSystem::Metric)
                .unwrap();
        assert_eq!(result.bmr, 1649.0);
        assert_eq!(result.tdee, 1979.0);
        assert_eq!(result.weight_loss.mild, 1729.0);
        assert_eq!(result.weight_loss.moderate, 1479.0);
        assert_eq!(result.weight_loss.aggressive, 1229.0);
        assert_eq!(result.weight_gain.mild, 2229.0);
        assert_eq!(result.weight_gain.moderate, 2479.0);
    }

    #[test]
    fn test_female_constant() {
        // 10*60 + 6.25*165 - 5*40 - 161 = 1270.25
        let result =
            calculate_calories(60.0, 165.0, 40, Sex::Female, ActivityLevel::Moderate, UnitSystem::Metric)
                .unwrap();
        assert_eq!(result.bmr, 1270.0);
        // 1270.25 * 1.55 = 1968.8875
        assert_eq!(result.tdee, 1969.0);
    }

    #[test]
    fn test_imperial_matches_metric() {
        let metric =
            calculate_calories(80.0, 180.0, 45, Sex::Male, ActivityLevel::Active, UnitSystem::Metric)
                .unwrap();
        let imperial = calculate_calories(
            80.0 / 0.453592,
            180.0 / 2.54,
            45,
            Sex::Male,
            ActivityLevel::Active,
            UnitSystem::Imperial,
        )
        .unwrap();
        assert!((metric.bmr - imperial.bmr).abs() <= 1.0);
        assert!((metric.tdee - imperial.tdee).abs() <= 1.0);
    }

    #[test]
    fn test_activity_increases_tdee() {
        let tdees: Vec<f64> = ActivityLevel::ALL
            .iter()
            .map(|level| {
                calculate_calories(70.0, 175.0, 30, Sex::Female, *level, UnitSystem::Metric)
                    .unwrap()
                    .tdee
            })
            .collect();
        assert!(tdees.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rejects_weights_that_overflow() {
        let err = calculate_calories(1e308, 175.0, 30, Sex::Male, ActivityLevel::VeryActive, UnitSystem::Metric)
            .unwrap_err();
        assert_eq!(err.field(), "bmr");

        // BMR itself fits, TDEE does not
        let err = calculate_calories(1.5e307, 175.0, 30, Sex::Male, ActivityLevel::VeryActive, UnitSystem::Metric)
            .unwrap_err();
        assert_eq!(err.field(), "tdee");
    }

    #[test]
    fn test_rejects_invalid_profile() {
        let err =
            calculate_calories(70.0, 175.0, 0, Sex::Male, ActivityLevel::Light, UnitSystem::Metric)
                .unwrap_err();
        assert_eq!(err.field(), "age");
        assert!(calculate_calories(70.0, f64::NAN, 30, Sex::Male, ActivityLevel::Light, UnitSystem::Metric).is_err());
    }
}
