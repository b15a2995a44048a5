//! Calculator MCP Tools
//!
//! Turns loosely typed tool arguments into calls on the health calculators.

use serde::Serialize;

use crate::health::bmi::{BMI_HEALTHY_MAX, BMI_NORMAL_MIN, BMI_OBESE_MIN, BMI_OVERWEIGHT_MIN};
use crate::health::calories::{
    AGGRESSIVE_DEFICIT_KCAL, MILD_DEFICIT_KCAL, MILD_SURPLUS_KCAL, MODERATE_DEFICIT_KCAL,
    MODERATE_SURPLUS_KCAL,
};
use crate::health::water::ML_PER_KG;
use crate::health::{
    self, ActivityLevel, BmiResult, CalorieResult, Climate, HealthError, HealthResult, Sex,
    UnitSystem, WaterActivity, WaterIntakeResult,
};

/// Response for calculate_bmi
#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub unit_system: UnitSystem,
    pub weight_unit: &'static str,
    pub height_unit: &'static str,
    #[serde(flatten)]
    pub result: BmiResult,
}

/// Response for calculate_calories
#[derive(Debug, Serialize)]
pub struct CalorieResponse {
    pub unit_system: UnitSystem,
    pub sex: Sex,
    pub age: u32,
    pub activity_description: &'static str,
    #[serde(flatten)]
    pub result: CalorieResult,
}

/// Response for calculate_water_intake
#[derive(Debug, Serialize)]
pub struct WaterIntakeResponse {
    pub unit_system: UnitSystem,
    pub activity_level: WaterActivity,
    pub climate: Climate,
    #[serde(flatten)]
    pub result: WaterIntakeResult,
}

#[derive(Debug, Serialize)]
pub struct MultiplierEntry {
    pub category: &'static str,
    pub multiplier: f64,
}

#[derive(Debug, Serialize)]
pub struct BmiThreshold {
    pub category: &'static str,
    /// Inclusive lower bound, absent for the lowest category
    pub min_bmi: Option<f64>,
}

/// Response for calculator_tables
#[derive(Debug, Serialize)]
pub struct CalculatorTables {
    pub calorie_activity_multipliers: Vec<MultiplierEntry>,
    pub water_activity_multipliers: Vec<MultiplierEntry>,
    pub climate_multipliers: Vec<MultiplierEntry>,
    pub bmi_thresholds: Vec<BmiThreshold>,
    pub healthy_bmi_range: [f64; 2],
    pub weight_loss_deficits_kcal: [f64; 3],
    pub weight_gain_surpluses_kcal: [f64; 2],
    pub water_ml_per_kg: f64,
}

// ============================================================================
// Argument parsing
// ============================================================================

/// Resolve an optional unit system argument against the configured default
pub fn resolve_unit_system(raw: Option<&str>, default: UnitSystem) -> HealthResult<UnitSystem> {
    match raw {
        None => Ok(default),
        Some(s) if s.trim().is_empty() => Ok(default),
        Some(s) => parse_category("unit_system", s, UnitSystem::from_str, "metric, imperial"),
    }
}

fn parse_category<T>(
    field: &'static str,
    raw: &str,
    parse: fn(&str) -> Option<T>,
    expected: &str,
) -> HealthResult<T> {
    parse(raw).ok_or_else(|| {
        HealthError::invalid(field, format!("unknown value '{}', expected one of: {}", raw, expected))
    })
}

fn expected_names<T>(all: &[T], name: fn(&T) -> &'static str) -> String {
    all.iter().map(name).collect::<Vec<_>>().join(", ")
}

fn reject(err: HealthError) -> String {
    tracing::warn!(field = err.field(), "rejected calculator input: {}", err);
    err.to_string()
}

// ============================================================================
// Tool functions
// ============================================================================

/// Calculate BMI and healthy weight range
pub fn calculate_bmi(
    weight: f64,
    height: f64,
    unit_system: Option<&str>,
    default_units: UnitSystem,
) -> Result<BmiResponse, String> {
    let units = resolve_unit_system(unit_system, default_units).map_err(reject)?;
    let result = health::calculate_bmi(weight, height, units).map_err(reject)?;

    Ok(BmiResponse {
        unit_system: units,
        weight_unit: units.weight_unit(),
        height_unit: units.height_unit(),
        result,
    })
}

/// Calculate BMR, TDEE and calorie targets
pub fn calculate_calories(
    weight: f64,
    height: f64,
    age: u32,
    sex: &str,
    activity_level: &str,
    unit_system: Option<&str>,
    default_units: UnitSystem,
) -> Result<CalorieResponse, String> {
    let units = resolve_unit_system(unit_system, default_units).map_err(reject)?;
    let sex = parse_category("sex", sex, Sex::from_str, "male, female").map_err(reject)?;
    let activity = parse_category(
        "activity_level",
        activity_level,
        ActivityLevel::from_str,
        &expected_names(&ActivityLevel::ALL, ActivityLevel::as_str),
    )
    .map_err(reject)?;

    let result =
        health::calculate_calories(weight, height, age, sex, activity, units).map_err(reject)?;

    Ok(CalorieResponse {
        unit_system: units,
        sex,
        age,
        activity_description: activity.display_name(),
        result,
    })
}

/// Calculate recommended daily water intake
pub fn calculate_water_intake(
    weight: f64,
    activity_level: &str,
    climate: Option<&str>,
    unit_system: Option<&str>,
    default_units: UnitSystem,
) -> Result<WaterIntakeResponse, String> {
    let units = resolve_unit_system(unit_system, default_units).map_err(reject)?;
    let activity = parse_category(
        "activity_level",
        activity_level,
        WaterActivity::from_str,
        &expected_names(&WaterActivity::ALL, WaterActivity::as_str),
    )
    .map_err(reject)?;
    let climate = match climate {
        Some(c) if !c.trim().is_empty() => parse_category(
            "climate",
            c,
            Climate::from_str,
            &expected_names(&Climate::ALL, Climate::as_str),
        )
        .map_err(reject)?,
        _ => Climate::default(),
    };

    let result = health::calculate_water_intake(weight, activity, climate, units).map_err(reject)?;

    Ok(WaterIntakeResponse {
        unit_system: units,
        activity_level: activity,
        climate,
        result,
    })
}

/// Every fixed table the calculators use
pub fn calculator_tables() -> CalculatorTables {
    CalculatorTables {
        calorie_activity_multipliers: ActivityLevel::table()
            .into_iter()
            .map(|(level, multiplier)| MultiplierEntry {
                category: level.as_str(),
                multiplier,
            })
            .collect(),
        water_activity_multipliers: WaterActivity::table()
            .into_iter()
            .map(|(activity, multiplier)| MultiplierEntry {
                category: activity.as_str(),
                multiplier,
            })
            .collect(),
        climate_multipliers: Climate::table()
            .into_iter()
            .map(|(climate, multiplier)| MultiplierEntry {
                category: climate.as_str(),
                multiplier,
            })
            .collect(),
        bmi_thresholds: vec![
            BmiThreshold { category: "Underweight", min_bmi: None },
            BmiThreshold { category: "Normal weight", min_bmi: Some(BMI_NORMAL_MIN) },
            BmiThreshold { category: "Overweight", min_bmi: Some(BMI_OVERWEIGHT_MIN) },
            BmiThreshold { category: "Obese", min_bmi: Some(BMI_OBESE_MIN) },
        ],
        healthy_bmi_range: [BMI_NORMAL_MIN, BMI_HEALTHY_MAX],
        weight_loss_deficits_kcal: [MILD_DEFICIT_KCAL, MODERATE_DEFICIT_KCAL, AGGRESSIVE_DEFICIT_KCAL],
        weight_gain_surpluses_kcal: [MILD_SURPLUS_KCAL, MODERATE_SURPLUS_KCAL],
        water_ml_per_kg: ML_PER_KG,
    }
}
