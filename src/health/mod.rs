//! Health metric calculators
//!
//! Pure, unit-aware BMI, calorie and hydration calculations.

pub mod bmi;
pub mod calories;
pub mod categories;
pub mod error;
pub mod input;
pub mod units;
pub mod water;

pub use bmi::{calculate_bmi, BmiCategory, BmiResult, HealthyWeightRange};
pub use calories::{
    bmr_mifflin_st_jeor, calculate_calories, calculate_calories_for, CalorieResult,
    WeightGainTargets, WeightLossTargets,
};
pub use categories::{ActivityLevel, Climate, Sex, WaterActivity};
pub use error::{HealthError, HealthResult};
pub use input::{AnthropometricInput, BodyMeasurements, MetricBody};
pub use units::{inches_to_cm, kg_to_pounds, pounds_to_kg, UnitSystem};
pub use water::{calculate_water_intake, water_intake_ml, WaterIntakeResult};
