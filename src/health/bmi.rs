//! Body Mass Index
//!
//! BMI = weight_kg / height_m², classified against the WHO adult thresholds.

use serde::{Deserialize, Serialize};

use super::error::{ensure_finite, HealthResult};
use super::input::{BodyMeasurements, MetricBody};
use super::units::{kg_to_weight, round_to_tenth, UnitSystem};

/// Lower bound of the normal range, inclusive
pub const BMI_NORMAL_MIN: f64 = 18.5;
/// Upper bound used for the healthy weight range
pub const BMI_HEALTHY_MAX: f64 = 24.9;
/// Lower bound of the overweight range, inclusive
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound of the obese range, inclusive
pub const BMI_OBESE_MIN: f64 = 30.0;

/// BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify an unrounded BMI value; each lower bound is inclusive
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi < BMI_OVERWEIGHT_MIN {
            BmiCategory::NormalWeight
        } else if bmi < BMI_OBESE_MIN {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Your BMI is below the healthy range; consider talking to a healthcare provider about gaining weight safely."
            }
            BmiCategory::NormalWeight => {
                "Your BMI is within the healthy range; keep it up with a balanced diet and regular activity."
            }
            BmiCategory::Overweight => {
                "Your BMI is above the healthy range; modest changes to diet and activity can help bring it down."
            }
            BmiCategory::Obese => {
                "Your BMI indicates obesity; a healthcare provider can help you build a safe weight-management plan."
            }
        }
    }
}

/// Weight range corresponding to BMI 18.5-24.9 at the given height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthyWeightRange {
    pub min: f64,
    pub max: f64,
    /// Unit system `min` and `max` are expressed in
    pub unit_system: UnitSystem,
}

impl HealthyWeightRange {
    fn for_body(body: &MetricBody, units: UnitSystem) -> HealthResult<Self> {
        let h2 = body.height_m_squared();
        Ok(Self {
            min: ensure_finite("height", kg_to_weight(BMI_NORMAL_MIN * h2, units).round())?,
            max: ensure_finite("height", kg_to_weight(BMI_HEALTHY_MAX * h2, units).round())?,
            unit_system: units,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub bmi: f64,
    pub category: BmiCategory,
    pub label: String,
    pub description: String,
    pub healthy_weight_range: HealthyWeightRange,
}

/// Calculate BMI from weight and height in the given unit system
///
/// Metric: kg and cm. Imperial: lb and in.
pub fn calculate_bmi(weight: f64, height: f64, unit_system: UnitSystem) -> HealthResult<BmiResult> {
    let body = BodyMeasurements::new(weight, height, unit_system).to_metric()?;

    let bmi = body.weight_kg() / body.height_m_squared();
    let rounded = ensure_finite("bmi", round_to_tenth(bmi))?;
    let category = BmiCategory::from_bmi(bmi);

    tracing::debug!(
        weight_kg = body.weight_kg(),
        height_m = body.height_m(),
        bmi,
        category = category.label(),
        "calculated BMI"
    );

    Ok(BmiResult {
        bmi: rounded,
        category,
        label: category.label().to_string(),
        description: category.description().to_string(),
        healthy_weight_range: HealthyWeightRange::for_body(&body, unit_system)?,
    })
}
