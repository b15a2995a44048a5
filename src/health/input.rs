//! Validated calculator inputs
//!
//! Raw measurements are checked once and normalised to metric here, so every
//! formula downstream works in kg, cm and m.

use serde::{Deserialize, Serialize};

use super::categories::Sex;
use super::error::{ensure_finite, ensure_positive, HealthError, HealthResult};
use super::units::{height_to_cm, weight_to_kg, UnitSystem, CM_PER_M};

/// Weight and height as supplied by a caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// kg (metric) or lb (imperial)
    pub weight: f64,
    /// cm (metric) or in (imperial)
    pub height: f64,
    pub unit_system: UnitSystem,
}

/// Measurements after validation, in metric units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricBody {
    weight_kg: f64,
    height_cm: f64,
}

impl MetricBody {
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn height_m(&self) -> f64 {
        self.height_cm / CM_PER_M
    }

    /// Square of height in meters, the BMI denominator
    pub fn height_m_squared(&self) -> f64 {
        let m = self.height_m();
        m * m
    }
}

impl BodyMeasurements {
    pub fn new(weight: f64, height: f64, unit_system: UnitSystem) -> Self {
        Self {
            weight,
            height,
            unit_system,
        }
    }

    /// Validate and convert to metric
    pub fn to_metric(&self) -> HealthResult<MetricBody> {
        let weight = ensure_positive("weight", self.weight)?;
        let height = ensure_positive("height", self.height)?;
        let body = MetricBody {
            weight_kg: weight_to_kg(weight, self.unit_system),
            height_cm: height_to_cm(height, self.unit_system),
        };

        // Extreme heights overflow or underflow once squared in meters
        let h2 = ensure_finite("height", body.height_m_squared())?;
        if h2 <= 0.0 {
            return Err(HealthError::invalid("height", "too small to calculate with"));
        }
        ensure_finite("weight", body.weight_kg)?;
        Ok(body)
    }
}

/// Full anthropometric profile used for energy expenditure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricInput {
    pub weight: f64,
    pub height: f64,
    /// Age in whole years
    pub age: u32,
    pub sex: Sex,
    pub unit_system: UnitSystem,
}

impl AnthropometricInput {
    pub fn body(&self) -> BodyMeasurements {
        BodyMeasurements::new(self.weight, self.height, self.unit_system)
    }

    /// Validate every field, returning the metric body on success
    pub fn validate(&self) -> HealthResult<MetricBody> {
        let body = self.body().to_metric()?;
        if self.age == 0 {
            return Err(HealthError::invalid("age", "must be at least 1 year"));
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_body_from_metric() {
        let body = BodyMeasurements::new(70.0, 175.0, UnitSystem::Metric)
            .to_metric()
            .unwrap();
        assert_eq!(body.weight_kg(), 70.0);
        assert_eq!(body.height_cm(), 175.0);
        assert!((body.height_m() - 1.75).abs() < 1e-12);
        assert!((body.height_m_squared() - 3.0625).abs() < 1e-12);
    }

    #[test]
    fn test_metric_body_from_imperial() {
        let body = BodyMeasurements::new(150.0, 65.0, UnitSystem::Imperial)
            .to_metric()
            .unwrap();
        assert!((body.weight_kg() - 68.0388).abs() < 1e-4);
        assert!((body.height_cm() - 165.1).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = BodyMeasurements::new(0.0, 175.0, UnitSystem::Metric)
            .to_metric()
            .unwrap_err();
        assert_eq!(err.field(), "weight");

        let err = BodyMeasurements::new(70.0, -5.0, UnitSystem::Metric)
            .to_metric()
            .unwrap_err();
        assert_eq!(err.field(), "height");
    }

    #[test]
    fn test_rejects_heights_that_square_out_of_range() {
        let err = BodyMeasurements::new(70.0, 1e-200, UnitSystem::Metric)
            .to_metric()
            .unwrap_err();
        assert_eq!(err.field(), "height");

        let err = BodyMeasurements::new(70.0, 1e200, UnitSystem::Imperial)
            .to_metric()
            .unwrap_err();
        assert_eq!(err.field(), "height");
    }

    #[test]
    fn test_rejects_zero_age() {
        let input = AnthropometricInput {
            weight: 70.0,
            height: 175.0,
            age: 0,
            sex: Sex::Female,
            unit_system: UnitSystem::Metric,
        };
        assert_eq!(input.validate().unwrap_err().field(), "age");
    }
}
