//! Calculator error types

use thiserror::Error;

/// Errors produced by the health metric calculators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HealthError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl HealthError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        HealthError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input
    pub fn field(&self) -> &'static str {
        match self {
            HealthError::InvalidInput { field, .. } => field,
        }
    }
}

/// Result type for calculator operations
pub type HealthResult<T> = Result<T, HealthError>;

/// Reject NaN, infinities, zero and negatives
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> HealthResult<f64> {
    if !value.is_finite() {
        return Err(HealthError::invalid(field, format!("must be a finite number, got {}", value)));
    }
    if value <= 0.0 {
        return Err(HealthError::invalid(field, format!("must be greater than zero, got {}", value)));
    }
    Ok(value)
}

/// Reject a derived value that overflowed or underflowed out of range
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> HealthResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HealthError::invalid(field, "input is outside the range that can be calculated"))
    }
}
