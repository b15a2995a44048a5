//! Service configuration
//!
//! Read once at startup from environment variables.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::health::UnitSystem;

/// Environment variable selecting the default unit system
pub const UNIT_SYSTEM_VAR: &str = "TOOLBANK_UNIT_SYSTEM";

/// Log filter used when `RUST_LOG` is unset or unparseable
pub const DEFAULT_LOG_FILTER: &str = "toolbank=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be 'metric' or 'imperial', got '{value}'")]
    InvalidUnitSystem { var: &'static str, value: String },
}

/// Runtime configuration for the ToolBank service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Unit system assumed when a tool call does not name one
    pub default_unit_system: UnitSystem,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_unit_system = match lookup(UNIT_SYSTEM_VAR) {
            Some(value) if !value.trim().is_empty() => UnitSystem::from_str(&value).ok_or(
                ConfigError::InvalidUnitSystem {
                    var: UNIT_SYSTEM_VAR,
                    value,
                },
            )?,
            _ => UnitSystem::Metric,
        };

        Ok(Self {
            default_unit_system,
        })
    }
}

/// Build the log filter from a `RUST_LOG` value, which fully replaces the default
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_metric() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.default_unit_system, UnitSystem::Metric);

        let config = Config::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config.default_unit_system, UnitSystem::Metric);
    }

    #[test]
    fn test_reads_unit_system() {
        let config = Config::from_lookup(|key| {
            (key == UNIT_SYSTEM_VAR).then(|| "Imperial".to_string())
        })
        .unwrap();
        assert_eq!(config.default_unit_system, UnitSystem::Imperial);
    }

    #[test]
    fn test_rejects_unknown_unit_system() {
        let err = Config::from_lookup(|_| Some("cubits".to_string())).unwrap_err();
        assert!(err.to_string().contains("cubits"));
    }

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).to_string(), DEFAULT_LOG_FILTER);
        assert_eq!(log_filter(Some("")).to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_rust_log_overrides_default() {
        let filter = log_filter(Some("toolbank=debug")).to_string();
        assert!(filter.contains("toolbank=debug"));
        assert!(!filter.contains("toolbank=info"));

        let filter = log_filter(Some("warn")).to_string();
        assert!(!filter.contains("toolbank"));
    }
}
