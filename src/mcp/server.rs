//! ToolBank MCP Server Implementation
//!
//! Exposes the health calculators as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::tools::calculators;
use crate::tools::status::StatusTracker;

/// ToolBank MCP Service
#[derive(Clone)]
pub struct ToolbankService {
    config: Config,
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<ToolbankService>,
}

impl ToolbankService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(config.default_unit_system)),
            config,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBmiParams {
    /// Body weight: kg (metric) or lb (imperial)
    pub weight: f64,
    /// Height: cm (metric) or inches (imperial)
    pub height: f64,
    /// "metric" or "imperial" (defaults to the server setting)
    pub unit_system: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateCaloriesParams {
    /// Body weight: kg (metric) or lb (imperial)
    pub weight: f64,
    /// Height: cm (metric) or inches (imperial)
    pub height: f64,
    /// Age in whole years
    pub age: u32,
    /// "male" or "female"
    pub sex: String,
    /// sedentary, light, moderate, active or very_active
    pub activity_level: String,
    /// "metric" or "imperial" (defaults to the server setting)
    pub unit_system: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateWaterIntakeParams {
    /// Body weight: kg (metric) or lb (imperial)
    pub weight: f64,
    /// low, moderate or high
    pub activity_level: String,
    /// normal, hot or humid (default normal)
    pub climate: Option<String>,
    /// "metric" or "imperial" (defaults to the server setting)
    pub unit_system: Option<String>,
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl ToolbankService {
    // --- Status ---

    #[tool(description = "Get the current status of the ToolBank service including build info, default unit system, and process information")]
    fn toolbank_status(&self) -> Result<CallToolResult, McpError> {
        to_json_result(&self.status_tracker.get_status())
    }

    #[tool(description = "Get instructions for using the health calculators (units, categories, outputs). Call this before the first calculation or when unsure which inputs to pass.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    #[tool(description = "List every multiplier table, BMI threshold and calorie offset used by the calculators")]
    fn calculator_tables(&self) -> Result<CallToolResult, McpError> {
        to_json_result(&calculators::calculator_tables())
    }

    // --- Calculators ---

    #[tool(description = "Calculate Body Mass Index with category, description and healthy weight range")]
    fn calculate_bmi(&self, Parameters(p): Parameters<CalculateBmiParams>) -> Result<CallToolResult, McpError> {
        let result = calculators::calculate_bmi(
            p.weight,
            p.height,
            p.unit_system.as_deref(),
            self.config.default_unit_system,
        )
        .map_err(|e| McpError::invalid_params(e, None))?;
        to_json_result(&result)
    }

    #[tool(description = "Calculate BMR (Mifflin-St Jeor), TDEE and daily calorie targets for weight loss and gain")]
    fn calculate_calories(&self, Parameters(p): Parameters<CalculateCaloriesParams>) -> Result<CallToolResult, McpError> {
        let result = calculators::calculate_calories(
            p.weight,
            p.height,
            p.age,
            &p.sex,
            &p.activity_level,
            p.unit_system.as_deref(),
            self.config.default_unit_system,
        )
        .map_err(|e| McpError::invalid_params(e, None))?;
        to_json_result(&result)
    }

    #[tool(description = "Calculate recommended daily water intake in liters, cups and ounces")]
    fn calculate_water_intake(&self, Parameters(p): Parameters<CalculateWaterIntakeParams>) -> Result<CallToolResult, McpError> {
        let result = calculators::calculate_water_intake(
            p.weight,
            &p.activity_level,
            p.climate.as_deref(),
            p.unit_system.as_deref(),
            self.config.default_unit_system,
        )
        .map_err(|e| McpError::invalid_params(e, None))?;
        to_json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for ToolbankService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "toolbank".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("ToolBank Health Calculators".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "ToolBank - stateless health calculators. \
                 Call calculator_instructions first. \
                 Calculators: calculate_bmi, calculate_calories, calculate_water_intake. \
                 Reference: calculator_tables. Service: toolbank_status. \
                 Metric inputs are kg and cm; imperial inputs are lb and inches."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::UnitSystem;

    fn service() -> ToolbankService {
        ToolbankService::new(Config {
            default_unit_system: UnitSystem::Metric,
        })
    }

    #[test]
    fn test_router_lists_all_tools() {
        let names: Vec<String> = service()
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        for expected in [
            "toolbank_status",
            "calculator_instructions",
            "calculator_tables",
            "calculate_bmi",
            "calculate_calories",
            "calculate_water_intake",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing tool {}", expected);
        }
    }

    #[test]
    fn test_server_info() {
        let info = service().get_info();
        assert_eq!(info.server_info.name, "toolbank");
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_invalid_params_error() {
        let err = service()
            .calculate_bmi(Parameters(CalculateBmiParams {
                weight: 0.0,
                height: 175.0,
                unit_system: None,
            }))
            .unwrap_err();
        assert!(err.message.contains("weight"));
    }

    #[test]
    fn test_calculate_water_intake_tool() {
        let result = service()
            .calculate_water_intake(Parameters(CalculateWaterIntakeParams {
                weight: 70.0,
                activity_level: "moderate".to_string(),
                climate: None,
                unit_system: None,
            }))
            .unwrap();
        assert_ne!(result.is_error, Some(true));
    }
}
