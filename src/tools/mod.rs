//! ToolBank Tools module
//!
//! MCP tool implementations for the ToolBank calculators.

pub mod calculators;
pub mod status;
