//! ToolBank Library
//!
//! Unit-aware health calculators (BMI, calories, water intake) and the MCP
//! service that exposes them.

pub mod build_info;
pub mod config;
pub mod health;
pub mod mcp;
pub mod tools;
