//! ToolBank
//!
//! An MCP server exposing health metric calculators over stdio.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use toolbank::build_info;
use toolbank::config::{self, Config};
use toolbank::mcp::ToolbankService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays reserved for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(config::log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    tracing::info!(
        default_unit_system = config.default_unit_system.as_str(),
        "configuration loaded"
    );

    let service = ToolbankService::new(config);

    eprintln!("Starting MCP server on stdio...");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;
    tracing::info!("MCP client disconnected, shutting down");

    Ok(())
}
