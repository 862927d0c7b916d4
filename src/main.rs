//! Grocer
//!
//! An MCP server that combines grocery list entries.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use grocer::build_info;
use grocer::config::GrocerConfig;
use grocer::mcp::GrocerService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("grocer=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = GrocerConfig::from_env();
    eprintln!("Registries: {}", config.registry_source());
    eprintln!("ID mode: {:?}", config.id_mode);

    let engine = config.build_engine()?;
    tracing::info!(
        families = engine.registries().families.len(),
        conversions = engine.registries().conversions.len(),
        "Combine engine ready"
    );

    // Create the Grocer service
    let service = GrocerService::new(engine, config.registry_source());

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
