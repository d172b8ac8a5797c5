use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use tripkit_mcp_server::{Config, McpServer};

#[derive(Parser, Debug)]
#[clap(
    name = "tripkit-mcp-server",
    version,
    about = "TripKit MCP Server - mock travel tools (hotels, weather, activities) over JSON-RPC"
)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, default_value = "tripkit-mcp.toml")]
    config: PathBuf,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,

    /// Override the configured port
    #[clap(short, long)]
    port: Option<u16>,

    /// Override the configured bind host
    #[clap(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    info!("Starting TripKit MCP Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = if args.config.exists() {
        Config::from_file(&args.config)?
    } else {
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    let server = McpServer::new(config)?;

    info!("Available tools:");
    for name in server.tool_names().await {
        info!("  - {}", name);
    }

    server.run().await?;

    Ok(())
}
