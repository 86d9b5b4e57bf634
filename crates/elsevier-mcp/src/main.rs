//! Elsevier MCP Server - Entry Point
//!
//! Provides both stdio (for desktop MCP clients) and HTTP transports.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use elsevier_mcp::{
    ElsevierClient,
    config::{Config, flag_enabled},
    server::McpServer,
};

#[derive(Parser, Debug)]
#[command(name = "elsevier-mcp")]
#[command(about = "MCP server for the Elsevier Scopus and ScienceDirect APIs")]
#[command(version)]
struct Cli {
    /// Elsevier API key (get one at https://dev.elsevier.com)
    #[arg(long, env = "ELSEVIER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Institutional token, sent as X-ELS-Insttoken
    #[arg(long, env = "ELSEVIER_INST_TOKEN", hide_env_values = true)]
    inst_token: Option<String>,

    /// Also register the tools that need institutional access (only `true` enables)
    #[arg(
        long,
        env = "ELSEVIER_ENABLE_ALL_TOOLS",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    enable_all_tools: Option<String>,

    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Bearer token required on the HTTP transport
    #[arg(long, env = "MCP_SERVER_AUTH_TOKEN", hide_env_values = true)]
    auth_token: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output (for desktop MCP clients)
    #[default]
    Stdio,
    /// HTTP with JSON-RPC over POST /mcp
    Http,
}

/// Logs go to stderr; stdout carries the stdio transport.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        "Starting Elsevier MCP server"
    );

    if cli.api_key.trim().is_empty() {
        anyhow::bail!("ELSEVIER_API_KEY is required. Get one at https://dev.elsevier.com");
    }

    let config = Config::new(cli.api_key, cli.inst_token)
        .with_all_tools(flag_enabled(cli.enable_all_tools.as_deref()))
        .with_auth_token(cli.auth_token);

    if config.has_inst_token() {
        tracing::info!("Institutional token configured");
    }
    tracing::info!(
        "Tools enabled: {}",
        if config.enable_all_tools { "all 13" } else { "6 default (set ELSEVIER_ENABLE_ALL_TOOLS=true for all 13)" }
    );

    let enable_all_tools = config.enable_all_tools;
    let auth_token = config.auth_token.clone();
    let client = ElsevierClient::new(config)?;
    let server = McpServer::new(client, enable_all_tools).with_auth_token(auth_token);

    match cli.transport {
        Transport::Stdio => {
            tracing::info!("Running in stdio mode");
            server.run_stdio().await?;
        }
        Transport::Http => {
            tracing::info!(port = cli.port, "Running in HTTP mode");
            server.run_http(cli.port).await?;
        }
    }

    Ok(())
}
