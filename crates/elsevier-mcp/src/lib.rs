//! Elsevier MCP Server
//!
//! A Model Context Protocol (MCP) server for the Elsevier Scopus and
//! ScienceDirect APIs. Exposes searches, record retrievals, subject
//! classifications and citation metrics as MCP tools.
//!
//! # Features
//!
//! - **13 MCP Tools**: 6 work with a free API key, 7 more need institutional access
//! - **Fallback authentication**: a single IP-based `/authenticate` handshake on the first 401
//! - **Normalized errors**: every failed call reports `Elsevier API error (status): message`
//! - **Two transports**: stdio for desktop clients, HTTP for remote ones
//!
//! # Example
//!
//! ```no_run
//! use elsevier_mcp::{client::{ElsevierClient, QueryParams}, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ElsevierClient::new(config)?;
//!
//!     let query = QueryParams::new().with("query", "TITLE(graphene)").with("count", 5u32);
//!     let results = client.get("/content/search/scopus", &query).await?;
//!     println!("{results}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod tools;

pub use client::ElsevierClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
