//! MCP tool implementations.
//!
//! Each tool is a thin mapping:
//! 1. Parse and validate input parameters
//! 2. Build the API path and query string
//! 3. Call the Elsevier API client and return the JSON as text

mod metrics;
mod retrieval;
mod search;
mod subjects;

pub use metrics::*;
pub use retrieval::*;
pub use search::*;
pub use subjects::*;

use std::sync::Arc;

use crate::client::ElsevierClient;
use crate::error::ToolResult;

/// Tool execution context.
pub struct ToolContext {
    /// API client.
    pub client: Arc<ElsevierClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<ElsevierClient>) -> Self {
        Self { client }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "scopus_search").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Pretty-print an API response for the tool result.
fn to_text(data: &serde_json::Value) -> ToolResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Tools that work with a free API key.
#[must_use]
pub fn register_default_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(ScopusSearchTool),
        Box::new(AbstractRetrievalTool),
        Box::new(ArticleRetrievalTool),
        Box::new(SerialTitleSearchTool),
        Box::new(SerialTitleRetrievalTool),
        Box::new(SubjectClassificationsTool),
    ]
}

/// Tools that need institutional access or additional API subscriptions.
#[must_use]
pub fn register_institutional_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(AuthorSearchTool),
        Box::new(AffiliationSearchTool),
        Box::new(AuthorRetrievalTool),
        Box::new(AffiliationRetrievalTool),
        Box::new(CitationCountTool),
        Box::new(CitationsOverviewTool),
        Box::new(PlumxMetricsTool),
    ]
}

/// Register the default tools, plus the institutional ones if `enable_all`.
#[must_use]
pub fn register_tools(enable_all: bool) -> Vec<Box<dyn McpTool>> {
    let mut tools = register_default_tools();
    if enable_all {
        tools.extend(register_institutional_tools());
    }
    tools
}
