//! Citation and altmetric tools: citation_count, citations_overview, plumx_metrics.

use serde_json::json;

use super::{McpTool, ToolContext, to_text};
use crate::client::QueryParams;
use crate::error::ToolResult;
use crate::models::{
    CitationCountInput, CitationFilter, CitationsOverviewInput, PlumxIdType, PlumxMetricsInput,
};

/// Citation count tool (batch-capable).
pub struct CitationCountTool;

#[async_trait::async_trait]
impl McpTool for CitationCountTool {
    fn name(&self) -> &'static str {
        "citation_count"
    }

    fn description(&self) -> &'static str {
        "Get citation counts for one or more Scopus documents. Supports batch lookup by \
         providing comma-separated identifiers. Returns total citation count for each document."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "scopus_id": {
                    "type": "string",
                    "description": "Scopus ID(s). Comma-separated for batch (e.g. '85028623301,85084609197')."
                },
                "doi": {
                    "type": "string",
                    "description": "DOI(s). Comma-separated for batch (e.g. '10.1016/j.cell.2020.04.045')."
                },
                "pii": {"type": "string", "description": "PII(s). Comma-separated for batch."},
                "pubmed_id": {"type": "string", "description": "PubMed ID(s). Comma-separated for batch."}
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CitationCountInput = serde_json::from_value(input)?;
        params.validate()?;

        let query = QueryParams::new()
            .with("scopus_id", params.scopus_id)
            .with("doi", params.doi)
            .with("pii", params.pii)
            .with("pubmed_id", params.pubmed_id);

        let data = ctx.client.get("/content/abstract/citation-count", &query).await?;
        to_text(&data)
    }
}

/// Yearly citation breakdown tool.
pub struct CitationsOverviewTool;

#[async_trait::async_trait]
impl McpTool for CitationsOverviewTool {
    fn name(&self) -> &'static str {
        "citations_overview"
    }

    fn description(&self) -> &'static str {
        "Get a detailed citation overview for a Scopus document, including yearly citation \
         breakdowns. Can filter by date range, exclude self-citations, and exclude book citations."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "scopus_id": {"type": "string", "description": "Scopus ID of the document."},
                "doi": {"type": "string", "description": "DOI of the document."},
                "pii": {"type": "string", "description": "PII of the document."},
                "pubmed_id": {"type": "string", "description": "PubMed ID of the document."},
                "date": {
                    "type": "string",
                    "description": "Date range filter. Format: 'YYYY-YYYY' (e.g. '2018-2024')."
                },
                "start": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Offset for pagination (0-based)."
                },
                "count": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of citation results to return."
                },
                "sort": {
                    "type": "string",
                    "description": "Sort order. Options: '+sort-year' (ascending), '-sort-year' (descending), 'rowTotal'."
                },
                "citation": {
                    "type": "string",
                    "enum": CitationFilter::values(),
                    "description": "Citation filter. 'exclude-self' removes self-citations, \
                                    'exclude-books' removes book citations."
                },
                "author_id": {
                    "type": "string",
                    "description": "Author ID to filter citations by a specific author."
                },
                "view": {"type": "string", "description": "Response detail level. Default: STANDARD."},
                "field": {
                    "type": "string",
                    "description": "Comma-separated list of specific fields to return."
                }
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CitationsOverviewInput = serde_json::from_value(input)?;
        params.validate()?;

        let query = QueryParams::new()
            .with("scopus_id", params.scopus_id)
            .with("doi", params.doi)
            .with("pii", params.pii)
            .with("pubmed_id", params.pubmed_id)
            .with("date", params.date)
            .with("start", params.start)
            .with("count", params.count)
            .with("sort", params.sort)
            .with("citation", params.citation.map(CitationFilter::as_str))
            .with("author_id", params.author_id)
            .with("view", params.view)
            .with("field", params.field);

        let data = ctx.client.get("/content/abstract/citations", &query).await?;
        to_text(&data)
    }
}

/// PlumX altmetrics tool.
pub struct PlumxMetricsTool;

#[async_trait::async_trait]
impl McpTool for PlumxMetricsTool {
    fn name(&self) -> &'static str {
        "plumx_metrics"
    }

    fn description(&self) -> &'static str {
        "Retrieve PlumX Metrics for a scholarly document. Returns aggregate altmetric counts \
         including citations, usage, captures, mentions, and social media activity."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id_type": {
                    "type": "string",
                    "enum": PlumxIdType::values(),
                    "description": "Type of identifier. Common options: 'doi' for DOI, 'pmid' for \
                                    PubMed ID, 'isbn' for books."
                },
                "id_value": {
                    "type": "string",
                    "description": "The identifier value. Example DOI: '10.1016/j.cell.2020.04.045'."
                }
            },
            "required": ["id_type", "id_value"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PlumxMetricsInput = serde_json::from_value(input)?;
        params.validate()?;

        let path = format!("/analytics/plumx/{}/{}", params.id_type, params.id_value);
        let data = ctx.client.get(&path, &QueryParams::new()).await?;
        to_text(&data)
    }
}
