//! Search tools: scopus_search, author_search, affiliation_search, serial_title_search.

use serde_json::json;

use super::{McpTool, ToolContext, to_text};
use crate::client::QueryParams;
use crate::error::ToolResult;
use crate::models::{
    AffiliationSearchInput, AuthorSearchInput, MAX_SEARCH_COUNT, MAX_SERIAL_COUNT, OpenAccess,
    ScopusSearchInput, SearchView, SerialTitleSearchInput, SerialView,
};

fn paging_schema(max_count: u32) -> (serde_json::Value, serde_json::Value) {
    (
        json!({
            "type": "integer",
            "minimum": 0,
            "description": "Offset for pagination (0-based)."
        }),
        json!({
            "type": "integer",
            "minimum": 1,
            "maximum": max_count,
            "description": format!("Number of results per page. Max {max_count}.")
        }),
    )
}

/// Scopus document search tool.
pub struct ScopusSearchTool;

#[async_trait::async_trait]
impl McpTool for ScopusSearchTool {
    fn name(&self) -> &'static str {
        "scopus_search"
    }

    fn description(&self) -> &'static str {
        "Search the Scopus database of abstracts and citations. Returns metadata about \
         scholarly documents including titles, authors, DOIs, citation counts. Use Scopus \
         field codes in queries: TITLE(), AUTH(), AFFIL(), DOI(), KEY(), PUBYEAR, etc."
    }

    fn input_schema(&self) -> serde_json::Value {
        let (start, count) = paging_schema(MAX_SEARCH_COUNT);
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Scopus Boolean search query. Examples: 'TITLE(machine learning)', \
                                    'AUTH(Smith) AND PUBYEAR > 2020', 'AFFIL(MIT) AND KEY(quantum computing)'"
                },
                "start": start,
                "count": count,
                "sort": {
                    "type": "string",
                    "description": "Sort order. Examples: 'relevancy', 'citedby-count', 'pubyear', \
                                    'coverDate'. Prefix with '-' for descending."
                },
                "date": {
                    "type": "string",
                    "description": "Date range filter. Format: 'YYYY' for single year, 'YYYY-YYYY' for range."
                },
                "view": {
                    "type": "string",
                    "enum": SearchView::values(),
                    "description": "Response detail level. STANDARD=basic fields, COMPLETE=all fields."
                },
                "field": {
                    "type": "string",
                    "description": "Comma-separated fields to return (e.g. 'dc:title,dc:creator,prism:doi,citedby-count')."
                },
                "subj": {
                    "type": "string",
                    "description": "Subject area filter. Comma-separated codes (e.g. 'COMP,MATH')."
                },
                "facets": {
                    "type": "string",
                    "description": "Facet fields for aggregation (e.g. 'subjarea(count=5)')."
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: ScopusSearchInput = serde_json::from_value(input)?;
        params.validate()?;

        let query = QueryParams::new()
            .with("query", &params.query)
            .with("start", params.start)
            .with("count", params.count)
            .with("sort", params.sort)
            .with("date", params.date)
            .with("view", params.view.map(SearchView::as_str))
            .with("field", params.field)
            .with("subj", params.subj)
            .with("facets", params.facets);

        let data = ctx.client.get("/content/search/scopus", &query).await?;
        to_text(&data)
    }
}

/// Scopus author search tool.
pub struct AuthorSearchTool;

#[async_trait::async_trait]
impl McpTool for AuthorSearchTool {
    fn name(&self) -> &'static str {
        "author_search"
    }

    fn description(&self) -> &'static str {
        "Search for authors in the Scopus database. Returns author profiles including name, \
         affiliation, document count, and identifiers. Use field codes: AUTHLASTNAME(), \
         AUTHFIRST(), AFFIL(), ORCID()."
    }

    fn input_schema(&self) -> serde_json::Value {
        let (start, count) = paging_schema(MAX_SEARCH_COUNT);
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Author search query. Examples: 'AUTHLASTNAME(Einstein)', \
                                    'AUTHFIRST(Albert) AND AUTHLASTNAME(Einstein)', 'AFFIL(Stanford)'"
                },
                "co_author": {
                    "type": "string",
                    "description": "Author ID to find co-authors of (overrides query parameter)."
                },
                "start": start,
                "count": count,
                "sort": {
                    "type": "string",
                    "description": "Sort order (e.g. 'relevancy', 'document-count')."
                },
                "view": {
                    "type": "string",
                    "enum": SearchView::values(),
                    "description": "Response detail level."
                },
                "field": {
                    "type": "string",
                    "description": "Comma-separated list of specific fields to return."
                },
                "facets": {
                    "type": "string",
                    "description": "Facet fields for aggregation."
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AuthorSearchInput = serde_json::from_value(input)?;
        params.validate()?;

        let query = QueryParams::new()
            .with("query", &params.query)
            .with("co-author", params.co_author)
            .with("start", params.start)
            .with("count", params.count)
            .with("sort", params.sort)
            .with("view", params.view.map(SearchView::as_str))
            .with("field", params.field)
            .with("facets", params.facets);

        let data = ctx.client.get("/content/search/author", &query).await?;
        to_text(&data)
    }
}

/// Scopus affiliation search tool.
pub struct AffiliationSearchTool;

#[async_trait::async_trait]
impl McpTool for AffiliationSearchTool {
    fn name(&self) -> &'static str {
        "affiliation_search"
    }

    fn description(&self) -> &'static str {
        "Search for academic institutions and research affiliations in Scopus. Returns \
         affiliation names, locations, document counts, and identifiers. Use field codes: \
         AFFIL(), AF-ID(), CITY(), COUNTRY()."
    }

    fn input_schema(&self) -> serde_json::Value {
        let (start, count) = paging_schema(MAX_SEARCH_COUNT);
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Affiliation search query. Examples: 'AFFIL(Harvard)', \
                                    'CITY(Boston) AND COUNTRY(United States)', 'AF-ID(60007776)'"
                },
                "start": start,
                "count": count,
                "sort": {"type": "string", "description": "Sort order."},
                "view": {
                    "type": "string",
                    "enum": SearchView::values(),
                    "description": "Response detail level."
                },
                "field": {
                    "type": "string",
                    "description": "Comma-separated list of specific fields to return."
                },
                "facets": {
                    "type": "string",
                    "description": "Facet fields for aggregation."
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AffiliationSearchInput = serde_json::from_value(input)?;
        params.validate()?;

        let query = QueryParams::new()
            .with("query", &params.query)
            .with("start", params.start)
            .with("count", params.count)
            .with("sort", params.sort)
            .with("view", params.view.map(SearchView::as_str))
            .with("field", params.field)
            .with("facets", params.facets);

        let data = ctx.client.get("/content/search/affiliation", &query).await?;
        to_text(&data)
    }
}

/// Serial title (journal) search tool.
pub struct SerialTitleSearchTool;

#[async_trait::async_trait]
impl McpTool for SerialTitleSearchTool {
    fn name(&self) -> &'static str {
        "serial_title_search"
    }

    fn description(&self) -> &'static str {
        "Search for academic journals and serial publications in Scopus by title, ISSN, \
         publisher, subject area, or open access status."
    }

    fn input_schema(&self) -> serde_json::Value {
        let (start, count) = paging_schema(MAX_SERIAL_COUNT);
        json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Journal title to search for (partial match supported)."
                },
                "issn": {"type": "string", "description": "ISSN to search for."},
                "pub": {"type": "string", "description": "Publisher name to filter by."},
                "subj": {
                    "type": "string",
                    "description": "Subject area code (e.g. 'COMP', 'MATH', 'MEDI', 'PHYS')."
                },
                "content": {
                    "type": "string",
                    "description": "Content type: 'journal', 'tradejournal', 'conferenceproceeding', 'bookseries'."
                },
                "date": {"type": "string", "description": "Date filter."},
                "oa": {
                    "type": "string",
                    "enum": OpenAccess::values(),
                    "description": "Open access status filter."
                },
                "view": {
                    "type": "string",
                    "enum": SerialView::values(),
                    "description": "Response detail level."
                },
                "start": start,
                "count": count
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SerialTitleSearchInput = serde_json::from_value(input)?;
        params.validate()?;

        let query = QueryParams::new()
            .with("title", params.title)
            .with("issn", params.issn)
            .with("pub", params.r#pub)
            .with("subj", params.subj)
            .with("content", params.content)
            .with("date", params.date)
            .with("oa", params.oa.map(OpenAccess::as_str))
            .with("view", params.view.map(SerialView::as_str))
            .with("start", params.start)
            .with("count", params.count);

        let data = ctx.client.get("/content/serial/title", &query).await?;
        to_text(&data)
    }
}
