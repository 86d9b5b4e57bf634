//! Retrieval tools: one record by identifier.

use serde_json::json;

use super::{McpTool, ToolContext, to_text};
use crate::client::QueryParams;
use crate::error::ToolResult;
use crate::models::{
    AbstractIdType, AbstractRetrievalInput, AbstractView, AffiliationIdType,
    AffiliationRetrievalInput, AffiliationView, ArticleIdType, ArticleRetrievalInput, ArticleView,
    AuthorIdType, AuthorRetrievalInput, AuthorView, SerialTitleRetrievalInput, SerialView,
};

fn field_schema() -> serde_json::Value {
    json!({
        "type": "string",
        "description": "Comma-separated list of specific fields to return."
    })
}

/// Abstract retrieval tool.
pub struct AbstractRetrievalTool;

#[async_trait::async_trait]
impl McpTool for AbstractRetrievalTool {
    fn name(&self) -> &'static str {
        "abstract_retrieval"
    }

    fn description(&self) -> &'static str {
        "Retrieve detailed metadata and abstract for a specific Scopus document by its \
         identifier. Supports lookup by Scopus ID, EID, DOI, PII, or PubMed ID."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id_type": {
                    "type": "string",
                    "enum": AbstractIdType::values(),
                    "description": "Type of identifier to use for retrieval."
                },
                "id_value": {
                    "type": "string",
                    "description": "The identifier value. Examples: DOI '10.1016/j.jclepro.2020.121092', \
                                    Scopus ID '85028623301', EID '2-s2.0-85028623301'."
                },
                "view": {
                    "type": "string",
                    "enum": AbstractView::values(),
                    "description": "Response detail level. META=metadata, META_ABS=metadata+abstract, \
                                    FULL=all details, REF=references, ENTITLED=entitlement check."
                },
                "field": field_schema()
            },
            "required": ["id_type", "id_value"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AbstractRetrievalInput = serde_json::from_value(input)?;
        params.validate()?;

        let path = format!("/content/abstract/{}/{}", params.id_type, params.id_value);
        let query = QueryParams::new()
            .with("view", params.view.map(AbstractView::as_str))
            .with("field", params.field);

        let data = ctx.client.get(&path, &query).await?;
        to_text(&data)
    }
}

/// ScienceDirect article retrieval tool.
pub struct ArticleRetrievalTool;

#[async_trait::async_trait]
impl McpTool for ArticleRetrievalTool {
    fn name(&self) -> &'static str {
        "article_retrieval"
    }

    fn description(&self) -> &'static str {
        "Retrieve full-text or metadata of a ScienceDirect article by DOI, PII, or EID. \
         Access depends on your API key entitlements."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id_type": {
                    "type": "string",
                    "enum": ArticleIdType::values(),
                    "description": "Type of identifier to use for article retrieval."
                },
                "id_value": {
                    "type": "string",
                    "description": "The identifier value. Example DOI: '10.1016/j.jclepro.2020.121092'."
                },
                "view": {
                    "type": "string",
                    "enum": ArticleView::values(),
                    "description": "Response detail level. META=metadata, META_ABS=metadata+abstract, \
                                    FULL=full text, ENTITLED=entitlement check."
                },
                "field": field_schema()
            },
            "required": ["id_type", "id_value"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: ArticleRetrievalInput = serde_json::from_value(input)?;
        params.validate()?;

        let path = format!("/content/article/{}/{}", params.id_type, params.id_value);
        let query = QueryParams::new()
            .with("view", params.view.map(ArticleView::as_str))
            .with("field", params.field);

        let data = ctx.client.get(&path, &query).await?;
        to_text(&data)
    }
}

/// Author profile retrieval tool.
pub struct AuthorRetrievalTool;

#[async_trait::async_trait]
impl McpTool for AuthorRetrievalTool {
    fn name(&self) -> &'static str {
        "author_retrieval"
    }

    fn description(&self) -> &'static str {
        "Retrieve a detailed author profile from Scopus by author ID, EID, or ORCID. Includes \
         publication metrics, subject areas, and affiliation history."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id_type": {
                    "type": "string",
                    "enum": AuthorIdType::values(),
                    "description": "Type of identifier to use for author retrieval."
                },
                "id_value": {
                    "type": "string",
                    "description": "The identifier value. Examples: author ID '7004367821', \
                                    ORCID '0000-0002-1825-0097', EID 'aut-id:7004367821'."
                },
                "view": {
                    "type": "string",
                    "enum": AuthorView::values(),
                    "description": "Response detail level. LIGHT=basic, STANDARD=includes documents, \
                                    ENHANCED=full profile, METRICS=citation metrics."
                },
                "field": field_schema()
            },
            "required": ["id_type", "id_value"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AuthorRetrievalInput = serde_json::from_value(input)?;
        params.validate()?;

        let path = format!("/content/author/{}/{}", params.id_type, params.id_value);
        let query = QueryParams::new()
            .with("view", params.view.map(AuthorView::as_str))
            .with("field", params.field);

        let data = ctx.client.get(&path, &query).await?;
        to_text(&data)
    }
}

/// Affiliation profile retrieval tool.
pub struct AffiliationRetrievalTool;

#[async_trait::async_trait]
impl McpTool for AffiliationRetrievalTool {
    fn name(&self) -> &'static str {
        "affiliation_retrieval"
    }

    fn description(&self) -> &'static str {
        "Retrieve detailed information about a specific academic institution or research \
         affiliation from Scopus by affiliation ID or EID. Includes document counts, author \
         lists, and address details."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id_type": {
                    "type": "string",
                    "enum": AffiliationIdType::values(),
                    "description": "Type of identifier to use for affiliation retrieval."
                },
                "id_value": {
                    "type": "string",
                    "description": "The identifier value. Example affiliation ID: '60007776' (MIT), \
                                    EID: '10-s2.0-60007776'."
                },
                "view": {
                    "type": "string",
                    "enum": AffiliationView::values(),
                    "description": "Response detail level. LIGHT=basic info, STANDARD=full profile, \
                                    DOCUMENTS=with document list, AUTHORS=with author list, \
                                    ENTITLED=entitlement check."
                },
                "field": {
                    "type": "string",
                    "description": "Comma-separated list of specific fields to return. Not compatible \
                                    with DOCUMENTS or AUTHORS views."
                }
            },
            "required": ["id_type", "id_value"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AffiliationRetrievalInput = serde_json::from_value(input)?;
        params.validate()?;

        let path = format!("/content/affiliation/{}/{}", params.id_type, params.id_value);
        let query = QueryParams::new()
            .with("view", params.view.map(AffiliationView::as_str))
            .with("field", params.field);

        let data = ctx.client.get(&path, &query).await?;
        to_text(&data)
    }
}

/// Serial title retrieval tool.
pub struct SerialTitleRetrievalTool;

#[async_trait::async_trait]
impl McpTool for SerialTitleRetrievalTool {
    fn name(&self) -> &'static str {
        "serial_title_retrieval"
    }

    fn description(&self) -> &'static str {
        "Retrieve detailed information about a specific journal or serial publication by its \
         ISSN. Includes publisher, subject areas, and CiteScore metrics."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "issn": {
                    "type": "string",
                    "description": "ISSN of the journal (e.g. '0140-6736' for The Lancet, '0028-0836' for Nature)."
                },
                "view": {
                    "type": "string",
                    "enum": SerialView::values(),
                    "description": "Response detail level."
                }
            },
            "required": ["issn"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SerialTitleRetrievalInput = serde_json::from_value(input)?;
        params.validate()?;

        let path = format!("/content/serial/title/issn/{}", params.issn);
        let query = QueryParams::new().with("view", params.view.map(SerialView::as_str));

        let data = ctx.client.get(&path, &query).await?;
        to_text(&data)
    }
}
