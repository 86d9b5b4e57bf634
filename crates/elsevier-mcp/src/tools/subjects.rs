//! Subject classification lookup.

use serde_json::json;

use super::{McpTool, ToolContext, to_text};
use crate::client::QueryParams;
use crate::error::ToolResult;
use crate::models::{SubjectClassificationsInput, SubjectSource};

/// Subject classification tool.
pub struct SubjectClassificationsTool;

#[async_trait::async_trait]
impl McpTool for SubjectClassificationsTool {
    fn name(&self) -> &'static str {
        "subject_classifications"
    }

    fn description(&self) -> &'static str {
        "Retrieve subject area classifications used in Scopus or ScienceDirect. Useful for \
         finding subject codes to filter searches. Returns classification codes, abbreviations, \
         and descriptions."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "source": {
                    "type": "string",
                    "enum": SubjectSource::values(),
                    "description": "Classification source. 'scopus' for Scopus ASJC codes, \
                                    'scidir' for ScienceDirect subject areas."
                },
                "description": {
                    "type": "string",
                    "description": "Filter by description (case-insensitive partial match). \
                                    Example: 'computer' to find Computer Science areas."
                },
                "detail": {
                    "type": "string",
                    "description": "Filter by detail attribute (case-insensitive partial match)."
                },
                "code": {
                    "type": "string",
                    "description": "Filter by exact code. Scopus example: '1106', ScienceDirect example: '391'."
                },
                "abbrev": {
                    "type": "string",
                    "description": "Filter by exact abbreviation. Examples: 'AGRI', 'COMP', 'MEDI'."
                },
                "field": {
                    "type": "string",
                    "description": "Specific fields to return (comma-delimited). Options: 'code', \
                                    'abbrev', 'detail', 'description'."
                }
            },
            "required": ["source"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SubjectClassificationsInput = serde_json::from_value(input)?;

        let path = format!("/content/subject/{}", params.source);
        let query = QueryParams::new()
            .with("description", params.description)
            .with("detail", params.detail)
            .with("code", params.code)
            .with("abbrev", params.abbrev)
            .with("field", params.field);

        let data = ctx.client.get(&path, &query).await?;
        to_text(&data)
    }
}
