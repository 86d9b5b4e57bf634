//! Input models for MCP tool parameters.
//!
//! Field names follow the tool schemas (snake_case). Shape is enforced by
//! serde; ranges and "at least one of" rules by `validate()`.

use serde::{Deserialize, Serialize};

use super::{
    AbstractIdType, AbstractView, AffiliationIdType, AffiliationView, ArticleIdType, ArticleView,
    AuthorIdType, AuthorView, CitationFilter, OpenAccess, PlumxIdType, SearchView, SerialView,
    SubjectSource,
};
use crate::error::{ToolError, ToolResult};

/// Maximum page size of the Scopus search APIs.
pub const MAX_SEARCH_COUNT: u32 = 25;

/// Maximum page size of serial title search.
pub const MAX_SERIAL_COUNT: u32 = 200;

fn require_non_blank(field: &str, value: &str) -> ToolResult<()> {
    if value.trim().is_empty() {
        return Err(ToolError::validation(field, "cannot be empty"));
    }
    Ok(())
}

fn check_count(count: Option<u32>, max: Option<u32>) -> ToolResult<()> {
    match (count, max) {
        (Some(0), _) => Err(ToolError::validation("count", "must be at least 1")),
        (Some(c), Some(max)) if c > max => {
            Err(ToolError::validation("count", format!("must be at most {max}")))
        }
        _ => Ok(()),
    }
}

fn any_present(values: &[Option<&String>]) -> bool {
    values.iter().flatten().any(|v| !v.trim().is_empty())
}

/// Input for Scopus document search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopusSearchInput {
    /// Scopus Boolean query, e.g. `TITLE(machine learning) AND PUBYEAR > 2020`.
    pub query: String,
    #[serde(default)]
    pub start: Option<u32>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub sort: Option<String>,
    /// `YYYY` or `YYYY-YYYY`.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub view: Option<SearchView>,
    #[serde(default)]
    pub field: Option<String>,
    /// Subject area codes, e.g. `COMP,MATH`.
    #[serde(default)]
    pub subj: Option<String>,
    #[serde(default)]
    pub facets: Option<String>,
}

impl ScopusSearchInput {
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("query", &self.query)?;
        check_count(self.count, Some(MAX_SEARCH_COUNT))
    }
}

/// Input for Scopus author search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorSearchInput {
    /// Author query, e.g. `AUTHLASTNAME(Einstein)`.
    pub query: String,
    /// Author ID whose co-authors to list.
    #[serde(default)]
    pub co_author: Option<String>,
    #[serde(default)]
    pub start: Option<u32>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub view: Option<SearchView>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub facets: Option<String>,
}

impl AuthorSearchInput {
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("query", &self.query)?;
        check_count(self.count, Some(MAX_SEARCH_COUNT))
    }
}

/// Input for Scopus affiliation search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AffiliationSearchInput {
    /// Affiliation query, e.g. `AFFIL(Harvard)`.
    pub query: String,
    #[serde(default)]
    pub start: Option<u32>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub view: Option<SearchView>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub facets: Option<String>,
}

impl AffiliationSearchInput {
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("query", &self.query)?;
        check_count(self.count, Some(MAX_SEARCH_COUNT))
    }
}

/// Input for abstract retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbstractRetrievalInput {
    pub id_type: AbstractIdType,
    pub id_value: String,
    #[serde(default)]
    pub view: Option<AbstractView>,
    #[serde(default)]
    pub field: Option<String>,
}

impl AbstractRetrievalInput {
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("id_value", &self.id_value)
    }
}

/// Input for ScienceDirect article retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRetrievalInput {
    pub id_type: ArticleIdType,
    pub id_value: String,
    #[serde(default)]
    pub view: Option<ArticleView>,
    #[serde(default)]
    pub field: Option<String>,
}

impl ArticleRetrievalInput {
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("id_value", &self.id_value)
    }
}

/// Input for author profile retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRetrievalInput {
    pub id_type: AuthorIdType,
    pub id_value: String,
    #[serde(default)]
    pub view: Option<AuthorView>,
    #[serde(default)]
    pub field: Option<String>,
}

impl AuthorRetrievalInput {
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("id_value", &self.id_value)
    }
}

/// Input for affiliation profile retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffiliationRetrievalInput {
    pub id_type: AffiliationIdType,
    pub id_value: String,
    #[serde(default)]
    pub view: Option<AffiliationView>,
    /// Not compatible with the DOCUMENTS or AUTHORS views.
    #[serde(default)]
    pub field: Option<String>,
}

impl AffiliationRetrievalInput {
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("id_value", &self.id_value)
    }
}

/// Input for serial title (journal) search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerialTitleSearchInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub issn: Option<String>,
    /// Publisher name.
    #[serde(default)]
    pub r#pub: Option<String>,
    #[serde(default)]
    pub subj: Option<String>,
    /// `journal`, `tradejournal`, `conferenceproceeding` or `bookseries`.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub oa: Option<OpenAccess>,
    #[serde(default)]
    pub view: Option<SerialView>,
    #[serde(default)]
    pub start: Option<u32>,
    #[serde(default)]
    pub count: Option<u32>,
}

impl SerialTitleSearchInput {
    pub fn validate(&self) -> ToolResult<()> {
        if !any_present(&[
            self.title.as_ref(),
            self.issn.as_ref(),
            self.r#pub.as_ref(),
            self.subj.as_ref(),
        ]) {
            return Err(ToolError::validation(
                "title",
                "at least one search criterion is required: title, issn, pub, or subj",
            ));
        }
        check_count(self.count, Some(MAX_SERIAL_COUNT))
    }
}

/// Input for serial title retrieval by ISSN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialTitleRetrievalInput {
    pub issn: String,
    #[serde(default)]
    pub view: Option<SerialView>,
}

impl SerialTitleRetrievalInput {
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("issn", &self.issn)
    }
}

/// Input for subject classification lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectClassificationsInput {
    pub source: SubjectSource,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub abbrev: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
}

/// Input for citation counts. Identifiers may be comma-separated for batches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitationCountInput {
    #[serde(default)]
    pub scopus_id: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub pii: Option<String>,
    #[serde(default)]
    pub pubmed_id: Option<String>,
}

impl CitationCountInput {
    pub fn validate(&self) -> ToolResult<()> {
        if !any_present(&[
            self.scopus_id.as_ref(),
            self.doi.as_ref(),
            self.pii.as_ref(),
            self.pubmed_id.as_ref(),
        ]) {
            return Err(ToolError::validation(
                "scopus_id",
                "at least one identifier is required: scopus_id, doi, pii, or pubmed_id",
            ));
        }
        Ok(())
    }
}

/// Input for the yearly citations overview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitationsOverviewInput {
    #[serde(default)]
    pub scopus_id: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub pii: Option<String>,
    #[serde(default)]
    pub pubmed_id: Option<String>,
    /// `YYYY-YYYY`.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start: Option<u32>,
    #[serde(default)]
    pub count: Option<u32>,
    /// `+sort-year`, `-sort-year` or `rowTotal`.
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub citation: Option<CitationFilter>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub view: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
}

impl CitationsOverviewInput {
    pub fn validate(&self) -> ToolResult<()> {
        if !any_present(&[
            self.scopus_id.as_ref(),
            self.doi.as_ref(),
            self.pii.as_ref(),
            self.pubmed_id.as_ref(),
        ]) {
            return Err(ToolError::validation(
                "scopus_id",
                "at least one document identifier is required: scopus_id, doi, pii, or pubmed_id",
            ));
        }
        check_count(self.count, None)
    }
}

/// Input for PlumX altmetrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlumxMetricsInput {
    pub id_type: PlumxIdType,
    pub id_value: String,
}

impl PlumxMetricsInput {
    pub fn validate(&self) -> ToolResult<()> {
        require_non_blank("id_value", &self.id_value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_scopus_search_count_bounds() {
        let mut input = ScopusSearchInput { query: "TITLE(x)".into(), ..Default::default() };
        assert!(input.validate().is_ok());

        input.count = Some(25);
        assert!(input.validate().is_ok());

        input.count = Some(26);
        assert!(input.validate().is_err());

        input.count = Some(0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_blank_query_rejected() {
        let input = AuthorSearchInput { query: "  ".into(), ..Default::default() };
        assert!(matches!(input.validate(), Err(ToolError::Validation { field, .. }) if field == "query"));
    }

    #[test]
    fn test_serial_search_needs_a_criterion() {
        let input = SerialTitleSearchInput { content: Some("journal".into()), ..Default::default() };
        assert!(input.validate().is_err());

        let input = SerialTitleSearchInput { r#pub: Some("Elsevier".into()), ..Default::default() };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_pub_field_name_on_the_wire() {
        let input: SerialTitleSearchInput = serde_json::from_value(json!({"pub": "Wiley"})).unwrap();
        assert_eq!(input.r#pub.as_deref(), Some("Wiley"));
    }

    #[test]
    fn test_negative_start_rejected_by_type() {
        let result = serde_json::from_value::<ScopusSearchInput>(json!({"query": "q", "start": -1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_citation_count_requires_identifier() {
        assert!(CitationCountInput::default().validate().is_err());
        let input = CitationCountInput { doi: Some("10.1016/x".into()), ..Default::default() };
        assert!(input.validate().is_ok());
    }
}
