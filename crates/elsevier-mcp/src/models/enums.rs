//! Enumeration types for tool parameters.
//!
//! Variants serialize to the exact spelling the Elsevier APIs expect, so the
//! same value can go straight into a path segment or query string.

use serde::{Deserialize, Serialize};

/// Declare a string-valued parameter enum with `as_str()` and `ALL`.
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in schema order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Value sent to the API.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Accepted values, for JSON Schema `enum` lists.
            #[must_use]
            pub fn values() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

api_enum! {
    /// Identifier accepted by the Abstract Retrieval API.
    AbstractIdType {
        ScopusId => "scopus_id",
        Eid => "eid",
        Doi => "doi",
        Pii => "pii",
        PubmedId => "pubmed_id",
    }
}

api_enum! {
    /// Identifier accepted by the Article (full text) Retrieval API.
    ArticleIdType {
        Doi => "doi",
        Pii => "pii",
        Eid => "eid",
    }
}

api_enum! {
    /// Identifier accepted by the Author Retrieval API.
    AuthorIdType {
        AuthorId => "author_id",
        Eid => "eid",
        Orcid => "orcid",
    }
}

api_enum! {
    /// Identifier accepted by the Affiliation Retrieval API.
    AffiliationIdType {
        AffiliationId => "affiliation_id",
        Eid => "eid",
    }
}

api_enum! {
    /// Identifier accepted by the PlumX Metrics API.
    PlumxIdType {
        Doi => "doi",
        Pmid => "pmid",
        Pmcid => "pmcid",
        Isbn => "isbn",
        ElsevierId => "elsevierId",
        ElsevierPii => "elsevierPii",
    }
}

api_enum! {
    /// Subject classification scheme.
    SubjectSource {
        /// Scopus ASJC codes.
        Scopus => "scopus",
        /// ScienceDirect subject areas.
        ScienceDirect => "scidir",
    }
}

api_enum! {
    /// Detail level of the search APIs.
    SearchView {
        Standard => "STANDARD",
        Complete => "COMPLETE",
    }
}

api_enum! {
    /// Detail level of Abstract Retrieval.
    AbstractView {
        Meta => "META",
        MetaAbs => "META_ABS",
        Full => "FULL",
        Ref => "REF",
        Entitled => "ENTITLED",
    }
}

api_enum! {
    /// Detail level of Article Retrieval.
    ArticleView {
        Meta => "META",
        MetaAbs => "META_ABS",
        Full => "FULL",
        Entitled => "ENTITLED",
    }
}

api_enum! {
    /// Detail level of Author Retrieval.
    AuthorView {
        Light => "LIGHT",
        Standard => "STANDARD",
        Enhanced => "ENHANCED",
        Metrics => "METRICS",
    }
}

api_enum! {
    /// Detail level of Affiliation Retrieval.
    AffiliationView {
        Light => "LIGHT",
        Standard => "STANDARD",
        Documents => "DOCUMENTS",
        Authors => "AUTHORS",
        Entitled => "ENTITLED",
    }
}

api_enum! {
    /// Detail level of the Serial Title APIs.
    SerialView {
        Standard => "STANDARD",
        Enhanced => "ENHANCED",
        CiteScore => "CITESCORE",
    }
}

api_enum! {
    /// Open access filter for serial title search.
    OpenAccess {
        All => "all",
        Full => "full",
        Partial => "partial",
        NoAccess => "none",
    }
}

api_enum! {
    /// Citation filter for the citations overview.
    CitationFilter {
        ExcludeSelf => "exclude-self",
        ExcludeBooks => "exclude-books",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_api_spelling() {
        let v: AbstractIdType = serde_json::from_str("\"pubmed_id\"").unwrap();
        assert_eq!(v, AbstractIdType::PubmedId);
        assert_eq!(serde_json::to_string(&PlumxIdType::ElsevierPii).unwrap(), "\"elsevierPii\"");
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert!(serde_json::from_str::<ArticleIdType>("\"scopus_id\"").is_err());
    }

    #[test]
    fn test_values_in_schema_order() {
        assert_eq!(SubjectSource::values(), vec!["scopus", "scidir"]);
        assert_eq!(AffiliationView::ALL.len(), 5);
    }
}
