//! Typed parameter sets for the Elsevier tools.
//!
//! Enums carry the exact API spelling; input structs mirror the tool schemas.

mod enums;
mod inputs;

pub use enums::{
    AbstractIdType, AbstractView, AffiliationIdType, AffiliationView, ArticleIdType, ArticleView,
    AuthorIdType, AuthorView, CitationFilter, OpenAccess, PlumxIdType, SearchView, SerialView,
    SubjectSource,
};
pub use inputs::*;
