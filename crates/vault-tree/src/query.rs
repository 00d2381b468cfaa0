//! Search phrase parsing and matching.
//!
//! This module provides the search language of the file list:
//! - Directive parsing (`tag:`, `all:`) with scope resolution
//! - Compiled predicates evaluated against file nodes
//! - Case-insensitive substring matching

mod parser;
mod predicate;
mod text_match;

pub use parser::{
    ParsedQuery, QueryKind, QueryParser, SearchScope, ALL_SEARCH_LABEL, TAG_SEARCH_LABEL,
};
pub use predicate::SearchPredicate;
