//! Search predicates produced by the query parser.

use serde::Serialize;

use super::text_match::{contains_ignore_case, normalize_needle};
use crate::metadata::MetadataResolver;
use crate::storage::VaultNode;

/// A compiled file predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "needle", rename_all = "snake_case")]
pub enum SearchPredicate {
    /// Every file matches.
    MatchAll,
    /// No file matches.
    MatchNone,
    /// File name contains the (normalized) needle.
    NameContains(String),
    /// Some tag of the file contains the (normalized) needle.
    TagContains(String),
}

impl SearchPredicate {
    /// Builds a name predicate; an empty needle matches everything.
    pub fn name(raw: &str) -> Self {
        let needle = normalize_needle(raw);
        if needle.is_empty() {
            Self::MatchAll
        } else {
            Self::NameContains(needle)
        }
    }

    /// Builds a tag predicate; a blank tag query matches nothing.
    pub fn tag(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Self::MatchNone
        } else {
            Self::TagContains(normalize_needle(raw))
        }
    }

    pub fn matches(&self, file: &VaultNode, metadata: &dyn MetadataResolver) -> bool {
        match self {
            Self::MatchAll => true,
            Self::MatchNone => false,
            Self::NameContains(needle) => contains_ignore_case(file.name(), needle),
            Self::TagContains(needle) => metadata
                .resolve(file.path())
                .tags
                .iter()
                .any(|tag| contains_ignore_case(tag, needle)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{Metadata, NoMetadata};
    use crate::storage::NodeId;

    fn file(name: &str) -> VaultNode {
        VaultNode::file(name, format!("/{name}"), NodeId::new(0), 0)
    }

    #[test]
    fn name_predicate_is_case_insensitive() {
        let predicate = SearchPredicate::name("  MEET");
        assert_eq!(predicate, SearchPredicate::NameContains("meet".to_string()));
        assert!(predicate.matches(&file("Meeting.md"), &NoMetadata));
        assert!(!predicate.matches(&file("Agenda.md"), &NoMetadata));
    }

    #[test]
    fn empty_name_predicate_matches_all() {
        assert_eq!(SearchPredicate::name(""), SearchPredicate::MatchAll);
        assert_eq!(SearchPredicate::name("   "), SearchPredicate::MatchAll);
    }

    #[test]
    fn blank_tag_predicate_matches_none() {
        assert_eq!(SearchPredicate::tag(""), SearchPredicate::MatchNone);
        assert_eq!(SearchPredicate::tag(" \t "), SearchPredicate::MatchNone);
        let resolver = |_: &str| Metadata::with_tags(["#x"]);
        assert!(!SearchPredicate::MatchNone.matches(&file("a.md"), &resolver));
    }

    #[test]
    fn tag_predicate_matches_any_tag_substring() {
        let resolver = |path: &str| {
            if path == "/a.md" {
                Metadata::with_tags(["#Project/Alpha", "#todo"])
            } else {
                Metadata::default()
            }
        };
        let predicate = SearchPredicate::tag(" alpha");
        assert!(predicate.matches(&file("a.md"), &resolver));
        assert!(!predicate.matches(&file("b.md"), &resolver));
    }
}
