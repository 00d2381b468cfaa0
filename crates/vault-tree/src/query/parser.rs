//! Search phrase parser.
//!
//! A phrase is either a directive or a plain name search:
//! - `tag:<query>` - files under the tag-search root with a tag containing `<query>`
//! - `all:<query>` - files under the vault (or focused folder) whose name contains `<query>`
//! - anything else - files under the current folder whose name contains the phrase
//!
//! Directives anchor at the start of the phrase and are tested in that order,
//! each against the original phrase.

use serde::{Deserialize, Serialize};

use super::predicate::SearchPredicate;
use crate::index::folder_name;
use crate::storage::normalize_vault_path;

const TAG_DIRECTIVE: &str = "tag:";
const ALL_DIRECTIVE: &str = "all:";

pub const TAG_SEARCH_LABEL: &str = "Files with Tag";
pub const ALL_SEARCH_LABEL: &str = "All Files";

/// The kind of search a phrase parsed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Plain,
    Tag,
    All,
}

/// Where a search looks, supplied by session state and settings.
#[derive(Debug, Clone, Copy)]
pub struct SearchScope<'a> {
    /// Folder currently shown in the file list.
    pub current_folder: &'a str,
    /// Folder the user focused in the folder pane, if any.
    pub focused_folder: Option<&'a str>,
    /// Restrict `tag:` and `all:` searches to the focused folder.
    pub focused_only: bool,
    /// Whether plain listings include files from subfolders.
    pub include_subfolders: bool,
    /// Shown as the header when the current folder is the root.
    pub vault_name: &'a str,
}

impl SearchScope<'_> {
    /// Root of `tag:`/`all:` searches: the focused folder or the whole vault.
    fn directive_root(&self) -> String {
        if !self.focused_only {
            return "/".to_string();
        }
        match self.focused_folder {
            Some(folder) => normalize_vault_path(folder),
            None => {
                log::warn!(
                    "focused-folder search requested without a focused folder, using vault root"
                );
                "/".to_string()
            }
        }
    }
}

/// Result of parsing a search phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    pub kind: QueryKind,
    /// Folder the listing is collected from.
    pub search_root: String,
    /// Whether the listing descends into subfolders.
    pub recursive: bool,
    /// Phrase with any directive prefix removed.
    pub phrase: String,
    /// Header text for the rendering side.
    pub label: String,
    pub predicate: SearchPredicate,
}

/// Parses search phrases into scoped predicates.
pub struct QueryParser;

impl QueryParser {
    pub fn parse(raw: &str, scope: &SearchScope<'_>) -> ParsedQuery {
        if let Some(rest) = raw.strip_prefix(TAG_DIRECTIVE) {
            let predicate = SearchPredicate::tag(rest);
            if predicate == SearchPredicate::MatchNone {
                log::debug!("empty tag query, search yields no files");
            }
            return ParsedQuery {
                kind: QueryKind::Tag,
                search_root: scope.directive_root(),
                recursive: true,
                phrase: rest.to_string(),
                label: TAG_SEARCH_LABEL.to_string(),
                predicate,
            };
        }

        if let Some(rest) = raw.strip_prefix(ALL_DIRECTIVE) {
            return ParsedQuery {
                kind: QueryKind::All,
                search_root: scope.directive_root(),
                recursive: true,
                phrase: rest.to_string(),
                label: ALL_SEARCH_LABEL.to_string(),
                predicate: SearchPredicate::name(rest),
            };
        }

        let current = normalize_vault_path(scope.current_folder);
        ParsedQuery {
            kind: QueryKind::Plain,
            label: folder_name(current.as_str(), scope.vault_name).to_string(),
            search_root: current,
            recursive: scope.include_subfolders,
            phrase: raw.to_string(),
            predicate: SearchPredicate::name(raw),
        }
    }
}
