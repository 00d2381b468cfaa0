//! The composed entry point used by the rendering side.
//!
//! `FileExplorer` borrows the tree, the metadata resolver and the settings for
//! one request; every call recomputes its result from scratch.

use crate::filter::{ExclusionRules, FileFilter};
use crate::index::{
    build_vault_counts, create_folder_tree, has_child_folder, list_files, FolderCountMap,
    FolderTreeNode, NodeView,
};
use crate::metadata::{MetadataResolver, TagOrder};
use crate::query::{QueryParser, SearchScope};
use crate::session::SessionState;
use crate::settings::Settings;
use crate::sort::{sort_files, SortPolicy};
use crate::storage::VaultTree;
use crate::types::{DisplayList, FileEntry};

pub struct FileExplorer<'a> {
    tree: &'a VaultTree,
    metadata: &'a dyn MetadataResolver,
    settings: &'a Settings,
    rules: ExclusionRules,
    policy: SortPolicy,
    tag_order: TagOrder,
}

impl<'a> FileExplorer<'a> {
    pub fn new(
        tree: &'a VaultTree,
        metadata: &'a dyn MetadataResolver,
        settings: &'a Settings,
    ) -> Self {
        Self {
            tree,
            metadata,
            settings,
            rules: settings.exclusion_rules(),
            policy: settings.sort_policy(),
            tag_order: settings.tag_order(),
        }
    }

    /// Replaces the tag ordering from settings, e.g. with one loaded from a tag file.
    pub fn with_tag_order(mut self, tag_order: TagOrder) -> Self {
        self.tag_order = tag_order;
        self
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// Builds the file list for the session's folder and a search phrase.
    pub fn display_list(&self, session: &SessionState, phrase: &str) -> DisplayList {
        let phrase = if self.settings.search_function {
            phrase
        } else {
            ""
        };
        let scope = SearchScope {
            current_folder: &session.active_folder,
            focused_folder: session.focused_folder.as_deref(),
            focused_only: self.settings.all_search_only_in_focused_folder,
            include_subfolders: self.settings.show_files_from_sub_folders,
            vault_name: self.tree.name(),
        };
        let parsed = QueryParser::parse(phrase, &scope);

        let listed = list_files(self.tree, &parsed.search_root, parsed.recursive);
        let filtered = FileFilter::apply(
            listed,
            &self.rules,
            Some(&parsed.predicate),
            self.metadata,
        );
        let sorted = sort_files(
            filtered,
            &self.policy,
            &session.pinned,
            self.metadata,
            &self.tag_order,
        );

        let files = sorted
            .into_iter()
            .map(|node| FileEntry::from_node(node, session.pinned.contains(node.path())))
            .collect();
        DisplayList {
            header: parsed.label,
            kind: parsed.kind,
            search_root: parsed.search_root,
            files,
        }
    }

    /// Per-folder counts over the whole vault for the configured file class.
    pub fn folder_counts(&self) -> FolderCountMap {
        build_vault_counts(self.tree, self.settings.count_class())
    }

    pub fn folder_tree(&self, start_path: &str) -> Option<FolderTreeNode> {
        create_folder_tree(self.tree, start_path)
    }

    pub fn has_child_folder(&self, folder_path: &str) -> bool {
        has_child_folder(self.tree, folder_path)
    }

    /// Folder paths to expand so that `file_path` is visible, root first.
    pub fn reveal_paths(&self, file_path: &str) -> Vec<String> {
        match self.tree.resolve(file_path) {
            Some(id) => NodeView::new(self.tree, id).ancestor_folder_paths(),
            None => Vec::new(),
        }
    }
}
