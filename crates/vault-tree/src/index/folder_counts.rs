//! Per-folder recursive file counts.

use fnv::FnvHashMap;

use super::node_view::Ancestors;
use crate::storage::{VaultNode, VaultTree};

/// Folder path to number of matching files anywhere below it.
pub type FolderCountMap = FnvHashMap<String, usize>;

/// Which files contribute to folder counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountClass<'a> {
    /// Only files whose extension is one of the note extensions.
    Notes(&'a [String]),
    /// Every file.
    AllFiles,
}

impl CountClass<'_> {
    pub fn matches(&self, file: &VaultNode) -> bool {
        match self {
            Self::Notes(extensions) => extensions.iter().any(|ext| ext == file.extension()),
            Self::AllFiles => true,
        }
    }
}

/// Counts matching files per ancestor folder in a single pass.
///
/// Each matching file adds one to every folder on its parent chain, the root
/// included. Folders without matching files are absent from the map.
pub fn build_counts<'a, I>(tree: &VaultTree, files: I, class: CountClass<'_>) -> FolderCountMap
where
    I: IntoIterator<Item = &'a VaultNode>,
{
    let mut counts = FolderCountMap::default();
    for file in files {
        if !file.is_file() || !class.matches(file) {
            continue;
        }
        let ancestors = Ancestors::from_parent(tree, file.parent());
        for (_, folder) in ancestors {
            *counts.entry(folder.path().to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Counts over every file in the vault.
pub fn build_vault_counts(tree: &VaultTree, class: CountClass<'_>) -> FolderCountMap {
    build_counts(tree, tree.iter_files().map(|(_, node)| node), class)
}
