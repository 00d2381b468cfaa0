//! Result types handed to the rendering collaborator.

use serde::{Deserialize, Serialize};

use crate::query::QueryKind;
use crate::storage::{split_file_name, VaultNode};

/// A file in a display list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub name: String,
    pub extension: String,
    pub modified_at: i64,
    pub pinned: bool,
}

impl FileEntry {
    pub fn from_node(node: &VaultNode, pinned: bool) -> Self {
        Self {
            path: node.path().to_string(),
            name: node.name().to_string(),
            extension: node.extension().to_string(),
            modified_at: node.modified_at(),
            pinned,
        }
    }

    /// Name shown in the list, without extension.
    pub fn display_name(&self) -> &str {
        split_file_name(&self.name).0
    }

    pub fn is_note(&self, note_extensions: &[String]) -> bool {
        note_extensions.iter().any(|ext| *ext == self.extension)
    }

    /// Extension badge for files that are not notes.
    pub fn badge(&self, note_extensions: &[String]) -> Option<&str> {
        if self.is_note(note_extensions) {
            None
        } else {
            Some(self.extension.as_str())
        }
    }
}

/// Ordered file list for one folder view or search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayList {
    /// Header text: folder name, "Files with Tag" or "All Files".
    pub header: String,
    pub kind: QueryKind,
    /// Folder the listing was collected from.
    pub search_root: String,
    pub files: Vec<FileEntry>,
}

impl DisplayList {
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.path.as_str()).collect()
    }
}
