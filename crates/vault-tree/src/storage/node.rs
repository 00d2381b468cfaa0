//! Vault node types.
//!
//! A node is either a folder or a file. Folders own an ordered list of child
//! ids; every node except the root carries its parent id.

use serde::{Deserialize, Serialize};

use super::index_types::NodeId;

/// Node kind enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

/// A node in the vault slab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultNode {
    /// Basename including extension; empty for the root.
    name: String,
    /// Full vault path, kept in sync by the tree on rename/move.
    path: String,
    parent: Option<NodeId>,
    /// Child node ids in creation order (empty for files).
    pub children: Vec<NodeId>,
    kind: NodeKind,
    /// Extension without the leading dot; empty for folders and extensionless files.
    extension: String,
    /// Modification time as a Unix timestamp; 0 for folders.
    modified_at: i64,
}

impl VaultNode {
    /// Creates a folder node.
    pub fn folder(name: &str, path: String, parent: Option<NodeId>) -> Self {
        Self {
            name: name.to_string(),
            path,
            parent,
            children: Vec::new(),
            kind: NodeKind::Folder,
            extension: String::new(),
            modified_at: 0,
        }
    }

    /// Creates a file node.
    pub fn file(name: &str, path: String, parent: NodeId, modified_at: i64) -> Self {
        Self {
            name: name.to_string(),
            path,
            parent: Some(parent),
            children: Vec::new(),
            kind: NodeKind::File,
            extension: extension_of_name(name).to_string(),
            modified_at,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the parent node id, `None` only for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    #[inline]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[inline]
    pub fn modified_at(&self) -> i64 {
        self.modified_at
    }

    pub(crate) fn set_modified_at(&mut self, modified_at: i64) {
        self.modified_at = modified_at;
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        if self.is_file() {
            self.extension = extension_of_name(name).to_string();
        }
    }

    pub(crate) fn set_path(&mut self, path: String) {
        self.path = path;
    }

    /// Adds a child node id, keeping the list free of duplicates.
    pub fn add_child(&mut self, child: NodeId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    /// Removes a child node id, returns true if it was present.
    pub fn remove_child(&mut self, child: NodeId) -> bool {
        if let Some(pos) = self.children.iter().position(|&c| c == child) {
            self.children.remove(pos);
            true
        } else {
            false
        }
    }
}

/// Splits a basename into display stem and extension at the last dot.
///
/// Names without a dot have an empty extension.
pub fn split_file_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(split) => (&name[..split], &name[split + 1..]),
        None => (name, ""),
    }
}

fn extension_of_name(name: &str) -> &str {
    split_file_name(name).1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_node_derives_extension() {
        let node = VaultNode::file(
            "report.final.pdf",
            "/report.final.pdf".into(),
            NodeId::new(0),
            5,
        );
        assert_eq!(node.extension(), "pdf");
        assert!(node.is_file());
        assert_eq!(node.modified_at(), 5);
    }

    #[test]
    fn split_file_name_uses_last_dot() {
        assert_eq!(split_file_name("note.md"), ("note", "md"));
        assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar", "gz"));
        assert_eq!(split_file_name("Makefile"), ("Makefile", ""));
        assert_eq!(split_file_name(".gitignore"), ("", "gitignore"));
    }

    #[test]
    fn rename_updates_extension_for_files_only() {
        let mut file = VaultNode::file("a.md", "/a.md".into(), NodeId::new(0), 0);
        file.set_name("a.canvas");
        assert_eq!(file.extension(), "canvas");

        let mut folder = VaultNode::folder("dir.old", "/dir.old".into(), Some(NodeId::new(0)));
        folder.set_name("dir.new");
        assert_eq!(folder.extension(), "");
    }

    #[test]
    fn children_are_deduplicated() {
        let mut folder = VaultNode::folder("", "/".into(), None);
        folder.add_child(NodeId::new(1));
        folder.add_child(NodeId::new(1));
        folder.add_child(NodeId::new(2));
        assert_eq!(folder.children, vec![NodeId::new(1), NodeId::new(2)]);
        assert!(folder.remove_child(NodeId::new(1)));
        assert!(!folder.remove_child(NodeId::new(1)));
    }
}
