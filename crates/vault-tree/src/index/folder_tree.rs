//! Folder-only tree view used by the folder pane.

use serde::Serialize;

use super::node_view::folder_name;
use crate::storage::{VaultNode, VaultTree};

/// A folder and its subfolders; files never appear in this view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderTreeNode {
    pub path: String,
    pub name: String,
    pub children: Vec<FolderTreeNode>,
}

/// Builds a fresh folder tree rooted at `start_path`.
///
/// Returns `None` when the path does not resolve to a folder.
pub fn create_folder_tree(tree: &VaultTree, start_path: &str) -> Option<FolderTreeNode> {
    let start = tree.resolve_folder(start_path).and_then(|id| tree.get(id))?;
    Some(build_folder_node(tree, start))
}

fn build_folder_node(tree: &VaultTree, node: &VaultNode) -> FolderTreeNode {
    let children = node
        .children
        .iter()
        .filter_map(|&child| tree.get(child))
        .filter(|child| child.is_folder())
        .map(|child| build_folder_node(tree, child))
        .collect();
    FolderTreeNode {
        path: node.path().to_string(),
        name: folder_name(node.path(), tree.name()).to_string(),
        children,
    }
}

/// Checks if a folder has at least one subfolder.
pub fn has_child_folder(tree: &VaultTree, folder_path: &str) -> bool {
    let Some(node) = tree.resolve_folder(folder_path).and_then(|id| tree.get(id)) else {
        return false;
    };
    node.children
        .iter()
        .any(|&child| tree.get(child).is_some_and(|c| c.is_folder()))
}
