//! Node view helpers for computing derived properties from the parent chain.

use crate::storage::{NodeId, VaultNode, VaultTree};

/// A view into a node that can walk its ancestor chain.
pub struct NodeView<'a> {
    tree: &'a VaultTree,
    id: NodeId,
}

impl<'a> NodeView<'a> {
    #[inline]
    pub fn new(tree: &'a VaultTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Iterates over the ancestor folders, nearest first, ending at the root.
    pub fn ancestors(&self) -> Ancestors<'a> {
        let parent = self.tree.get(self.id).and_then(VaultNode::parent);
        Ancestors::from_parent(self.tree, parent)
    }

    /// Computes the depth (number of ancestors, 0 for the root).
    pub fn depth(&self) -> Option<usize> {
        self.tree.get(self.id)?;
        Some(self.ancestors().count())
    }

    /// Returns every folder path from the root down to the node's parent.
    ///
    /// The rendering side uses this to expand the folder tree up to a file.
    pub fn ancestor_folder_paths(&self) -> Vec<String> {
        let mut paths = self
            .ancestors()
            .map(|(_, node)| node.path().to_string())
            .collect::<Vec<_>>();
        paths.reverse();
        paths
    }
}

/// Iterator over a node's ancestors.
pub struct Ancestors<'a> {
    tree: &'a VaultTree,
    next: Option<NodeId>,
}

impl<'a> Ancestors<'a> {
    /// Starts the walk at `parent`, which is yielded first.
    pub fn from_parent(tree: &'a VaultTree, parent: Option<NodeId>) -> Self {
        Self { tree, next: parent }
    }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeId, &'a VaultNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.tree.get(id)?;
        self.next = node.parent();
        Some((id, node))
    }
}

/// Extracts the display name of a folder; the root shows the vault name.
pub fn folder_name<'a>(folder_path: &'a str, vault_name: &'a str) -> &'a str {
    if folder_path == "/" || folder_path.is_empty() {
        return vault_name;
    }
    match folder_path.rfind('/') {
        Some(index) => &folder_path[index + 1..],
        None => folder_path,
    }
}
