//! VaultTree - hierarchical node model backed by slab storage.
//!
//! The tree is the storage collaborator's view of the vault: it is mutated in
//! response to create/rename/move/delete events and read by everything else
//! in this crate. A path index keeps path resolution O(1).

use fnv::FnvHashMap;

use super::index_types::NodeId;
use super::node::VaultNode;
use super::path::{is_descendant_path, join_path, normalize_vault_path, split_parent};
use super::slab::Slab;
use crate::error::{Result, VaultError};

/// Hierarchical vault tree.
#[derive(Debug, Clone)]
pub struct VaultTree {
    /// Display name of the vault, shown in place of the root path.
    name: String,
    slab: Slab<VaultNode>,
    root: NodeId,
    paths: FnvHashMap<String, NodeId>,
}

impl VaultTree {
    /// Creates a tree holding only the root folder `/`.
    pub fn new(name: impl Into<String>) -> Self {
        let mut slab = Slab::new();
        let root = slab.insert(VaultNode::folder("", "/".to_string(), None));
        let mut paths = FnvHashMap::default();
        paths.insert("/".to_string(), root);
        Self {
            name: name.into(),
            slab,
            root,
            paths,
        }
    }

    /// Returns the vault display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the root folder id.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Gets a node by its id.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&VaultNode> {
        self.slab.get(id)
    }

    /// Returns the number of nodes, root included.
    pub fn len(&self) -> usize {
        self.slab.len()
    }

    /// Returns true if the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.slab.len() <= 1
    }

    /// Resolves a path to a node of either kind.
    pub fn resolve(&self, path: &str) -> Option<NodeId> {
        self.paths.get(normalize_vault_path(path).as_str()).copied()
    }

    /// Resolves a path to a folder node; files and absent paths give `None`.
    pub fn resolve_folder(&self, path: &str) -> Option<NodeId> {
        self.resolve(path)
            .filter(|&id| self.get(id).is_some_and(VaultNode::is_folder))
    }

    /// Resolves a path to a file node; folders and absent paths give `None`.
    pub fn resolve_file(&self, path: &str) -> Option<NodeId> {
        self.resolve(path)
            .filter(|&id| self.get(id).is_some_and(VaultNode::is_file))
    }

    /// Iterates over every node in slab order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &VaultNode)> {
        self.slab.iter()
    }

    /// Iterates over every file node in slab order.
    pub fn iter_files(&self) -> impl Iterator<Item = (NodeId, &VaultNode)> {
        self.slab.iter().filter(|(_, node)| node.is_file())
    }

    /// Creates a folder; its parent folder must already exist.
    pub fn create_folder(&mut self, path: &str) -> Result<NodeId> {
        let (parent, path, name) = self.prepare_insert(path)?;
        let id = self
            .slab
            .insert(VaultNode::folder(name.as_str(), path.clone(), Some(parent)));
        self.attach(parent, id, path);
        Ok(id)
    }

    /// Creates a folder and any missing ancestors; existing folders are reused.
    pub fn ensure_folder(&mut self, path: &str) -> Result<NodeId> {
        let normalized = normalize_vault_path(path);
        let mut current = self.root;
        let mut current_path = "/".to_string();
        for segment in normalized.split('/').filter(|s| !s.is_empty()) {
            current_path = join_path(current_path.as_str(), segment);
            current = match self.paths.get(current_path.as_str()).copied() {
                Some(id) if self.slab[id].is_folder() => id,
                Some(_) => return Err(VaultError::NotAFolder(current_path)),
                None => self.create_folder(current_path.as_str())?,
            };
        }
        Ok(current)
    }

    /// Creates a file; its parent folder must already exist.
    pub fn create_file(&mut self, path: &str, modified_at: i64) -> Result<NodeId> {
        let (parent, path, name) = self.prepare_insert(path)?;
        let id = self.slab.insert(VaultNode::file(
            name.as_str(),
            path.clone(),
            parent,
            modified_at,
        ));
        self.attach(parent, id, path);
        Ok(id)
    }

    /// Records a content modification of an existing file.
    pub fn touch_file(&mut self, path: &str, modified_at: i64) -> Result<()> {
        let id = self
            .resolve_file(path)
            .ok_or_else(|| VaultError::PathNotFound(normalize_vault_path(path)))?;
        self.slab[id].set_modified_at(modified_at);
        Ok(())
    }

    /// Removes a node and, for folders, its whole subtree.
    pub fn remove(&mut self, path: &str) -> Result<()> {
        let normalized = normalize_vault_path(path);
        let id = self.paths.get(normalized.as_str()).copied();
        let Some(id) = id.filter(|&id| id != self.root) else {
            return Err(VaultError::PathNotFound(normalized));
        };

        if let Some(parent) = self.slab[id].parent() {
            self.slab[parent].remove_child(id);
        }
        for removed in self.subtree(id) {
            if let Some(node) = self.slab.try_remove(removed) {
                self.paths.remove(node.path());
            }
        }
        log::debug!("removed {normalized} from vault tree");
        Ok(())
    }

    /// Renames or moves a node; folder descendants follow along.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        let from = normalize_vault_path(from);
        let to = normalize_vault_path(to);
        let id = self
            .paths
            .get(from.as_str())
            .copied()
            .filter(|&id| id != self.root)
            .ok_or_else(|| VaultError::PathNotFound(from.clone()))?;
        if is_descendant_path(to.as_str(), from.as_str()) {
            return Err(VaultError::InvalidPath(format!(
                "cannot move {from} into its own subtree"
            )));
        }
        let (new_parent, _, new_name) = self.prepare_insert(to.as_str())?;

        if let Some(old_parent) = self.slab[id].parent() {
            self.slab[old_parent].remove_child(id);
        }
        self.slab[new_parent].add_child(id);
        let node = &mut self.slab[id];
        node.set_parent(new_parent);
        node.set_name(new_name.as_str());

        for moved in self.subtree(id) {
            let old_path = self.slab[moved].path().to_string();
            let new_path = match old_path.strip_prefix(from.as_str()) {
                Some(rest) => format!("{to}{rest}"),
                None => continue,
            };
            self.paths.remove(old_path.as_str());
            self.paths.insert(new_path.clone(), moved);
            self.slab[moved].set_path(new_path);
        }
        log::debug!("renamed {from} to {to}");
        Ok(())
    }

    /// Returns `id` followed by all its descendants in pre-order.
    fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            if let Some(node) = self.slab.get(current) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        result
    }

    /// Validates a new path and returns (parent id, normalized path, name).
    fn prepare_insert(&self, path: &str) -> Result<(NodeId, String, String)> {
        let normalized = normalize_vault_path(path);
        if self.paths.contains_key(normalized.as_str()) {
            return Err(VaultError::AlreadyExists(normalized));
        }
        let (parent_path, name) = split_parent(normalized.as_str())
            .ok_or_else(|| VaultError::InvalidPath(normalized.clone()))?;
        let parent = self
            .paths
            .get(parent_path)
            .copied()
            .ok_or_else(|| VaultError::PathNotFound(parent_path.to_string()))?;
        if !self.slab[parent].is_folder() {
            return Err(VaultError::NotAFolder(parent_path.to_string()));
        }
        let name = name.to_string();
        Ok((parent, normalized, name))
    }

    fn attach(&mut self, parent: NodeId, id: NodeId, path: String) {
        self.slab[parent].add_child(id);
        self.paths.insert(path, id);
    }
}
