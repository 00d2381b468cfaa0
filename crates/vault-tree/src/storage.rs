//! Storage layer: the in-memory node model of a vault.
//!
//! This module provides the low-level data storage primitives:
//! - Slab allocator addressed by compact `NodeId`s
//! - Folder/file node records
//! - `VaultTree`, the path-indexed tree mutated by the storage collaborator

mod index_types;
mod node;
mod path;
mod slab;
mod tree;

pub use index_types::NodeId;
pub use node::{split_file_name, NodeKind, VaultNode};
pub use path::{is_descendant_path, join_path, normalize_vault_path, split_parent};
pub use slab::Slab;
pub use tree::VaultTree;
