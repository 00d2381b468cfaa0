//! Read-only views over the vault tree.
//!
//! - `traversal` - flat, pre-order file listings for a folder
//! - `folder_tree` - folder-only tree for the folder pane
//! - `folder_counts` - recursive per-folder file counts
//! - `node_view` - ancestor walks and display names

mod folder_counts;
mod folder_tree;
mod node_view;
mod traversal;

pub use folder_counts::{build_counts, build_vault_counts, CountClass, FolderCountMap};
pub use folder_tree::{create_folder_tree, has_child_folder, FolderTreeNode};
pub use node_view::{folder_name, Ancestors, NodeView};
pub use traversal::list_files;
