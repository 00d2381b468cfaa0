//! Vault file-tree indexing, filtering, search and sorting.
//!
//! This crate provides the read side of a vault file explorer:
//! - Slab-backed folder/file tree addressed by vault paths
//! - Pre-order file listings, folder trees and per-folder counts
//! - Search phrase parsing (`tag:`, `all:`, plain name search)
//! - Exclusion filtering and numeric-aware or metadata-driven sorting

pub mod error;
pub mod explorer;
pub mod filter;
pub mod index;
pub mod metadata;
pub mod query;
pub mod session;
pub mod settings;
pub mod sort;
pub mod storage;
pub mod types;

// Re-export main types
pub use error::{Result, VaultError};
pub use explorer::FileExplorer;
pub use filter::{ExclusionRules, FileFilter, FilterStages};
pub use index::{build_counts, list_files, CountClass, FolderCountMap, FolderTreeNode};
pub use metadata::{Metadata, MetadataResolver, MetadataStore, MetadataValue, NoMetadata, TagOrder};
pub use query::{ParsedQuery, QueryKind, QueryParser, SearchPredicate, SearchScope};
pub use session::{PinnedSet, SessionState};
pub use settings::{FolderCountOption, Settings};
pub use sort::{build_index, sort_files, SortIndex, SortKeySpec, SortPolicy};
pub use storage::{NodeId, NodeKind, VaultNode, VaultTree};
pub use types::{DisplayList, FileEntry};
