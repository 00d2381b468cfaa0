//! Ordering of file listings.
//!
//! - `natural` - numeric-aware name comparison
//! - `index_builder` - per-file composite sort keys from metadata
//! - `sorter` - the sort pass with pinned files promoted to the front

mod index_builder;
mod natural;
mod sorter;

pub use index_builder::{build_index, SortIndex, SortKeySpec, SortKeyValue};
pub use natural::compare_natural;
pub use sorter::{sort_files, SortPolicy};
