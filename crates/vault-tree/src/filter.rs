//! Exclusion and search filtering of file listings.
//!
//! Stages run in a fixed order (extensions, folders, search predicate) and each
//! keeps the relative order of the files it lets through.

use bitflags::bitflags;

use crate::metadata::MetadataResolver;
use crate::query::SearchPredicate;
use crate::storage::VaultNode;

bitflags! {
    /// Filter stages that are switched on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FilterStages: u8 {
        const EXTENSIONS = 0b001;
        const FOLDERS    = 0b010;
        const QUERY      = 0b100;
    }
}

impl Default for FilterStages {
    fn default() -> Self {
        Self::all()
    }
}

/// Configured exclusions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionRules {
    /// Extensions without a leading dot, compared case-sensitively.
    pub extensions: Vec<String>,
    /// Folder path prefixes, each starting with `/`.
    pub folders: Vec<String>,
    pub stages: FilterStages,
}

impl ExclusionRules {
    pub fn new<E, F>(extensions: E, folders: F) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            folders: folders
                .into_iter()
                .map(|folder| rooted_prefix(folder.into()))
                .collect(),
            stages: FilterStages::default(),
        }
    }

    pub fn with_stages(mut self, stages: FilterStages) -> Self {
        self.stages = stages;
        self
    }

    fn excludes_extension(&self, file: &VaultNode) -> bool {
        self.stages.contains(FilterStages::EXTENSIONS)
            && self.extensions.iter().any(|ext| ext == file.extension())
    }

    /// Plain string prefix test: `/Foo` also excludes `/FooBar/x.md`.
    fn excludes_folder(&self, file: &VaultNode) -> bool {
        self.stages.contains(FilterStages::FOLDERS)
            && self
                .folders
                .iter()
                .any(|folder| file.path().starts_with(folder.as_str()))
    }
}

// Configured folders are written relative to the vault ("Archive/Old").
fn rooted_prefix(folder: String) -> String {
    if folder.starts_with('/') {
        folder
    } else {
        format!("/{folder}")
    }
}

/// Applies exclusions and the optional search predicate to a listing.
pub struct FileFilter;

impl FileFilter {
    pub fn apply<'a>(
        files: Vec<&'a VaultNode>,
        rules: &ExclusionRules,
        predicate: Option<&SearchPredicate>,
        metadata: &dyn MetadataResolver,
    ) -> Vec<&'a VaultNode> {
        let query = predicate.filter(|_| rules.stages.contains(FilterStages::QUERY));
        files
            .into_iter()
            .filter(|file| !rules.excludes_extension(file))
            .filter(|file| !rules.excludes_folder(file))
            .filter(|file| query.map_or(true, |predicate| predicate.matches(file, metadata)))
            .collect()
    }
}
