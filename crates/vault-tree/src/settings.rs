//! User settings consumed by the explorer.
//!
//! Settings are stored as JSON with camelCase keys. Missing keys take their
//! default values, so a partial document loads over the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};
use crate::filter::ExclusionRules;
use crate::index::CountClass;
use crate::metadata::TagOrder;
use crate::sort::SortPolicy;

/// Which files folder counts include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderCountOption {
    /// Only files with a note extension.
    #[default]
    Notes,
    /// Every file.
    Files,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Comma-separated extensions hidden from file lists.
    pub excluded_extensions: String,
    /// Comma-separated folder paths hidden from file lists.
    pub excluded_folders: String,
    pub sort_files_by: Vec<String>,
    pub tag_order: Vec<String>,
    pub folder_count_option: FolderCountOption,
    pub note_extensions: Vec<String>,
    /// Scope `tag:` and `all:` searches to the focused folder.
    pub all_search_only_in_focused_folder: bool,
    pub show_files_from_sub_folders: bool,
    /// When off, search phrases are ignored.
    pub search_function: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            excluded_extensions: String::new(),
            excluded_folders: String::new(),
            sort_files_by: vec!["path".into(), "tags".into(), "order".into()],
            tag_order: Vec::new(),
            folder_count_option: FolderCountOption::Notes,
            note_extensions: vec!["md".into()],
            all_search_only_in_focused_folder: false,
            show_files_from_sub_folders: true,
            search_function: true,
        }
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(raw).map_err(|error| {
            log::warn!("failed to decode settings: {error}");
            VaultError::from(error)
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Note extensions are bare names such as `md`.
    pub fn validate(&self) -> Result<()> {
        for ext in &self.note_extensions {
            if ext.is_empty() || ext.starts_with('.') {
                log::warn!("rejecting note extension {ext:?}");
                return Err(VaultError::Settings(format!(
                    "note extension {ext:?} must be non-empty and have no leading dot"
                )));
            }
        }
        Ok(())
    }

    pub fn excluded_extensions(&self) -> Vec<String> {
        parse_comma_list(&self.excluded_extensions)
    }

    pub fn excluded_folders(&self) -> Vec<String> {
        parse_comma_list(&self.excluded_folders)
    }

    pub fn exclusion_rules(&self) -> ExclusionRules {
        ExclusionRules::new(self.excluded_extensions(), self.excluded_folders())
    }

    pub fn sort_policy(&self) -> SortPolicy {
        SortPolicy::from_keys(&self.sort_files_by)
    }

    pub fn tag_order(&self) -> TagOrder {
        TagOrder::new(self.tag_order.iter().cloned())
    }

    pub fn count_class(&self) -> CountClass<'_> {
        match self.folder_count_option {
            FolderCountOption::Notes => CountClass::Notes(&self.note_extensions),
            FolderCountOption::Files => CountClass::AllFiles,
        }
    }
}
