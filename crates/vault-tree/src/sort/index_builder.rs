//! Composite sort keys built from file metadata.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::metadata::{Metadata, MetadataValue, TagOrder};
use crate::storage::VaultNode;

/// One entry of a sort key specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKeySpec {
    /// File name including extension.
    Name,
    /// Modification timestamp.
    LastUpdate,
    /// Full vault path.
    Path,
    /// Position of the first tag in the tag ordering.
    Tags,
    /// Any other metadata field.
    Field(String),
}

impl SortKeySpec {
    pub fn parse(key: &str) -> Self {
        match key {
            "name" => Self::Name,
            "last-update" => Self::LastUpdate,
            "path" => Self::Path,
            "tags" => Self::Tags,
            other => {
                log::trace!("sort key {other:?} treated as metadata field");
                Self::Field(other.to_string())
            }
        }
    }

    pub fn parse_all<S: AsRef<str>>(keys: &[S]) -> Vec<Self> {
        keys.iter().map(|key| Self::parse(key.as_ref())).collect()
    }
}

/// A resolved key value.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKeyValue {
    Empty,
    Number(f64),
    Text(String),
}

impl SortKeyValue {
    /// Total per-key comparison.
    ///
    /// Kinds rank `Empty < Number < Text`. Numbers compare numerically and
    /// text compares by byte order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }

    pub fn to_index_string(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Number(value) => MetadataValue::Number(*value).to_index_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

impl From<Option<MetadataValue>> for SortKeyValue {
    fn from(value: Option<MetadataValue>) -> Self {
        match value {
            None => Self::Empty,
            Some(MetadataValue::Number(value)) => Self::Number(value),
            Some(MetadataValue::Text(value)) if value.is_empty() => Self::Empty,
            Some(MetadataValue::Text(value)) => Self::Text(value),
        }
    }
}

/// Per-file sort key, one value per spec entry. Lives for one sort pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SortIndex {
    values: Vec<SortKeyValue>,
}

impl SortIndex {
    pub fn values(&self) -> &[SortKeyValue] {
        &self.values
    }

    /// Key-by-key comparison; a shorter index that is a prefix of a longer one
    /// sorts first.
    pub fn compare(&self, other: &Self) -> Ordering {
        for (a, b) in self.values.iter().zip(&other.values) {
            let ordering = a.compare(b);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        self.values.len().cmp(&other.values.len())
    }

    /// Every value's string form concatenated without separators.
    pub fn to_index_string(&self) -> String {
        self.values
            .iter()
            .map(SortKeyValue::to_index_string)
            .collect()
    }
}

/// Builds the sort index of one file.
pub fn build_index(
    file: &VaultNode,
    metadata: &Metadata,
    specs: &[SortKeySpec],
    tag_order: &TagOrder,
) -> SortIndex {
    let values = specs
        .iter()
        .map(|spec| match spec {
            SortKeySpec::Name => SortKeyValue::Text(file.name().to_string()),
            SortKeySpec::LastUpdate => SortKeyValue::Number(file.modified_at() as f64),
            SortKeySpec::Path => SortKeyValue::Text(file.path().to_string()),
            SortKeySpec::Tags => metadata
                .first_tag()
                .and_then(|tag| tag_order.position(tag))
                .map_or(SortKeyValue::Empty, |position| {
                    SortKeyValue::Number(position as f64)
                }),
            SortKeySpec::Field(name) => SortKeyValue::from(metadata.field(name)),
        })
        .collect();
    SortIndex { values }
}
