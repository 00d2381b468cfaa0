//! Per-file metadata supplied by an external resolver.
//!
//! Metadata (tags, classification code, arbitrary frontmatter-like fields) is
//! never stored on the tree. It is resolved by path whenever a search or sort
//! needs it, and a missing resolver or missing entry behaves as empty metadata.

use std::collections::BTreeMap;

use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::normalize_vault_path;

/// A typed metadata field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Number(f64),
    Text(String),
}

impl MetadataValue {
    /// String form used when building a composite sort index.
    ///
    /// Whole numbers print without a fractional part.
    pub fn to_index_string(&self) -> String {
        match self {
            Self::Number(value) if value.is_finite() && value.fract() == 0.0 => {
                format!("{}", *value as i64)
            }
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

/// Resolved metadata for one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub tags: Vec<String>,
    pub classification_code: Option<String>,
    pub fields: BTreeMap<String, MetadataValue>,
}

impl Metadata {
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn first_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// Looks up a named field.
    ///
    /// `lcc` and `classification` address the classification code; an empty
    /// code counts as absent.
    pub fn field(&self, name: &str) -> Option<MetadataValue> {
        match name {
            "lcc" | "classification" => self
                .classification_code
                .as_ref()
                .filter(|code| !code.is_empty())
                .map(|code| MetadataValue::Text(code.clone())),
            _ => self.fields.get(name).cloned(),
        }
    }
}

/// Resolves metadata for a file path.
pub trait MetadataResolver {
    fn resolve(&self, path: &str) -> Metadata;
}

/// Resolver used when no metadata provider is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetadata;

impl MetadataResolver for NoMetadata {
    fn resolve(&self, _path: &str) -> Metadata {
        Metadata::default()
    }
}

impl<F> MetadataResolver for F
where
    F: Fn(&str) -> Metadata,
{
    fn resolve(&self, path: &str) -> Metadata {
        self(path)
    }
}

/// In-memory metadata keyed by vault path.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    entries: FnvHashMap<String, Metadata>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &str, metadata: Metadata) {
        self.entries.insert(normalize_vault_path(path), metadata);
    }

    pub fn remove(&mut self, path: &str) -> Option<Metadata> {
        self.entries.remove(normalize_vault_path(path).as_str())
    }

    /// Moves an entry along with a renamed file.
    pub fn rename(&mut self, from: &str, to: &str) {
        if let Some(metadata) = self.remove(from) {
            self.insert(to, metadata);
        }
    }

    pub fn get(&self, path: &str) -> Option<&Metadata> {
        self.entries.get(normalize_vault_path(path).as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetadataResolver for MetadataStore {
    fn resolve(&self, path: &str) -> Metadata {
        self.get(path).cloned().unwrap_or_default()
    }
}

/// Priority ordering of tag names; earlier tags sort first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagOrder(Vec<String>);

impl TagOrder {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    /// Loads a tag ordering from a JSON array of strings.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Position of `tag` in the ordering, if listed.
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.0.iter().position(|candidate| candidate == tag)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
