//! The sort pass applied to filtered listings.

use serde::{Deserialize, Serialize};

use super::index_builder::{build_index, SortIndex, SortKeySpec};
use super::natural::compare_natural;
use crate::metadata::{MetadataResolver, TagOrder};
use crate::session::PinnedSet;
use crate::storage::VaultNode;

/// The single ordering mode of a sort pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortPolicy {
    /// Numeric-aware file name order.
    #[default]
    Name,
    /// Most recently modified first.
    LastUpdate,
    /// Key-by-key order over the given sort keys.
    Metadata(Vec<SortKeySpec>),
}

impl SortPolicy {
    /// Derives the policy from configured sort keys.
    ///
    /// `["name"]` and `["last-update"]` select the dedicated modes, an empty
    /// list falls back to name order and anything else sorts by metadata.
    pub fn from_keys<S: AsRef<str>>(keys: &[S]) -> Self {
        match keys {
            [] => Self::Name,
            [key] if key.as_ref() == "name" => Self::Name,
            [key] if key.as_ref() == "last-update" => Self::LastUpdate,
            _ => Self::Metadata(SortKeySpec::parse_all(keys)),
        }
    }
}

/// Sorts `files` by `policy`, then moves pinned files to the front.
///
/// The sort is stable, and pinned files keep the relative order the sort
/// gave them.
pub fn sort_files<'a>(
    mut files: Vec<&'a VaultNode>,
    policy: &SortPolicy,
    pinned: &PinnedSet,
    metadata: &dyn MetadataResolver,
    tag_order: &TagOrder,
) -> Vec<&'a VaultNode> {
    match policy {
        SortPolicy::Name => files.sort_by(|a, b| compare_natural(a.name(), b.name())),
        SortPolicy::LastUpdate => files.sort_by(|a, b| b.modified_at().cmp(&a.modified_at())),
        SortPolicy::Metadata(specs) => {
            let mut keyed: Vec<(SortIndex, &'a VaultNode)> = files
                .into_iter()
                .map(|file| {
                    let resolved = metadata.resolve(file.path());
                    (build_index(file, &resolved, specs, tag_order), file)
                })
                .collect();
            keyed.sort_by(|(a, _), (b, _)| a.compare(b));
            files = keyed.into_iter().map(|(_, file)| file).collect();
        }
    }

    if pinned.is_empty() {
        return files;
    }
    let (mut front, rest): (Vec<_>, Vec<_>) = files
        .into_iter()
        .partition(|file| pinned.contains(file.path()));
    front.extend(rest);
    front
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::list_files;
    use crate::metadata::{Metadata, MetadataStore, MetadataValue, NoMetadata};
    use crate::storage::VaultTree;

    fn paths(files: &[&VaultNode]) -> Vec<String> {
        files.iter().map(|file| file.path().to_string()).collect()
    }

    fn tree_of(files: &[(&str, i64)]) -> VaultTree {
        let mut tree = VaultTree::new("Vault");
        for (path, modified_at) in files {
            tree.create_file(path, *modified_at).unwrap();
        }
        tree
    }

    #[test]
    fn policy_from_keys() {
        assert_eq!(SortPolicy::from_keys(&["name"]), SortPolicy::Name);
        assert_eq!(SortPolicy::from_keys(&["last-update"]), SortPolicy::LastUpdate);
        assert_eq!(SortPolicy::from_keys::<String>(&[]), SortPolicy::Name);
        assert_eq!(
            SortPolicy::from_keys(&["name", "path"]),
            SortPolicy::Metadata(vec![SortKeySpec::Name, SortKeySpec::Path])
        );
        assert_eq!(
            SortPolicy::from_keys(&["order"]),
            SortPolicy::Metadata(vec![SortKeySpec::Field("order".to_string())])
        );
    }

    #[test]
    fn name_order_is_numeric_aware() {
        let tree = tree_of(&[("/File 10.md", 0), ("/File 2.md", 0)]);
        let sorted = sort_files(
            list_files(&tree, "/", true),
            &SortPolicy::Name,
            &PinnedSet::default(),
            &NoMetadata,
            &TagOrder::default(),
        );
        assert_eq!(paths(&sorted), vec!["/File 2.md", "/File 10.md"]);
    }

    #[test]
    fn last_update_is_most_recent_first() {
        let tree = tree_of(&[("/a.md", 10), ("/b.md", 30), ("/c.md", 20)]);
        let sorted = sort_files(
            list_files(&tree, "/", true),
            &SortPolicy::LastUpdate,
            &PinnedSet::default(),
            &NoMetadata,
            &TagOrder::default(),
        );
        assert_eq!(paths(&sorted), vec!["/b.md", "/c.md", "/a.md"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let tree = tree_of(&[("/c.md", 5), ("/a.md", 5), ("/b.md", 5), ("/d.md", 9)]);
        let sorted = sort_files(
            list_files(&tree, "/", true),
            &SortPolicy::LastUpdate,
            &PinnedSet::default(),
            &NoMetadata,
            &TagOrder::default(),
        );
        assert_eq!(paths(&sorted), vec!["/d.md", "/c.md", "/a.md", "/b.md"]);

        let policy = SortPolicy::from_keys(&["missing"]);
        let sorted = sort_files(
            list_files(&tree, "/", true),
            &policy,
            &PinnedSet::default(),
            &NoMetadata,
            &TagOrder::default(),
        );
        assert_eq!(paths(&sorted), vec!["/c.md", "/a.md", "/b.md", "/d.md"]);
    }

    #[test]
    fn pinned_files_lead_in_sorted_order() {
        let tree = tree_of(&[("/a.md", 0), ("/b.md", 0), ("/c.md", 0), ("/d.md", 0)]);
        let pinned = PinnedSet::from_paths(["/d.md", "/b.md"]);
        let sorted = sort_files(
            list_files(&tree, "/", true),
            &SortPolicy::Name,
            &pinned,
            &NoMetadata,
            &TagOrder::default(),
        );
        assert_eq!(paths(&sorted), vec!["/b.md", "/d.md", "/a.md", "/c.md"]);

        let first_unpinned = sorted
            .iter()
            .position(|file| !pinned.contains(file.path()))
            .unwrap();
        assert!(sorted[first_unpinned..]
            .iter()
            .all(|file| !pinned.contains(file.path())));
    }

    #[test]
    fn metadata_order_uses_tag_positions_and_fields() {
        let tree = tree_of(&[("/a.md", 0), ("/b.md", 0), ("/c.md", 0), ("/d.md", 0)]);
        let mut store = MetadataStore::new();
        store.insert("/b.md", Metadata::with_tags(["#urgent"]));
        store.insert("/c.md", Metadata::with_tags(["#unlisted"]));
        let mut numbered = Metadata::with_tags(["#later"]);
        numbered
            .fields
            .insert("order".to_string(), MetadataValue::Number(10.0));
        store.insert("/d.md", numbered);
        let mut earlier = Metadata::with_tags(["#later"]);
        earlier
            .fields
            .insert("order".to_string(), MetadataValue::Number(9.0));
        store.insert("/a.md", earlier);

        let order = TagOrder::new(["#urgent", "#later"]);
        let sorted = sort_files(
            list_files(&tree, "/", true),
            &SortPolicy::from_keys(&["tags", "order"]),
            &PinnedSet::default(),
            &store,
            &order,
        );
        assert_eq!(paths(&sorted), vec!["/c.md", "/b.md", "/a.md", "/d.md"]);
    }

    #[test]
    fn mixed_field_kinds_sort_independently_of_input_order() {
        let mut store = MetadataStore::new();
        for (path, value) in [
            ("/n9.md", MetadataValue::Number(9.0)),
            ("/n10.md", MetadataValue::Number(10.0)),
            ("/t9.md", MetadataValue::Text("9".to_string())),
        ] {
            let mut metadata = Metadata::default();
            metadata.fields.insert("order".to_string(), value);
            store.insert(path, metadata);
        }
        let policy = SortPolicy::from_keys(&["order"]);

        for input in [
            ["/n10.md", "/t9.md", "/n9.md"],
            ["/t9.md", "/n9.md", "/n10.md"],
            ["/n9.md", "/n10.md", "/t9.md"],
        ] {
            let tree = tree_of(&input.map(|path| (path, 0)));
            let sorted = sort_files(
                list_files(&tree, "/", true),
                &policy,
                &PinnedSet::default(),
                &store,
                &TagOrder::default(),
            );
            assert_eq!(paths(&sorted), vec!["/n9.md", "/n10.md", "/t9.md"]);
        }
    }
}
