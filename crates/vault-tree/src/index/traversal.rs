//! Folder traversal producing flat file listings.

use crate::storage::{VaultNode, VaultTree};

/// Lists the files under `start_path` in depth-first pre-order.
///
/// Children are visited in child order: a file is emitted when reached, and
/// with `recurse` set a subfolder is walked in full before its next sibling.
/// A path that does not resolve to a folder yields an empty listing, which is
/// the normal state of a folder that is being renamed or moved.
pub fn list_files<'a>(
    tree: &'a VaultTree,
    start_path: &str,
    recurse: bool,
) -> Vec<&'a VaultNode> {
    let Some(start) = tree.resolve_folder(start_path).and_then(|id| tree.get(id)) else {
        log::debug!("list_files: {start_path} is not a folder, returning no files");
        return Vec::new();
    };

    let mut files = Vec::new();
    // Each frame is a folder's children plus the position of the next one to visit.
    let mut stack = vec![(start.children.as_slice(), 0usize)];
    while let Some((children, position)) = stack.last_mut() {
        let Some(&child_id) = children.get(*position) else {
            stack.pop();
            continue;
        };
        *position += 1;

        let Some(child) = tree.get(child_id) else {
            continue;
        };
        if child.is_file() {
            files.push(child);
        } else if recurse {
            stack.push((child.children.as_slice(), 0));
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(files: &[&VaultNode]) -> Vec<String> {
        files.iter().map(|node| node.path().to_string()).collect()
    }

    fn interleaved_tree() -> VaultTree {
        let mut tree = VaultTree::new("Vault");
        tree.create_folder("/A").unwrap();
        tree.create_file("/A/a1.md", 0).unwrap();
        tree.create_folder("/A/B").unwrap();
        tree.create_file("/A/B/b1.md", 0).unwrap();
        tree.create_folder("/A/B/C").unwrap();
        tree.create_file("/A/B/C/c1.md", 0).unwrap();
        tree.create_file("/A/B/b2.md", 0).unwrap();
        tree.create_file("/A/a2.md", 0).unwrap();
        tree.create_folder("/D").unwrap();
        tree.create_file("/D/d1.md", 0).unwrap();
        tree
    }

    #[test]
    fn recursive_listing_is_preorder() {
        let tree = interleaved_tree();
        let files = list_files(&tree, "/A", true);
        assert_eq!(
            names(&files),
            vec!["/A/a1.md", "/A/B/b1.md", "/A/B/C/c1.md", "/A/B/b2.md", "/A/a2.md"]
        );
    }

    #[test]
    fn recursive_listing_from_root_covers_every_file_once() {
        let tree = interleaved_tree();
        let mut listed = names(&list_files(&tree, "/", true));
        let mut all = tree
            .iter_files()
            .map(|(_, node)| node.path().to_string())
            .collect::<Vec<_>>();
        assert_eq!(listed.len(), all.len());
        listed.sort();
        all.sort();
        assert_eq!(listed, all);
    }

    #[test]
    fn non_recursive_listing_returns_direct_children_only() {
        let tree = interleaved_tree();
        let files = list_files(&tree, "/A", false);
        assert_eq!(names(&files), vec!["/A/a1.md", "/A/a2.md"]);
    }

    #[test]
    fn unresolvable_or_file_path_yields_nothing() {
        let tree = interleaved_tree();
        assert!(list_files(&tree, "/missing", true).is_empty());
        assert!(list_files(&tree, "/A/a1.md", true).is_empty());
    }
}
