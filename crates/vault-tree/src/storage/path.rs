//! Vault path normalization and composition.
//!
//! Vault paths are slash-delimited and absolute: the root folder is `/`, a
//! top-level folder is `/Notes`, a file inside it `/Notes/todo.md`.

/// Normalizes a raw vault path (forward slashes, leading slash, no trailing slash).
///
/// An empty path resolves to the root, which is also how the rendering side
/// spells "no folder selected".
pub fn normalize_vault_path(raw: &str) -> String {
    let replaced = raw.trim().replace('\\', "/");
    let segments = split_path_segments(replaced.as_str());
    if segments.is_empty() {
        return "/".to_string();
    }
    let mut normalized = String::with_capacity(replaced.len() + 1);
    for segment in segments {
        normalized.push('/');
        normalized.push_str(segment);
    }
    normalized
}

/// Splits a path into its non-empty segments.
pub fn split_path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Joins a child name onto a normalized folder path.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent == "/" {
        format!("/{name}")
    } else {
        format!("{parent}/{name}")
    }
}

/// Splits a normalized path into its parent folder path and final name.
///
/// Returns `None` for the root, which has neither.
pub fn split_parent(path: &str) -> Option<(&str, &str)> {
    if path == "/" {
        return None;
    }
    let split = path.rfind('/')?;
    let name = &path[split + 1..];
    if name.is_empty() {
        return None;
    }
    let parent = if split == 0 { "/" } else { &path[..split] };
    Some((parent, name))
}

/// Checks if a candidate path lies strictly below the parent path.
pub fn is_descendant_path(candidate: &str, parent: &str) -> bool {
    if candidate == parent {
        return false;
    }
    if parent == "/" {
        return candidate.starts_with('/');
    }
    candidate
        .strip_prefix(parent)
        .is_some_and(|rest| rest.starts_with('/'))
}
