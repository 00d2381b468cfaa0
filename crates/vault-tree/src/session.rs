//! Session state supplied by the caller on every request.

use serde::{Deserialize, Serialize};

use crate::storage::{is_descendant_path, normalize_vault_path, VaultTree};

/// Paths the user pinned to the top of file lists, in pin order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinnedSet {
    paths: Vec<String>,
}

impl PinnedSet {
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for path in paths {
            set.pin(path.as_ref());
        }
        set
    }

    /// Pins `path`; returns false if it was already pinned.
    pub fn pin(&mut self, path: &str) -> bool {
        let path = normalize_vault_path(path);
        if self.paths.contains(&path) {
            return false;
        }
        self.paths.push(path);
        true
    }

    /// Unpins `path`; returns false if it was not pinned.
    pub fn unpin(&mut self, path: &str) -> bool {
        let path = normalize_vault_path(path);
        let before = self.paths.len();
        self.paths.retain(|pinned| *pinned != path);
        self.paths.len() != before
    }

    /// Flips the pin state of `path` and returns the new state.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.unpin(path) {
            false
        } else {
            self.pin(path)
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|pinned| pinned == path)
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Follows a rename or move of a file or folder.
    pub fn rename_path(&mut self, from: &str, to: &str) {
        let from = normalize_vault_path(from);
        let to = normalize_vault_path(to);
        for pinned in &mut self.paths {
            if *pinned == from {
                *pinned = to.clone();
            } else if is_descendant_path(pinned, &from) {
                *pinned = format!("{to}{}", &pinned[from.len()..]);
            }
        }
    }

    /// Drops paths that no longer resolve to a file.
    pub fn retain_existing(&mut self, tree: &VaultTree) {
        let before = self.paths.len();
        self.paths.retain(|pinned| tree.resolve_file(pinned).is_some());
        let dropped = before - self.paths.len();
        if dropped > 0 {
            log::debug!("dropped {dropped} stale pinned paths");
        }
    }
}

/// Per-view state owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionState {
    /// Folder shown in the file list.
    pub active_folder: String,
    /// Folder focused in the folder pane.
    pub focused_folder: Option<String>,
    pub pinned: PinnedSet,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            active_folder: "/".to_string(),
            focused_folder: None,
            pinned: PinnedSet::default(),
        }
    }
}

impl SessionState {
    pub fn new(active_folder: &str) -> Self {
        Self {
            active_folder: normalize_vault_path(active_folder),
            ..Self::default()
        }
    }

    pub fn with_focused_folder(mut self, folder: &str) -> Self {
        self.focused_folder = Some(normalize_vault_path(folder));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_keeps_order_and_dedups() {
        let mut pinned = PinnedSet::default();
        assert!(pinned.pin("/b.md"));
        assert!(pinned.pin("a.md"));
        assert!(!pinned.pin("/b.md"));
        assert_eq!(pinned.iter().collect::<Vec<_>>(), vec!["/b.md", "/a.md"]);
        assert!(pinned.contains("/a.md"));
    }

    #[test]
    fn toggle_flips_state() {
        let mut pinned = PinnedSet::default();
        assert!(pinned.toggle("/a.md"));
        assert!(pinned.contains("/a.md"));
        assert!(!pinned.toggle("/a.md"));
        assert!(pinned.is_empty());
        assert!(!pinned.unpin("/a.md"));
    }

    #[test]
    fn rename_follows_files_and_folders() {
        let mut pinned = PinnedSet::from_paths(["/A/x.md", "/A/B/y.md", "/AB/z.md"]);
        pinned.rename_path("/A/x.md", "/A/w.md");
        pinned.rename_path("/A", "/C");
        assert_eq!(
            pinned.iter().collect::<Vec<_>>(),
            vec!["/C/w.md", "/C/B/y.md", "/AB/z.md"]
        );
    }

    #[test]
    fn retain_existing_drops_stale_paths() {
        let mut tree = VaultTree::new("Vault");
        tree.create_file("/keep.md", 0).unwrap();
        let mut pinned = PinnedSet::from_paths(["/gone.md", "/keep.md"]);
        pinned.retain_existing(&tree);
        assert_eq!(pinned.iter().collect::<Vec<_>>(), vec!["/keep.md"]);

        pinned.clear();
        assert_eq!(pinned.len(), 0);
    }

    #[test]
    fn session_serializes_pinned_as_list() {
        let mut session = SessionState::new("Notes").with_focused_folder("Notes");
        session.pinned.pin("/Notes/a.md");
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains(r#""pinned":["/Notes/a.md"]"#));
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
        assert_eq!(back.active_folder, "/Notes");
    }
}
