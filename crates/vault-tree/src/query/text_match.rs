//! Case-insensitive substring matching.

/// Normalizes a raw search needle: lowercased, leading whitespace removed.
///
/// Trailing whitespace is kept, so `"note "` does not match `"note.md"`.
pub fn normalize_needle(raw: &str) -> String {
    raw.to_lowercase().trim_start().to_string()
}

/// Checks if `haystack` contains an already-normalized needle, ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needle_keeps_trailing_whitespace() {
        assert_eq!(normalize_needle("  Foo "), "foo ");
        assert_eq!(normalize_needle("\tBAR"), "bar");
    }

    #[test]
    fn contains_ignores_case() {
        assert!(contains_ignore_case("Meeting Notes.md", "notes"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("note.md", "note "));
    }
}
