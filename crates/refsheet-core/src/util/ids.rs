//! ID normalization utilities.
//!
//! Provides functions for normalizing string identifiers to consistent
//! kebab-case format. Used by the batch driver to derive stable output
//! filenames from input paths.

use std::path::Path;

/// Normalize an identifier to lowercase kebab-case.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Replaces underscores with hyphens
/// 4. Collapses multiple whitespace into single hyphens
///
/// # Examples
///
/// ```
/// use refsheet_core::util::ids::normalize_id;
///
/// assert_eq!(normalize_id("Vim Shortcuts"), "vim-shortcuts");
/// assert_eq!(normalize_id("regex_cheatsheet"), "regex-cheatsheet");
/// assert_eq!(normalize_id("  Mixed   Case  "), "mixed-case");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .replace('_', " ") // Convert underscores to spaces first
        .split_whitespace() // Split on any whitespace, collapsing multiples
        .collect::<Vec<&str>>()
        .join("-")
}

/// Compute an ID from a file path's stem.
///
/// Extracts the file stem (filename without extension) and normalizes it.
/// Returns `None` if the path has no file stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use refsheet_core::util::ids::id_from_path;
///
/// assert_eq!(
///     id_from_path(Path::new("/content/Vim Shortcuts.md")),
///     Some("vim-shortcuts".to_string())
/// );
/// assert_eq!(id_from_path(Path::new("/")), None);
/// ```
pub fn id_from_path(path: &Path) -> Option<String> {
    path.file_stem().and_then(|s| s.to_str()).map(normalize_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    // ------------------------------------------------------------------------
    // normalize_id tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_normalize_id_simple() {
        assert_eq!(normalize_id("bash"), "bash");
    }

    #[test]
    fn test_normalize_id_with_spaces() {
        assert_eq!(normalize_id("Keyboard Shortcuts"), "keyboard-shortcuts");
    }

    #[test]
    fn test_normalize_id_with_underscores() {
        assert_eq!(normalize_id("jwt_decoder"), "jwt-decoder");
    }

    #[test]
    fn test_normalize_id_collapses_whitespace() {
        assert_eq!(normalize_id("a   b\tc"), "a-b-c");
    }

    #[test]
    fn test_normalize_id_already_normalized() {
        assert_eq!(normalize_id("already-normalized"), "already-normalized");
    }

    // ------------------------------------------------------------------------
    // id_from_path tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_id_from_path_markdown_file() {
        assert_eq!(
            id_from_path(Path::new("content/Git Basics.md")),
            Some("git-basics".to_string())
        );
    }

    #[test]
    fn test_id_from_path_no_extension() {
        assert_eq!(id_from_path(Path::new("README")), Some("readme".to_string()));
    }

    #[test]
    fn test_id_from_path_root() {
        assert_eq!(id_from_path(Path::new("/")), None);
    }
}
