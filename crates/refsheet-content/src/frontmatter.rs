//! YAML front-matter extraction from cheatsheet markdown.
//!
//! Front matter is metadata at the start of a document, delimited by `---`:
//!
//! ```markdown
//! ---
//! title: Vim
//! tags:
//!   - editor
//!   - shortcuts
//! ---
//!
//! ## Section Content
//! ```
//!
//! Extraction never fails: a missing block yields empty [`Metadata`], and a
//! block with malformed YAML is logged as a warning and also yields empty
//! [`Metadata`]. In every case the matched block (both delimiter lines
//! included) is removed from the body handed to structural parsing.
//!
//! # Example
//!
//! ```
//! use refsheet_content::frontmatter::extract_frontmatter;
//!
//! let content = "---\ntitle: Demo\n---\n\n## Basics";
//! let (metadata, body) = extract_frontmatter(content);
//! assert_eq!(metadata.title.as_deref(), Some("Demo"));
//! assert_eq!(body.trim(), "## Basics");
//! ```

use crate::document::Metadata;

/// Extract YAML front matter from document content.
///
/// Returns the decoded [`Metadata`] and the body slice following the
/// closing delimiter.
///
/// # Behavior
///
/// - No opening `---` on the first line: empty metadata, body unchanged.
/// - Opening delimiter without a closing one: warn, body unchanged.
/// - Valid block with malformed YAML: warn, empty metadata, block removed.
/// - Valid block: decoded metadata, block removed.
pub fn extract_frontmatter(content: &str) -> (Metadata, &str) {
    // The opening delimiter must be the very first line.
    let Some(first_newline) = content.find('\n') else {
        return (Metadata::default(), content);
    };
    if trim_line_end(&content[..first_newline]) != "---" {
        return (Metadata::default(), content);
    }

    let rest = &content[first_newline + 1..];
    let Some((yaml_end, body_start)) = find_closing_delimiter(rest) else {
        log::warn!("Front-matter opening delimiter found but no closing delimiter");
        return (Metadata::default(), content);
    };

    let yaml = &rest[..yaml_end];
    let body = &rest[body_start..];

    if yaml.trim().is_empty() {
        return (Metadata::default(), body);
    }

    match serde_yaml::from_str::<Metadata>(yaml) {
        Ok(metadata) => (metadata, body),
        Err(e) => {
            log::warn!("Failed to parse front-matter YAML: {e}");
            (Metadata::default(), body)
        }
    }
}

/// Find the closing `---` line in the text after the opening delimiter.
///
/// Returns `(yaml_end, body_start)` byte offsets: the YAML block ends at
/// the closing line's start, and the body begins after the closing line's
/// terminator.
fn find_closing_delimiter(rest: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if trim_line_end(line) == "---" {
            return Some((offset, offset + line.len()));
        }
        offset += line.len();
    }
    None
}

/// Strip the trailing newline (and optional carriage return) from a line.
fn trim_line_end(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

// ============================================================================
// Tests
// ============================================================================
