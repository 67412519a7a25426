//! Parse entry points: content, single file, and batch.
//!
//! Parsing a string is pure and synchronous; reading a file is the only
//! async boundary. Batch parsing fans out one independent read + parse
//! per path and isolates failures per file, so one unreadable input never
//! affects the others.

use crate::clean::clean_content;
use crate::document::{Document, Metadata};
use crate::frontmatter::extract_frontmatter;
use crate::options::ParseOptions;
use crate::split::split_sections;
use refsheet_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Parse raw cheatsheet markdown into a [`Document`].
///
/// Never fails: malformed front matter degrades to empty metadata, and a
/// body without the expected heading structure degrades to an empty or
/// partial section tree.
///
/// # Example
///
/// ```
/// use refsheet_content::{parse_content, ParseOptions};
///
/// let doc = parse_content("## Basics\n### Hello\ntext\n", &ParseOptions::default());
/// assert_eq!(doc.sections.len(), 1);
/// assert_eq!(doc.sections[0].subsections[0].title, "Hello");
/// ```
pub fn parse_content(content: &str, options: &ParseOptions) -> Document {
    let (metadata, body) = extract_frontmatter(content);
    let metadata = if options.include_metadata {
        metadata
    } else {
        Metadata::default()
    };

    let cleaned = clean_content(body);
    let sections = split_sections(&cleaned, options);

    Document { metadata, sections }
}

/// Read and parse one cheatsheet file.
///
/// The file read is the single suspend point; parsing the content is
/// synchronous. Only true I/O failures surface as errors.
pub async fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Document> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_at(path, e))?;
    log::debug!("Parsed {}", path.display());
    Ok(parse_content(&content, options))
}

/// Per-file result of a batch parse.
#[derive(Debug)]
pub struct ParseOutcome {
    /// The input path this outcome belongs to.
    pub file_path: PathBuf,
    /// The parsed document, or the I/O error that prevented it.
    pub result: Result<Document>,
}

impl ParseOutcome {
    /// Returns `true` if this file parsed successfully.
    pub fn success(&self) -> bool {
        self.result.is_ok()
    }

    /// The parsed document, if successful.
    pub fn document(&self) -> Option<&Document> {
        self.result.as_ref().ok()
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }
}

/// Parse a batch of files, one independent outcome per path.
///
/// Reads run concurrently; outcomes keep input order. A failure for one
/// path is captured in its own [`ParseOutcome`] and never aborts the
/// batch.
pub async fn parse_files(paths: &[PathBuf], options: &ParseOptions) -> Vec<ParseOutcome> {
    let tasks = paths.iter().map(|path| async move {
        ParseOutcome {
            file_path: path.clone(),
            result: parse_file(path, options).await,
        }
    });
    futures::future::join_all(tasks).await
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CardKind;
    use std::io::Write;

    // ------------------------------------------------------------------------
    // parse_content tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_end_to_end_scenario() {
        let content = "---\ntitle: Demo\ntags: [a, b]\n---\n\n## Basics\n### Hello World {.wide}\n```python\nprint(\"hi\")\n```\nPrints hi to stdout.\n";
        let doc = parse_content(content, &ParseOptions::default());

        assert_eq!(doc.metadata.title.as_deref(), Some("Demo"));
        assert_eq!(doc.metadata.tags, vec!["a", "b"]);
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "Basics");

        let sub = &doc.sections[0].subsections[0];
        assert_eq!(sub.title, "Hello World");
        let card = &sub.cards[0];
        assert_eq!(card.body, "```python\nprint(\"hi\")\n```");
        assert_eq!(card.footer, "Prints hi to stdout.");
        assert_eq!(card.span_config, "wide");
        assert!(!card.is_shortcuts_card());
    }

    #[test]
    fn test_shortcuts_scenario() {
        let content = "## Keys\n### Editing {.shortcuts}\n| Shortcut | Action |\n|---|---|\n| Cmd C | Copy |\n| Cmd V | Paste |\n";
        let doc = parse_content(content, &ParseOptions::default());
        let card = &doc.sections[0].subsections[0].cards[0];

        assert!(card.is_shortcuts_card());
        match &card.kind {
            CardKind::Shortcuts(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].shortcut, "Cmd C");
                assert_eq!(rows[1].action, "Paste");
            }
            CardKind::Plain => panic!("Expected shortcuts card"),
        }
    }

    #[test]
    fn test_empty_input_degrades_gracefully() {
        let doc = parse_content("", &ParseOptions::default());
        assert!(doc.metadata.is_empty());
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_body_without_headings() {
        let doc = parse_content("plain prose, no structure", &ParseOptions::default());
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_no_metadata_option_still_strips_block() {
        let content = "---\ntitle: Hidden\n---\n## Section\n### Sub\ntext\n";
        let options = ParseOptions::default().with_include_metadata(false);
        let doc = parse_content(content, &options);

        assert!(doc.metadata.is_empty());
        // Front matter must not leak into the section tree.
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "Section");
    }

    #[test]
    fn test_parse_round_trips_through_json() {
        let content = "---\ntitle: RT\n---\n## S\n### A {.shortcuts}\n| Cmd K | Clear |\n### B\n```sh\nls\n```\nListing.\n";
        let doc = parse_content(content, &ParseOptions::default());
        let json = doc.to_json(2).unwrap();
        assert_eq!(Document::from_json(&json).unwrap(), doc);
    }

    // ------------------------------------------------------------------------
    // parse_file / parse_files tests
    // ------------------------------------------------------------------------

    fn write_sheet(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_parse_file_success() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_sheet(&dir, "demo.md", "## S\n### T\nbody\n");

        let doc = parse_file(&path, &ParseOptions::default()).await.unwrap();
        assert_eq!(doc.sections[0].title, "S");
    }

    #[tokio::test]
    async fn test_parse_file_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.md");

        let err = parse_file(&missing, &ParseOptions::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("nope.md"));
    }

    #[tokio::test]
    async fn test_batch_isolation() {
        let dir = tempfile::TempDir::new().unwrap();
        let first = write_sheet(&dir, "a.md", "## A\n### A1\ntext\n");
        let missing = dir.path().join("missing.md");
        let third = write_sheet(&dir, "c.md", "## C\n### C1\ntext\n");

        let paths = vec![first, missing, third];
        let outcomes = parse_files(&paths, &ParseOptions::default()).await;

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].success());
        assert!(!outcomes[1].success());
        assert!(outcomes[1].error().is_some());
        assert!(outcomes[2].success());
        assert_eq!(outcomes[2].document().unwrap().sections[0].title, "C");
        // Outcomes keep input order.
        assert!(outcomes[1].file_path.ends_with("missing.md"));
    }

    #[tokio::test]
    async fn test_batch_empty_input() {
        let outcomes = parse_files(&[], &ParseOptions::default()).await;
        assert!(outcomes.is_empty());
    }
}
