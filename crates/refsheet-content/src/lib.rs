//! Structured cheatsheet markdown parsing and JSON document model.
//!
//! This crate converts hand-authored cheatsheet markdown — a YAML
//! front-matter block plus a fixed H2/H3/H4 heading convention — into a
//! nested document tree consumable by a rendering layer:
//!
//! - H2 headings open sections, H3 headings open subsections;
//! - each subsection yields at most one [`Card`] of code + explanation;
//! - H3 headings may carry a `{.class}` layout annotation, with
//!   `{.shortcuts}` marking keyboard-shortcut tables that are decoded
//!   into structured rows.
//!
//! This is not a general markdown renderer: only the narrow document
//! convention above is recognized, and structurally unexpected input
//! degrades to a partial tree instead of failing.
//!
//! # Modules
//!
//! - [`document`]: parse-result model and JSON serializer
//! - [`frontmatter`]: YAML front-matter extraction
//! - [`clean`]: idempotent body normalization
//! - [`shortcuts`]: keyboard-shortcut table extraction
//! - [`options`]: parse options
//! - [`parse`]: content, file, and batch entry points
//!
//! Heading splitting and card assembly are internal (`split`, `card`).
//!
//! # Example
//!
//! ```
//! use refsheet_content::{parse_content, ParseOptions};
//!
//! let content = "---\ntitle: Demo\n---\n\n## Basics\n### Hello {.wide}\n```sh\necho hi\n```\nSays hi.\n";
//! let doc = parse_content(content, &ParseOptions::default());
//!
//! assert_eq!(doc.metadata.title.as_deref(), Some("Demo"));
//! let card = &doc.sections[0].subsections[0].cards[0];
//! assert_eq!(card.span_config, "wide");
//! assert_eq!(card.footer, "Says hi.");
//! ```

pub mod clean;
pub mod document;
pub mod frontmatter;
pub mod options;
pub mod parse;
pub mod shortcuts;

mod card;
mod split;

// Re-export key types and functions
pub use clean::clean_content;
pub use document::{Card, CardKind, Document, KeyboardShortcut, Metadata, Section};
pub use frontmatter::extract_frontmatter;
pub use options::ParseOptions;
pub use parse::{parse_content, parse_file, parse_files, ParseOutcome};
pub use shortcuts::extract_shortcuts;
