//! Heading-based structural splitting.
//!
//! Sections are H2 blocks, subsections are H3 blocks inside a section's
//! span. Splitting works over byte offsets from a fresh regex iterator per
//! call, so blocks partition the text contiguously: each block runs from
//! its heading to the start of the next same-level heading (or end of
//! text). Text before the first heading belongs to no block.
//!
//! H3 headings may carry a trailing `{.class}` annotation which is
//! captured as the subsection's span-config candidate and stripped from
//! the title.

use crate::card;
use crate::document::Section;
use crate::options::ParseOptions;
use regex::Regex;
use std::ops::Range;

/// One heading-delimited block of text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HeadingBlock<'a> {
    /// Heading text as written, annotation included.
    pub raw_title: &'a str,
    /// Text between this heading line and the next block (or end).
    pub content: &'a str,
    /// Byte span from the heading start to the next block's start.
    pub span: Range<usize>,
}

/// Split `text` into blocks at headings of the given level (2 or 3).
///
/// Returns an empty vec when no heading of that level exists; that is not
/// an error.
pub(crate) fn heading_blocks(text: &str, level: usize) -> Vec<HeadingBlock<'_>> {
    let pattern = format!(r"(?m)^{} (.+)$", "#".repeat(level));
    let heading_re = Regex::new(&pattern).expect("Invalid heading regex");

    let matches: Vec<(Range<usize>, Range<usize>)> = heading_re
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).expect("match group 0 always present");
            let title = caps.get(1).expect("heading capture always present");
            (whole.range(), title.range())
        })
        .collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, (whole, title))| {
            let block_end = matches
                .get(i + 1)
                .map(|(next, _)| next.start)
                .unwrap_or(text.len());
            HeadingBlock {
                raw_title: &text[title.clone()],
                content: &text[whole.end..block_end],
                span: whole.start..block_end,
            }
        })
        .collect()
}

/// Strip a trailing `{...}` annotation from a heading title.
///
/// Returns the cleaned title and the span-config class name: `{.col-span-2}`
/// yields `"col-span-2"`, any other brace content yields an empty config
/// (but is still stripped from the title).
pub(crate) fn strip_annotation(raw_title: &str) -> (String, String) {
    let annotation_re =
        Regex::new(r"^(.*?)\s*\{([^}]+)\}\s*$").expect("Invalid annotation regex");

    match annotation_re.captures(raw_title.trim()) {
        Some(caps) => {
            let title = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            let span_config = caps
                .get(2)
                .and_then(|m| m.as_str().strip_prefix('.'))
                .unwrap_or("")
                .to_string();
            (title.to_string(), span_config)
        }
        None => (raw_title.trim().to_string(), String::new()),
    }
}

/// Split a cleaned document body into H2 sections.
pub(crate) fn split_sections(body: &str, options: &ParseOptions) -> Vec<Section> {
    heading_blocks(body, 2)
        .into_iter()
        .map(|block| {
            let (title, _) = strip_annotation(block.raw_title);
            Section {
                title,
                level: 2,
                cards: Vec::new(),
                subsections: split_subsections(block.content, options),
            }
        })
        .collect()
}

/// Split a section's content span into H3 subsections with their cards.
pub(crate) fn split_subsections(content: &str, options: &ParseOptions) -> Vec<Section> {
    heading_blocks(content, 3)
        .into_iter()
        .map(|block| {
            let (title, span_config) = strip_annotation(block.raw_title);
            let cards = card::parse_cards(block.content, &title, &span_config, options);
            Section {
                title,
                level: 3,
                cards,
                subsections: Vec::new(),
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
