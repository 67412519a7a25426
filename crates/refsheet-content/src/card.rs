//! Card extraction from one subsection's content.
//!
//! Content splits into `body` (the leading fenced code block, optionally
//! combined with leading prose) and `footer` (explanatory text). Two
//! shapes exist:
//!
//! - **flat**: no H4 headings — first fenced block becomes the body, text
//!   after it (heading lines dropped) becomes the footer;
//! - **nested**: H4 headings present — everything from the first H4 onward
//!   is kept verbatim as footer text for the renderer to interpret, and
//!   only the text before it feeds the body. The nested H4 structure is
//!   intentionally not parsed into further cards.
//!
//! A subsection annotated `{.shortcuts}` (or containing that literal
//! marker) produces a shortcuts card with its pipe table decoded into
//! rows.

use crate::clean::clean_content;
use crate::document::{Card, CardKind};
use crate::options::ParseOptions;
use crate::shortcuts::extract_shortcuts;
use regex::Regex;
use std::ops::Range;

/// A fenced code block located inside subsection content.
#[derive(Debug)]
struct CodeBlock<'a> {
    /// Language tag from the opening fence, empty if absent.
    lang: &'a str,
    /// Code text without the surrounding fences.
    code: &'a str,
    /// Byte span of the whole fenced block.
    span: Range<usize>,
}

/// Parse one subsection's content into zero or one cards.
///
/// `content` is the raw text between the H3 heading and the next block;
/// `title` and `span_config` come from the heading. An empty subsection
/// produces no card.
pub(crate) fn parse_cards(
    content: &str,
    title: &str,
    span_config: &str,
    options: &ParseOptions,
) -> Vec<Card> {
    let is_shortcuts = span_config == "shortcuts" || content.contains("{.shortcuts}");
    let cleaned = clean_content(content);

    let h4_re = Regex::new(r"(?m)^#### (.+)$").expect("Invalid H4 heading regex");
    let (body, footer) = match h4_re.find(&cleaned).map(|m| m.start()) {
        None => split_flat(&cleaned, options),
        Some(h4_start) => split_nested(&cleaned, h4_start, options),
    };

    if body.is_empty() && footer.is_empty() {
        return Vec::new();
    }

    let kind = if is_shortcuts {
        let table = if footer.is_empty() { &body } else { &footer };
        CardKind::Shortcuts(extract_shortcuts(table))
    } else {
        CardKind::Plain
    };

    vec![Card {
        title: title.to_string(),
        body,
        footer,
        span_config: if options.include_span_config {
            span_config.to_string()
        } else {
            String::new()
        },
        kind,
    }]
}

/// Flat case: first fenced block is the body, trailing text the footer.
fn split_flat(cleaned: &str, options: &ParseOptions) -> (String, String) {
    match find_code_block(cleaned) {
        Some(block) => {
            let body = format_code(&block, options.preserve_code_blocks);
            let footer = cleaned[block.span.end..]
                .lines()
                .filter(|line| !line.trim_start().starts_with('#'))
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string();
            (body, footer)
        }
        None => (String::new(), cleaned.trim().to_string()),
    }
}

/// Nested case: pre-H4 prose/code feed the body, the rest is verbatim
/// footer markdown.
fn split_nested(cleaned: &str, h4_start: usize, options: &ParseOptions) -> (String, String) {
    let before = &cleaned[..h4_start];
    let footer = cleaned[h4_start..].to_string();

    let body = match find_code_block(before) {
        Some(block) => {
            let prose = before[..block.span.start].trim();
            let code = format_code(&block, options.preserve_code_blocks);
            if prose.is_empty() {
                code
            } else {
                format!("{prose}\n\n{code}")
            }
        }
        None => before.trim().to_string(),
    };

    (body, footer)
}

/// Locate the first fenced code block (```lang ... ```) in `text`.
fn find_code_block(text: &str) -> Option<CodeBlock<'_>> {
    let fence_re = Regex::new(r"(?s)```([^\n`]*)\n(.*?)```").expect("Invalid code fence regex");
    let caps = fence_re.captures(text)?;
    let whole = caps.get(0).expect("match group 0 always present");
    let code = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    Some(CodeBlock {
        lang: caps.get(1).map(|m| m.as_str().trim()).unwrap_or(""),
        // The closing fence sits on its own line; drop the newline that
        // precedes it so re-wrapping stays stable.
        code: code.strip_suffix('\n').unwrap_or(code),
        span: whole.range(),
    })
}

/// Format extracted code for the card body.
///
/// With `preserve` the block is re-wrapped as ```` ```lang\ncode\n``` ````
/// (language tag omitted when the source had none); otherwise the bare
/// code text is returned.
fn format_code(block: &CodeBlock<'_>, preserve: bool) -> String {
    if !preserve {
        return block.code.to_string();
    }
    if block.lang.is_empty() {
        format!("```\n{}\n```", block.code)
    } else {
        format!("```{}\n{}\n```", block.lang, block.code)
    }
}

// ============================================================================
// Tests
// ============================================================================
