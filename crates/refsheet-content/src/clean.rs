//! Body-text normalization applied before structural parsing.
//!
//! Cleaning runs once over the whole post-front-matter body and again on
//! each subsection's content before card splitting, so it must be
//! idempotent: `clean_content(clean_content(x)) == clean_content(x)`.
//!
//! What it does:
//!
//! - trims surrounding whitespace,
//! - drops a leading empty horizontal-rule block (`---` followed by a
//!   blank line) left behind by front-matter-style separators,
//! - strips standalone horizontal-rule lines unless they sit next to
//!   markdown table syntax,
//! - collapses runs of three or more newlines down to two.

use regex::Regex;

/// Normalize body text for structural parsing. Idempotent.
///
/// # Example
///
/// ```
/// use refsheet_content::clean::clean_content;
///
/// let cleaned = clean_content("---\n\n## Title\n\n\n\ntext\n***\n");
/// assert_eq!(cleaned, "## Title\n\ntext");
/// ```
pub fn clean_content(content: &str) -> String {
    let text = content.trim();

    // Leading empty horizontal-rule block at the very start.
    let leading_rule_re =
        Regex::new(r"^---[ \t]*\n[ \t]*\n").expect("Invalid leading rule regex");
    let text = leading_rule_re.replace(text, "");

    // Standalone horizontal rules, preserving table separators.
    let lines: Vec<&str> = text.lines().collect();
    let rule_re =
        Regex::new(r"^\s*(\*{3,}|-{3,}|_{3,})\s*$").expect("Invalid horizontal rule regex");
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    for (idx, line) in lines.iter().enumerate() {
        if rule_re.is_match(line) && !near_table(&lines, idx) {
            continue;
        }
        kept.push(line);
    }
    let joined = kept.join("\n");

    // Collapse 3+ consecutive newlines to exactly 2.
    let blank_re = Regex::new(r"\n{3,}").expect("Invalid blank line regex");
    blank_re.replace_all(&joined, "\n\n").trim().to_string()
}

/// Heuristic: is the rule at `idx` part of a markdown table?
///
/// Inspects up to 3 lines before and after; any neighbor containing a `|`
/// that is not a heading marks the rule as table syntax to preserve.
fn near_table(lines: &[&str], idx: usize) -> bool {
    let start = idx.saturating_sub(3);
    let end = (idx + 3).min(lines.len().saturating_sub(1));
    lines[start..=end]
        .iter()
        .any(|line| line.contains('|') && !line.trim_start().starts_with('#'))
}

// ============================================================================
// Tests
// ============================================================================
