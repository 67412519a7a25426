//! Keyboard-shortcut table extraction.
//!
//! Shortcut tables use ordinary GitHub pipe-table syntax with a
//! `Shortcut | Action` header row:
//!
//! ```markdown
//! | Shortcut | Action |
//! |---|---|
//! | Cmd C | Copy |
//! | Cmd V | Paste |
//! ```
//!
//! Extraction is deliberately permissive: blank lines, lines without
//! pipes, and separator rows are skipped, and no validation of the key
//! syntax happens here — that belongs to the presentation layer.

use crate::document::KeyboardShortcut;

/// Extract shortcut rows from a text block containing a pipe table.
///
/// The header row (cells matching "shortcut"/"action" case-insensitively)
/// is discarded; remaining rows keep table order.
///
/// # Example
///
/// ```
/// use refsheet_content::shortcuts::extract_shortcuts;
///
/// let table = "| Shortcut | Action |\n|---|---|\n| Cmd C | Copy |";
/// let rows = extract_shortcuts(table);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].shortcut, "Cmd C");
/// assert_eq!(rows[0].action, "Copy");
/// ```
pub fn extract_shortcuts(text: &str) -> Vec<KeyboardShortcut> {
    let text = text.replace("{.shortcuts}", "");
    let mut rows = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || !line.contains('|') || line.contains("---") {
            continue;
        }

        let cells: Vec<&str> = line
            .split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .collect();
        if cells.len() < 2 {
            continue;
        }

        // Header row carries the literal column names.
        if cells[0].eq_ignore_ascii_case("shortcut") && cells[1].eq_ignore_ascii_case("action") {
            continue;
        }

        rows.push(KeyboardShortcut::new(cells[0], cells[1]));
    }

    rows
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic_table() {
        let table = "| Shortcut | Action |\n|---|---|\n| Cmd C | Copy |\n| Cmd V | Paste |";
        let rows = extract_shortcuts(table);
        assert_eq!(
            rows,
            vec![
                KeyboardShortcut::new("Cmd C", "Copy"),
                KeyboardShortcut::new("Cmd V", "Paste"),
            ]
        );
    }

    #[test]
    fn test_header_row_case_insensitive() {
        let table = "| SHORTCUT | action |\n| Esc | Close |";
        let rows = extract_shortcuts(table);
        assert_eq!(rows, vec![KeyboardShortcut::new("Esc", "Close")]);
    }

    #[test]
    fn test_separator_rows_skipped() {
        let table = "| a | b |\n| --- | --- |\n|:---|---:|";
        let rows = extract_shortcuts(table);
        assert_eq!(rows, vec![KeyboardShortcut::new("a", "b")]);
    }

    #[test]
    fn test_marker_token_stripped() {
        let table = "{.shortcuts}\n| Cmd Z | Undo |";
        let rows = extract_shortcuts(table);
        assert_eq!(rows, vec![KeyboardShortcut::new("Cmd Z", "Undo")]);
    }

    #[test]
    fn test_lines_without_pipes_skipped() {
        let table = "Some prose.\n\n| Cmd S | Save |\nmore prose";
        let rows = extract_shortcuts(table);
        assert_eq!(rows, vec![KeyboardShortcut::new("Cmd S", "Save")]);
    }

    #[test]
    fn test_single_cell_rows_skipped() {
        let table = "| lonely |\n| Cmd Q | Quit |";
        let rows = extract_shortcuts(table);
        assert_eq!(rows, vec![KeyboardShortcut::new("Cmd Q", "Quit")]);
    }

    #[test]
    fn test_extra_cells_ignored() {
        let table = "| Cmd P | Print | extra |";
        let rows = extract_shortcuts(table);
        assert_eq!(rows, vec![KeyboardShortcut::new("Cmd P", "Print")]);
    }

    #[test]
    fn test_row_order_preserved() {
        let table = "| 1 | one |\n| 2 | two |\n| 3 | three |";
        let rows = extract_shortcuts(table);
        let shortcuts: Vec<&str> = rows.iter().map(|r| r.shortcut.as_str()).collect();
        assert_eq!(shortcuts, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_shortcuts("").is_empty());
        assert!(extract_shortcuts("no table here").is_empty());
    }
}
