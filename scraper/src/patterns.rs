//! Line patterns of the accessibility snapshot format.
//!
//! Snapshot lines look like `- role "name" [ref=eNN]:`, indented two spaces
//! per nesting level. Labels containing a colon come out YAML-quoted
//! (`- 'row "12 Crash: on save"':`), so both prefixes are recognized.

use regex::Regex;
use std::sync::LazyLock;

static PATTERNS: LazyLock<SnapshotPatterns> = LazyLock::new(SnapshotPatterns::new);

struct SnapshotPatterns {
    row_start: Regex,
    cell_content: Regex,
    link_or_text: Regex,
    date: Regex,
    exact_date: Regex,
}

impl SnapshotPatterns {
    fn new() -> Self {
        Self {
            // - row "label", - 'row "label"', - row 'label', curly quotes too
            row_start: Regex::new(
                r#"^\s*- '?row'? (?:"([^"]+)"|'([^']+)'|“([^”]+)”|‘([^’]+)’)"#,
            )
            .expect("static regex must compile"),
            cell_content: Regex::new(r#"cell\s+"([^"]*)""#).expect("static regex must compile"),
            link_or_text: Regex::new(r#"^\s*- (?:link|text) "([^"]+)""#)
                .expect("static regex must compile"),
            date: Regex::new(r"[0-9]{2}\.[0-9]{2}\.[0-9]{4}").expect("static regex must compile"),
            exact_date: Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$")
                .expect("static regex must compile"),
        }
    }
}

/// Label of a row-start line, if `line` opens a row.
pub(crate) fn row_label(line: &str) -> Option<&str> {
    let caps = PATTERNS.row_start.captures(line)?;
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .map(|m| m.as_str())
}

/// Returns `true` for lines carrying a cell marker.
pub(crate) fn is_cell_marker(line: &str) -> bool {
    line.contains("- cell") || line.contains("- 'cell")
}

/// Returns `true` for lines carrying a row marker, anywhere on the line.
///
/// Looser than [`row_label`]: used only to bound look-ahead.
pub(crate) fn is_row_marker(line: &str) -> bool {
    line.contains("- row") || line.contains("- 'row")
}

/// Inline content of a cell line (`cell "..."`), possibly empty.
pub(crate) fn inline_cell_content(line: &str) -> Option<&str> {
    PATTERNS
        .cell_content
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Text of a `- link "..."` or `- text "..."` line.
pub(crate) fn link_or_text_label(line: &str) -> Option<&str> {
    PATTERNS
        .link_or_text
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Last `DD.MM.YYYY` substring of `text`.
pub(crate) fn last_date_in(text: &str) -> Option<&str> {
    PATTERNS.date.find_iter(text).last().map(|m| m.as_str())
}

/// Returns `true` when the whole value is a `DD.MM.YYYY` date.
pub(crate) fn is_date(value: &str) -> bool {
    PATTERNS.exact_date.is_match(value)
}

/// Number of leading whitespace characters.
pub(crate) fn indent_depth(line: &str) -> usize {
    line.chars().take_while(|ch| ch.is_whitespace()).count()
}
