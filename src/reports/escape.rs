//! Escaping for Markdown reports.
//!
//! Profile fields (bios, headlines, locations, advice text from config)
//! are user-controlled and may contain Markdown syntax that would break
//! tables or inject links. Everything user-controlled is escaped before it
//! is embedded in a report.

/// Escape a string for a Markdown table cell.
///
/// ```
/// use footprint_score::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for inline Markdown (headings, list items).
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' | '_' | '`' | '[' | ']' | '#' | '!' | '~' | '|' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}
