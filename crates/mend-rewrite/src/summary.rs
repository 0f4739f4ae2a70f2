//! Fix-summary comment insertion.

use std::sync::LazyLock;

use regex::Regex;

/// Marker line that keeps the summary from being inserted twice.
const SUMMARY_MARKER: &str = "Accessibility Fix Summary";

const SUMMARY_COMMENT: &str = "{/*\n  Accessibility Fix Summary:\n  - Applied `aria-label` for images, links, and search input.\n  - Added `role` for the wrapper div.\n  - Used `scope=\"row\"` for table row headers.\n*/}\n";

// The leading run of import statements. `.` stays within a line; the `\s*`
// between statements crosses newlines.
static RE_IMPORT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:import\s[^\n]+?;\s*)+").unwrap());

/// Insert the fixed summary comment once: after the leading import block, or
/// at the very top when no import block is found.
pub fn insert_fix_summary(text: &str) -> String {
    if text.contains(SUMMARY_MARKER) {
        return text.to_string();
    }
    match RE_IMPORT_BLOCK.find(text) {
        Some(imports) => {
            let at = imports.end();
            format!("{}\n{}{}", &text[..at], SUMMARY_COMMENT, &text[at..])
        }
        None => format!("{SUMMARY_COMMENT}{text}"),
    }
}
