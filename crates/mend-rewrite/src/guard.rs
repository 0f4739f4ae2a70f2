//! Placeholder guard.
//!
//! LLM full-file merges sometimes elide large repetitive regions (table
//! rows) behind a comment or an emptied element. This guard detects the
//! known signals of that and restores the table block from the pristine
//! backup snapshot. Best effort: the signal set is a small fixed list, not
//! a completeness guarantee.

use std::sync::LazyLock;

use regex::Regex;

static RE_TABLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<Table\b[^>]*>.*?</Table>").unwrap());

static RE_EMPTY_TABLE_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<TableBody>\s*</TableBody>").unwrap());

/// Whether the merged text shows signs of dropped content.
pub fn has_content_loss(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lowered.contains("placeholder")
        || lowered.contains("// table")
        || RE_EMPTY_TABLE_BODY.is_match(text)
}

/// Replace the merged text's table block with the first table block found in
/// the backup snapshot. When the backup has no table block, the merged text
/// is returned unchanged and a diagnostic is emitted.
pub fn restore_table_block(merged: &str, backup: &str) -> String {
    let Some(original_table) = RE_TABLE_BLOCK.find(backup) else {
        tracing::warn!("guard: no <Table> block found in backup, leaving merged text as-is");
        return merged.to_string();
    };
    tracing::info!("guard: restoring <Table> block from backup");
    RE_TABLE_BLOCK
        .replacen(merged, 1, regex::NoExpand(original_table.as_str()))
        .into_owned()
}
