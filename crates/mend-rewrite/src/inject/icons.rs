//! Icon labeler: fixed descriptive labels for edit/delete icon elements.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static RE_ICON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<((?:Edit|Trash)[A-Za-z]*)([^>]*)/>").unwrap());

/// Label self-closing edit/delete icon elements that carry no `aria-label`.
pub fn label_icons(text: &str) -> String {
    RE_ICON
        .replace_all(text, |caps: &Captures<'_>| {
            let tag = &caps[1];
            let attrs = caps[2].trim();
            if attrs.contains("aria-label=") {
                return caps[0].to_string();
            }
            let label = if tag.to_lowercase().starts_with("edit") {
                "Edit icon"
            } else {
                "Trash icon"
            };
            if attrs.is_empty() {
                format!(r#"<{tag} aria-label="{label}" />"#)
            } else {
                format!(r#"<{tag} {attrs} aria-label="{label}" />"#)
            }
        })
        .into_owned()
}
