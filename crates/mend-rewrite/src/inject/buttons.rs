//! Button labeler: copy a button's inner text into an `aria-label`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static RE_BUTTON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<Button([^>]*)>(.*?)</Button>").unwrap());

/// Add `aria-label` to every button-like element with non-empty inner
/// content and no existing label. Elements that already carry a label are
/// left textually unchanged.
pub fn label_buttons(text: &str) -> String {
    RE_BUTTON
        .replace_all(text, |caps: &Captures<'_>| {
            let attrs = &caps[1];
            let inner = caps[2].trim();
            if attrs.contains("aria-label=") || inner.is_empty() {
                return caps[0].to_string();
            }
            // A stray trailing slash from a self-closing merge artifact
            // would break the open/close pair; drop it before labeling.
            let attrs = attrs.trim_end().trim_end_matches('/').trim_end();
            format!(r#"<Button{attrs} aria-label="{inner}">{inner}</Button>"#)
        })
        .into_owned()
}
