//! Focus/tab-order injector: make otherwise non-interactive elements
//! keyboard-focusable with `tabIndex="0"`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Element types that receive a zero tab order.
const FOCUSABLE_TAGS: [&str; 6] = ["span", "Typography", "p", "Table", "TableCell", "TableHead"];

// One paired-element pattern per tag; the regex crate has no backreferences,
// so the closing tag is baked into each pattern instead of referenced.
static RE_PAIRED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FOCUSABLE_TAGS
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<({tag})\b([^>]*)>(.*?)</({tag})>")).unwrap()
        })
        .collect()
});

static RE_SELF_CLOSING_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(TableCell)\b([^>]*)/>").unwrap());

/// Add `tabIndex="0"` to focusable elements that have no tab order yet.
pub fn add_tab_order(text: &str) -> String {
    let mut text = text.to_string();
    for pattern in RE_PAIRED.iter() {
        text = pattern
            .replace_all(&text, |caps: &Captures<'_>| {
                let (open, attrs, inner, close) = (&caps[1], &caps[2], &caps[3], &caps[4]);
                if attrs.to_lowercase().contains("tabindex=") {
                    return caps[0].to_string();
                }
                format!(r#"<{open}{attrs} tabIndex="0">{inner}</{close}>"#)
            })
            .into_owned();
    }
    RE_SELF_CLOSING_CELL
        .replace_all(&text, |caps: &Captures<'_>| {
            let (name, attrs) = (&caps[1], caps[2].trim_end());
            if attrs.to_lowercase().contains("tabindex=") {
                return caps[0].to_string();
            }
            format!(r#"<{name}{attrs} tabIndex="0" />"#)
        })
        .into_owned()
}
