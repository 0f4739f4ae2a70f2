//! Typography labeler: derive a readable `aria-label` from heading/text
//! element content.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Derived labels are capped at this many characters.
const MAX_LABEL_LEN: usize = 100;

static RE_TYPOGRAPHY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<Typography([^>]*)>(.*?)</Typography>").unwrap());

static RE_NESTED_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static RE_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]*\}").unwrap());

static RE_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static RE_MESSAGE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"id:\s*['"]([^'"]+)['"]"#).unwrap());

/// Add a derived `aria-label` to typography elements with readable content.
pub fn label_typography(text: &str) -> String {
    RE_TYPOGRAPHY
        .replace_all(text, |caps: &Captures<'_>| {
            let attrs = &caps[1];
            let inner_raw = &caps[2];
            let inner = inner_raw.trim();
            if attrs.contains("aria-label=") || inner.is_empty() {
                return caps[0].to_string();
            }
            let label = derive_label(inner);
            // Fewer than 3 meaningful characters is not a useful label.
            if label.chars().count() < 3 {
                return caps[0].to_string();
            }
            format!(r#"<Typography{attrs} aria-label="{label}">{inner_raw}</Typography>"#)
        })
        .into_owned()
}

/// Derive a human-readable label from typography inner content: strip nested
/// markup and embedded expressions, collapse whitespace, escape quotes. A
/// message-lookup expression yields a title-cased label from its identifier
/// instead of the raw text.
fn derive_label(inner: &str) -> String {
    let mut label = RE_NESTED_TAG.replace_all(inner, "").into_owned();
    label = RE_EXPRESSION.replace_all(&label, "").into_owned();
    label = RE_WHITESPACE_RUN.replace_all(&label, " ").trim().to_string();
    label = label.replace('"', "&quot;");

    if inner.contains("{intl.formatMessage") {
        if let Some(captures) = RE_MESSAGE_ID.captures(inner) {
            let id = captures[1].replace(['-', '_'], " ");
            label = title_case(&id);
        }
    }

    if label.chars().count() > MAX_LABEL_LEN {
        label = label.chars().take(MAX_LABEL_LEN - 3).collect::<String>() + "...";
    }
    label
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
