//! Markup sanitizer for raw LLM completions.
//!
//! Applies a fixed sequence of cleanup passes so the output is valid for
//! direct substitution into the source file. Re-applying the sanitizer to
//! its own output is a no-op.

use std::sync::LazyLock;

use regex::Regex;

// ── Code fences and narrator chatter ───────────────────────────────────────

static RE_LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[a-zA-Z0-9_-]*\s*").unwrap());

static RE_TRAILING_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*```$").unwrap());

static RE_NARRATOR_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(here'?s\b|here is\b|updated jsx\b|updated code\b|the key changes\b|summary of changes\b|assistant:)",
    )
    .unwrap()
});

static RE_BULLET_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-*]\s").unwrap());

// ── Full-document wrappers ─────────────────────────────────────────────────

static RE_DOCTYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<!DOCTYPE[^>]*>").unwrap());

static RE_DOC_WRAPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)</?(html|head|body)[^>]*>").unwrap());

// ── Placeholder comments for elided content ────────────────────────────────

static RE_PLACEHOLDER_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\{\s*/\*\s*(other content|unchanged|placeholder|omitted|rows omitted|table content)\s*\*/\s*\}",
    )
    .unwrap()
});

// ── Attribute fixups ───────────────────────────────────────────────────────

static RE_REDUNDANT_ALT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)alt\s*=\s*"([^"]*?)\b(?:image|photo|picture)\b([^"]*?)""#).unwrap()
});

static RE_EMPTY_STYLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"style\s*=\s*"\s*""#).unwrap());

// An aria-label value up to the next whitespace, `>` or `/`. The replacer
// keeps quoted values and drops unquoted ones, whose end cannot be found
// reliably.
static RE_ARIA_LABEL_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\saria-label=[^\s>/]*").unwrap());

// ── Bad-merge artifacts ────────────────────────────────────────────────────

static RE_STRAY_QUOTE_GT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#">\s*">"#).unwrap());

static RE_COMPONENT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(Button|Typography)\b[^>]*>").unwrap());

/// Clean a raw LLM completion down to embeddable markup.
pub fn sanitize_markup(raw: &str) -> String {
    let mut text = raw.trim().to_string();

    // Narrator prefaces and bullet commentary. Dropped first so a preface
    // ahead of the code fence does not shield the fence from removal.
    text = text
        .lines()
        .filter(|line| !RE_NARRATOR_PREFIX.is_match(line) && !RE_BULLET_LINE.is_match(line))
        .collect::<Vec<_>>()
        .join("\n");
    text = text.trim().to_string();

    // Single leading/trailing fenced block delimiter.
    text = RE_LEADING_FENCE.replace(&text, "").into_owned();
    text = RE_TRAILING_FENCE.replace(&text, "").into_owned();

    // Full-document wrappers never belong in a fragment.
    text = RE_DOCTYPE.replace_all(&text, "").into_owned();
    text = RE_DOC_WRAPPER.replace_all(&text, "").into_owned();

    // Placeholder comments signal elided content; strip them so the guard
    // can catch the emptied region downstream.
    text = RE_PLACEHOLDER_COMMENT.replace_all(&text, "").into_owned();

    // Redundant words in alt text. Applied to fixpoint so stacked words
    // ("photo image") cannot survive a single run.
    text = fixpoint(text, |t| {
        RE_REDUNDANT_ALT_WORD
            .replace_all(t, r#"alt="${1}${2}""#)
            .into_owned()
    });

    text = RE_EMPTY_STYLE.replace_all(&text, "").into_owned();

    // Unquoted aria-label values are unsafe to keep.
    text = RE_ARIA_LABEL_VALUE
        .replace_all(&text, |caps: &regex::Captures<'_>| {
            let whole = &caps[0];
            let value = &whole[whole.find('=').map(|i| i + 1).unwrap_or(whole.len())..];
            if value.starts_with('"') || value.starts_with('\'') {
                whole.to_string()
            } else {
                String::new()
            }
        })
        .into_owned();

    // Stray `>` fragments produced by bad merges.
    text = fixpoint(text, |t| RE_STRAY_QUOTE_GT.replace_all(t, "\">").into_owned());

    // Accidental duplication of a Button/Typography tag sequence.
    text = collapse_duplicate_tags(&text);

    text.trim().to_string()
}

/// Re-apply a pass until its output stops changing.
fn fixpoint(mut text: String, pass: impl Fn(&str) -> String) -> String {
    loop {
        let next = pass(&text);
        if next == text {
            return text;
        }
        text = next;
    }
}

/// Collapse immediate repetitions of the same Button/Typography tag down to
/// one occurrence. The regex crate has no backreferences, so duplicates are
/// detected by comparing the literal tag text.
fn collapse_duplicate_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(found) = RE_COMPONENT_TAG.find(rest) {
        let tag = found.as_str().to_string();
        out.push_str(&rest[..found.end()]);
        rest = &rest[found.end()..];
        loop {
            let trimmed = rest.trim_start();
            if let Some(after) = trimmed.strip_prefix(tag.as_str()) {
                rest = after;
            } else {
                break;
            }
        }
    }
    out.push_str(rest);
    out
}
