//! Contrast-violation enrichment.
//!
//! The audit tool reports foreground/background colors and the measured
//! ratio only inside the free-text failure summary. This pass extracts them
//! into structured node fields. Pure text extraction, no I/O.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::Violation;

static RE_FOREGROUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Foreground:\s*(#[0-9a-fA-F]{3,6})").unwrap());

static RE_BACKGROUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Background:\s*(#[0-9a-fA-F]{3,6})").unwrap());

static RE_CONTRAST_RATIO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)contrast of\s*([\d.]+):1").unwrap());

/// Populate `fg`/`bg`/`contrast` on every contrast-failure node where the
/// summary carries them. Fields without a match are left unset.
pub fn enrich_color_contrast(violations: &mut [Violation]) {
    for violation in violations.iter_mut() {
        if !violation.is_color_contrast() {
            continue;
        }
        for node in &mut violation.nodes {
            let Some(summary) = node.failure_summary.as_deref() else {
                continue;
            };
            if let Some(captures) = RE_FOREGROUND.captures(summary) {
                node.fg = Some(captures[1].to_string());
            }
            if let Some(captures) = RE_BACKGROUND.captures(summary) {
                node.bg = Some(captures[1].to_string());
            }
            if let Some(captures) = RE_CONTRAST_RATIO.captures(summary) {
                if let Ok(ratio) = captures[1].parse::<f64>() {
                    node.contrast = Some(ratio);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ViolationNode;

    fn contrast_violation(summary: &str) -> Violation {
        Violation {
            id: "color-contrast".to_string(),
            nodes: vec![ViolationNode {
                failure_summary: Some(summary.to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn extracts_all_three_fields() {
        let mut violations = vec![contrast_violation(
            "Element has insufficient color contrast of 2.1:1 \
             (foreground color: Foreground: #111111, background color: Background: #eeeeee)",
        )];
        enrich_color_contrast(&mut violations);
        let node = &violations[0].nodes[0];
        assert_eq!(node.contrast, Some(2.1));
        assert_eq!(node.fg.as_deref(), Some("#111111"));
        assert_eq!(node.bg.as_deref(), Some("#eeeeee"));
    }

    #[test]
    fn missing_patterns_leave_fields_unset() {
        let mut violations = vec![contrast_violation("no color info here")];
        enrich_color_contrast(&mut violations);
        let node = &violations[0].nodes[0];
        assert!(node.fg.is_none());
        assert!(node.bg.is_none());
        assert!(node.contrast.is_none());
    }

    #[test]
    fn non_contrast_violations_are_untouched() {
        let mut violations = vec![Violation {
            id: "button-name".to_string(),
            nodes: vec![ViolationNode {
                failure_summary: Some("contrast of 1.5:1 Foreground: #000000".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }];
        enrich_color_contrast(&mut violations);
        assert!(violations[0].nodes[0].fg.is_none());
        assert!(violations[0].nodes[0].contrast.is_none());
    }

    #[test]
    fn three_digit_hex_is_accepted() {
        let mut violations = vec![contrast_violation("Foreground: #abc and Background: #fff")];
        enrich_color_contrast(&mut violations);
        let node = &violations[0].nodes[0];
        assert_eq!(node.fg.as_deref(), Some("#abc"));
        assert_eq!(node.bg.as_deref(), Some("#fff"));
    }
}
