//! Audit report model — serde structs mirroring the axe report JSON, with
//! unknown tool fields preserved through flattened maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Violation category id for contrast failures.
pub const COLOR_CONTRAST_ID: &str = "color-contrast";

/// A single affected markup node within a violation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViolationNode {
    /// Markup snippet of the offending element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Free-text failure summary from the audit tool.
    #[serde(
        rename = "failureSummary",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub failure_summary: Option<String>,
    /// Derived foreground color, populated by contrast enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    /// Derived background color, populated by contrast enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    /// Derived contrast ratio (the N in "N:1"), non-negative when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    /// Any other audit-tool fields, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One accessibility rule failure with its affected nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Violation {
    /// Rule category, e.g. "color-contrast" or "button-name".
    pub id: String,
    #[serde(default)]
    pub nodes: Vec<ViolationNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Violation {
    /// Whether this violation is in the contrast-failure category.
    pub fn is_color_contrast(&self) -> bool {
        self.id == COLOR_CONTRAST_ID
    }
}

/// The per-page report written by the audit subprocess.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditReport {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub violations: Vec<Violation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page's entry in the consolidated end-of-run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page identifier: source path relative to the pages root.
    pub page: String,
    /// Resolved audit URL.
    pub url: String,
    pub violations: Vec<Violation>,
}

/// Aggregate of all processed pages, written once at end of run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsolidatedReport {
    pub pages: Vec<PageRecord>,
}
