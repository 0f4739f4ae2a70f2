use mend_core::{AuditReport, ConsolidatedReport, PageRecord};

#[test]
fn audit_report_parses_axe_shape_and_keeps_unknown_fields() {
    let raw = r##"{
        "url": "http://localhost:8989/dashboard",
        "testEngine": {"name": "axe-core", "version": "4.8.0"},
        "violations": [
            {
                "id": "color-contrast",
                "impact": "serious",
                "tags": ["wcag2aa"],
                "nodes": [
                    {
                        "html": "<span style=\"color: #999\">Total</span>",
                        "failureSummary": "Fix any of the following: contrast of 2.1:1",
                        "target": ["span"]
                    }
                ]
            }
        ]
    }"##;

    let report: AuditReport = serde_json::from_str(raw).unwrap();
    assert_eq!(report.url, "http://localhost:8989/dashboard");
    assert_eq!(report.violations.len(), 1);

    let violation = &report.violations[0];
    assert!(violation.is_color_contrast());
    assert_eq!(violation.impact.as_deref(), Some("serious"));
    assert!(violation.extra.contains_key("tags"));

    let node = &violation.nodes[0];
    assert!(node.failure_summary.as_deref().unwrap().contains("2.1:1"));
    assert!(node.extra.contains_key("target"));
    assert!(node.fg.is_none());
}

#[test]
fn derived_fields_are_omitted_until_enriched() {
    let raw = r#"{"id": "color-contrast", "nodes": [{"failureSummary": "x"}]}"#;
    let violation: mend_core::Violation = serde_json::from_str(raw).unwrap();
    let out = serde_json::to_string(&violation).unwrap();
    assert!(!out.contains("\"fg\""));
    assert!(!out.contains("\"contrast\""));
}

#[test]
fn consolidated_report_serializes_as_pages_array() {
    let report = ConsolidatedReport {
        pages: vec![PageRecord {
            page: "auth/loginPage.jsx".to_string(),
            url: "http://localhost:8989/auth/loginPage".to_string(),
            violations: vec![],
        }],
    };
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["pages"].is_array());
    assert_eq!(json["pages"][0]["page"], "auth/loginPage.jsx");
}

#[test]
fn empty_report_defaults_to_no_violations() {
    let report: AuditReport = serde_json::from_str("{}").unwrap();
    assert!(report.violations.is_empty());
    assert!(report.url.is_empty());
}
