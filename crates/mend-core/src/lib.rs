//! # mend-core
//!
//! Foundation crate for the mend accessibility remediation pipeline.
//! Defines the audit report model, errors, configuration, per-page working
//! context, and contrast-violation enrichment. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod context;
pub mod contrast;
pub mod errors;
pub mod report;

// Re-export the most commonly used types at the crate root.
pub use config::{LlmConfig, MendConfig};
pub use context::PageContext;
pub use errors::{MendError, MendResult};
pub use report::{AuditReport, ConsolidatedReport, PageRecord, Violation, ViolationNode};
