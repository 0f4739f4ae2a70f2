//! # mend-rewrite
//!
//! The text-transformation core of the mend pipeline: pattern-based rewrites
//! that make LLM-produced markup safe to merge back into a source file.
//!
//! - Sanitizer: strips conversational wrapping and unsafe constructs
//! - Injectors: idempotent accessibility-attribute passes
//! - Guard: detects elided content and restores it from the backup snapshot
//! - Summary: one-shot fix-summary comment insertion
//!
//! This is deliberately not a JSX parser. Every pass is scoped to the narrow
//! element grammar it handles and must be a no-op on already-clean text.

pub mod guard;
pub mod inject;
pub mod sanitize;
pub mod summary;

pub use guard::{has_content_loss, restore_table_block};
pub use inject::apply_injectors;
pub use sanitize::sanitize_markup;
pub use summary::insert_fix_summary;
