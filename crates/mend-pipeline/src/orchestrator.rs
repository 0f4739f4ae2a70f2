//! Per-page fix orchestration.
//!
//! One page's remediation cycle: split the violation report by category,
//! request fix fragments per batch, request a full-file merge, run the merge
//! through sanitizer, injectors, and guard, and persist the result. The
//! backup snapshot is written once per page, before the first merged write.

use std::fmt;

use mend_core::contrast::enrich_color_contrast;
use mend_core::errors::{MendError, MendResult};
use mend_core::{AuditReport, PageContext, Violation};
use mend_rewrite::{
    apply_injectors, has_content_loss, insert_fix_summary, restore_table_block, sanitize_markup,
};

use crate::llm::{prompts, LlmClient};

/// Stage of the per-page cycle, carried in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixStage {
    Fragments,
    Merge,
    Persist,
}

impl fmt::Display for FixStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FixStage::Fragments => "fragments",
            FixStage::Merge => "merge",
            FixStage::Persist => "persist",
        };
        f.write_str(name)
    }
}

/// Coordinates one page's remediation cycle against the LLM collaborator.
pub struct FixOrchestrator<'a> {
    llm: &'a dyn LlmClient,
}

impl<'a> FixOrchestrator<'a> {
    pub fn new(llm: &'a dyn LlmClient) -> Self {
        Self { llm }
    }

    /// Run the fix cycle for one page. Returns whether the source file was
    /// modified. A report with no violations short-circuits with zero file
    /// writes and zero LLM calls.
    pub fn process_report(
        &self,
        ctx: &PageContext,
        report: Option<&AuditReport>,
    ) -> MendResult<bool> {
        let Some(report) = report else {
            tracing::info!("orchestrator: no report for {}, skipping fixes", ctx.page);
            return Ok(false);
        };
        if report.violations.is_empty() {
            tracing::info!("orchestrator: no accessibility issues on {}", ctx.page);
            return Ok(false);
        }

        let (mut contrast, other): (Vec<Violation>, Vec<Violation>) = report
            .violations
            .iter()
            .cloned()
            .partition(Violation::is_color_contrast);
        enrich_color_contrast(&mut contrast);

        let mut changed = false;
        for batch in [contrast, other] {
            if batch.is_empty() {
                continue;
            }
            match self.apply_batch(ctx, &batch) {
                Ok(applied) => changed |= applied,
                // An unavailable LLM means this batch contributes no fixes;
                // the page (and the run) keeps going.
                Err(MendError::Llm(e)) => {
                    tracing::warn!(
                        "orchestrator: batch of {} violations on {} skipped: {e}",
                        batch.len(),
                        ctx.page
                    );
                }
                Err(other_error) => return Err(other_error),
            }
        }
        Ok(changed)
    }

    /// Fragments for one violation batch, then the merge when any came back.
    fn apply_batch(&self, ctx: &PageContext, violations: &[Violation]) -> MendResult<bool> {
        tracing::debug!(stage = %FixStage::Fragments, page = %ctx.page, "requesting fix fragments");
        let request = prompts::fragment_prompt(violations);
        let completion = self.llm.complete(&request)?;
        let fragments = sanitize_markup(&completion);
        ctx.write_fragments(&fragments)?;
        if fragments.is_empty() {
            tracing::info!("orchestrator: no usable fragments for {}", ctx.page);
            return Ok(false);
        }
        tracing::info!("orchestrator: fix suggestions saved to {}", ctx.fragment_path.display());
        self.merge_and_persist(ctx)
    }

    /// Full-file merge: LLM patch, sanitize, inject, guard, persist.
    fn merge_and_persist(&self, ctx: &PageContext) -> MendResult<bool> {
        let original = ctx.read_source()?;
        let fragments = ctx.read_fragments()?;

        tracing::debug!(stage = %FixStage::Merge, page = %ctx.page, "requesting full-file merge");
        let request = prompts::merge_prompt(&original, &fragments);
        let completion = self.llm.complete(&request)?;

        let mut updated = sanitize_markup(&completion);
        updated = apply_injectors(&updated);

        // The snapshot must predate any merged write for this page; on the
        // second batch it already exists and stays untouched.
        ctx.write_backup_once(&original)?;

        if has_content_loss(&updated) {
            tracing::warn!(
                "orchestrator: placeholder or missing content detected on {}, restoring table block",
                ctx.page
            );
            let backup = ctx.read_backup()?.unwrap_or_else(|| original.clone());
            updated = restore_table_block(&updated, &backup);
        }

        updated = insert_fix_summary(&updated);

        tracing::debug!(stage = %FixStage::Persist, page = %ctx.page, "writing remediated source");
        ctx.write_source(&updated)?;
        tracing::info!("orchestrator: updated {}", ctx.source_path.display());
        Ok(true)
    }
}
