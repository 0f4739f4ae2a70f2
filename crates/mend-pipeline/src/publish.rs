//! Change publication over git.
//!
//! Branch, add, commit, push for one remediated page and its artifacts.
//! Skipped entirely when git sees no diff on the source file. No retry
//! policy here; only the LLM transport retries.

use std::process::Command;

use chrono::Utc;
use mend_core::errors::{MendResult, PublishError};
use mend_core::PageContext;

/// Publishes one page's fixes as a timestamped branch.
#[derive(Debug, Clone, Default)]
pub struct GitPublisher;

impl GitPublisher {
    pub fn new() -> Self {
        Self
    }

    /// Publish the page's source, backup, and fragment files. Returns
    /// `Ok(false)` when there is nothing to commit.
    pub fn publish(&self, ctx: &PageContext) -> MendResult<bool> {
        tracing::info!("publish: checking for changes to {}", ctx.page);
        let diff = Command::new("git")
            .args(["diff", "--quiet", "--"])
            .arg(&ctx.source_path)
            .status()
            .map_err(|e| PublishError::CommandFailed {
                command: "diff".to_string(),
                reason: e.to_string(),
            })?;
        if diff.success() {
            tracing::info!("publish: no changes to commit");
            return Ok(false);
        }

        let branch = format!("a11y-fix-{}", Utc::now().format("%Y%m%d-%H%M%S"));
        let file_name = ctx
            .source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ctx.page.clone());
        let message = format!("Automated accessibility fixes for {file_name}");

        // Branch from the current HEAD so the uncommitted fixes carry over.
        run_git(Command::new("git").args(["checkout", "-b", &branch]))?;
        run_git(
            Command::new("git")
                .arg("add")
                .arg(&ctx.source_path)
                .arg(&ctx.backup_path)
                .arg(&ctx.fragment_path),
        )?;
        run_git(Command::new("git").args(["commit", "-m", &message]))?;
        run_git(Command::new("git").args(["push", "--set-upstream", "origin", &branch]))?;

        tracing::info!("publish: pushed {branch}");
        Ok(true)
    }
}

fn run_git(command: &mut Command) -> Result<(), PublishError> {
    let rendered = format!("{command:?}");
    let status = command.status().map_err(|e| PublishError::CommandFailed {
        command: rendered.clone(),
        reason: e.to_string(),
    })?;
    if !status.success() {
        return Err(PublishError::NonZeroExit {
            command: rendered,
            status: status.to_string(),
        });
    }
    Ok(())
}
