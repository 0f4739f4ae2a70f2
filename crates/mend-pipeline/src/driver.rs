//! Run driver: sequential page processing and consolidated reporting.
//!
//! Pages are processed one at a time in discovery order. A page's failure is
//! recorded and logged, never escalated; the run always continues to the
//! next page and always writes the consolidated report at the end.

use std::fs;
use std::path::{Path, PathBuf};

use mend_core::errors::{MendError, MendResult};
use mend_core::{ConsolidatedReport, MendConfig, PageContext, PageRecord};
use walkdir::WalkDir;

use crate::audit::AuditRunner;
use crate::llm::LlmClient;
use crate::orchestrator::FixOrchestrator;
use crate::publish::GitPublisher;
use crate::routes::RouteMap;

/// What happened to one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Audited, nothing to fix (or no report produced).
    Clean,
    /// Fixes were merged and persisted.
    Fixed,
    /// Processing failed; the error is recorded, the run continued.
    Failed { error: String },
}

/// Per-page result collected by the driver.
#[derive(Debug, Clone)]
pub struct PageResult {
    pub page: String,
    pub outcome: PageOutcome,
}

/// End-of-run totals.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub pages: usize,
    pub fixed: usize,
    pub failed: usize,
    pub results: Vec<PageResult>,
}

/// Drives a full remediation run over every page under the pages root.
pub struct RunDriver {
    config: MendConfig,
}

impl RunDriver {
    pub fn new(config: MendConfig) -> Self {
        Self { config }
    }

    /// Process every page source, then write the consolidated report.
    pub fn run(&self, llm: &dyn LlmClient) -> MendResult<RunSummary> {
        let routes = RouteMap::load(&self.config.route_map_path);
        let audit = AuditRunner::new(self.config.check_script_path.clone());
        audit.write_check_script()?;

        let files = discover_pages(&self.config.pages_root);
        if files.is_empty() {
            tracing::warn!(
                "driver: no JSX/TSX files found under {}",
                self.config.pages_root.display()
            );
        }

        let orchestrator = FixOrchestrator::new(llm);
        let publisher = GitPublisher::new();
        let mut consolidated = ConsolidatedReport::default();
        let mut summary = RunSummary::default();

        for file in &files {
            tracing::info!("driver: === processing {} ===", file.display());
            let ctx = PageContext::new(&self.config.pages_root, &self.config.backup_root, file);
            let outcome = match self.process_page(&audit, &routes, &orchestrator, &publisher, &ctx, &mut consolidated)
            {
                Ok(true) => PageOutcome::Fixed,
                Ok(false) => PageOutcome::Clean,
                Err(e) => {
                    tracing::error!("driver: failed while processing {}: {e}", ctx.page);
                    PageOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            match outcome {
                PageOutcome::Fixed => summary.fixed += 1,
                PageOutcome::Failed { .. } => summary.failed += 1,
                PageOutcome::Clean => {}
            }
            summary.results.push(PageResult {
                page: ctx.page,
                outcome,
            });
        }
        summary.pages = files.len();

        self.write_consolidated(&consolidated)?;
        Ok(summary)
    }

    /// One page: resolve URL, audit, record, orchestrate, publish.
    fn process_page(
        &self,
        audit: &AuditRunner,
        routes: &RouteMap,
        orchestrator: &FixOrchestrator<'_>,
        publisher: &GitPublisher,
        ctx: &PageContext,
        consolidated: &mut ConsolidatedReport,
    ) -> MendResult<bool> {
        ctx.ensure_dirs()?;
        let url = routes.resolve(&self.config.pages_root, &ctx.source_path, &self.config.base_url);
        let report = audit.run(&url, &ctx.report_path)?;

        if let Some(ref report) = report {
            consolidated.pages.push(PageRecord {
                page: ctx.page.clone(),
                url: if report.url.is_empty() {
                    url.clone()
                } else {
                    report.url.clone()
                },
                violations: report.violations.clone(),
            });
        }

        let changed = orchestrator.process_report(ctx, report.as_ref())?;
        if changed {
            // The fix is already on disk; a failed push loses nothing.
            if let Err(e) = publisher.publish(ctx) {
                tracing::warn!("publish: could not publish {}: {e}", ctx.page);
            }
        }
        Ok(changed)
    }

    fn write_consolidated(&self, consolidated: &ConsolidatedReport) -> MendResult<()> {
        let path = &self.config.report_path;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| MendError::io(parent, e))?;
            }
        }
        let json = serde_json::to_string_pretty(consolidated)
            .map_err(|e| MendError::io(path, std::io::Error::other(e)))?;
        fs::write(path, json).map_err(|e| MendError::io(path, e))?;
        tracing::info!("driver: consolidated report saved to {}", path.display());
        Ok(())
    }
}

/// All `.jsx`/`.tsx` files under the pages root, sorted for deterministic
/// processing order.
pub fn discover_pages(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("jsx") | Some("tsx")
            )
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn discovery_finds_jsx_and_tsx_sorted() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("menu")).unwrap();
        fs::write(root.join("menu/Menu.jsx"), "").unwrap();
        fs::write(root.join("About.tsx"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::write(root.join("styles.css"), "").unwrap();

        let files = discover_pages(root);
        assert_eq!(
            files,
            vec![root.join("About.tsx"), root.join("menu/Menu.jsx")]
        );
    }

    #[test]
    fn discovery_of_missing_root_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let files = discover_pages(&dir.path().join("does-not-exist"));
        assert!(files.is_empty());
    }
}
