//! Headless-browser audit collaborator.
//!
//! The audit tool is an opaque Node subprocess (axe via Playwright). The
//! runner owns the script source, materializes it on disk, invokes it with a
//! target URL and an output path, and reads the resulting JSON report.
//! A failed or missing audit is "nothing to fix", never a hard failure.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use mend_core::errors::{AuditError, MendError, MendResult};
use mend_core::AuditReport;

/// Node script driving axe through Playwright (CLI: --url, --out).
const CHECK_SCRIPT: &str = r#"const { chromium } = require('playwright');
const AxeBuilder = require('@axe-core/playwright').default;
const fs = require('fs');

function parseArg(flag, fallback) {
  const i = process.argv.indexOf(flag);
  if (i !== -1 && i + 1 < process.argv.length) return process.argv[i + 1];
  return fallback;
}

(async () => {
  const url = parseArg('--url', 'http://localhost:8989/');
  const outPath = parseArg('--out', 'accessibility-report.json');

  const browser = await chromium.launch();
  const context = await browser.newContext();
  const page = await context.newPage();

  await page.goto(url, { waitUntil: 'domcontentloaded' });
  await page.waitForLoadState('domcontentloaded');

  const results = await new AxeBuilder({ page }).analyze();

  fs.mkdirSync(require('path').dirname(outPath), { recursive: true });
  fs.writeFileSync(outPath, JSON.stringify({ url, ...results }, null, 2));
  console.log(`Accessibility report saved: ${outPath}`);

  await browser.close();
})();
"#;

/// Runs the audit subprocess and parses its report.
#[derive(Debug, Clone)]
pub struct AuditRunner {
    script_path: PathBuf,
}

impl AuditRunner {
    pub fn new(script_path: PathBuf) -> Self {
        Self { script_path }
    }

    /// Materialize the check script. Safe to repeat.
    pub fn write_check_script(&self) -> MendResult<()> {
        fs::write(&self.script_path, CHECK_SCRIPT)
            .map_err(|e| MendError::io(&self.script_path, e))
    }

    /// Audit one URL, writing the per-page report to `out_path`.
    ///
    /// Returns `Ok(None)` when the subprocess cannot be spawned, exits
    /// non-zero, or leaves no report behind. A report that exists but is not
    /// valid JSON is an error, surfaced to the per-page boundary.
    pub fn run(&self, url: &str, out_path: &Path) -> MendResult<Option<AuditReport>> {
        tracing::info!("audit: running axe + playwright for {url}");
        let status = Command::new("node")
            .arg(&self.script_path)
            .args(["--url", url])
            .arg("--out")
            .arg(out_path)
            .status();

        match status {
            Ok(status) if status.success() => {}
            Ok(status) => {
                tracing::warn!("audit: check script exited with {status}, skipping page");
                return Ok(None);
            }
            Err(e) => {
                tracing::warn!("audit: failed to spawn node: {e}, skipping page");
                return Ok(None);
            }
        }

        if !out_path.exists() {
            tracing::warn!("audit: no report found at {}", out_path.display());
            return Ok(None);
        }

        let raw = fs::read_to_string(out_path).map_err(|e| MendError::io(out_path, e))?;
        let report = serde_json::from_str(&raw).map_err(|e| {
            MendError::Audit(AuditError::MalformedReport {
                path: out_path.to_path_buf(),
                reason: e.to_string(),
            })
        })?;
        Ok(Some(report))
    }
}
