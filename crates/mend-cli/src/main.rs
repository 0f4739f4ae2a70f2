//! The `mend` binary: scan the pages root, audit each page, ask the LLM for
//! fixes, persist and publish them, and write a consolidated report.

use anyhow::Context;
use mend_core::MendConfig;
use mend_pipeline::{HttpLlmClient, RunDriver};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = MendConfig::from_env();
    tracing::info!(
        "mend: scanning {} against {}",
        config.pages_root.display(),
        config.base_url
    );

    let llm = HttpLlmClient::new(config.llm.clone()).context("building LLM client")?;
    let driver = RunDriver::new(config);
    let summary = driver.run(&llm).context("remediation run failed")?;

    tracing::info!(
        "mend: done, {} pages processed, {} fixed, {} failed",
        summary.pages,
        summary.fixed,
        summary.failed
    );
    Ok(())
}
