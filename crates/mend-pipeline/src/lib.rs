//! # mend-pipeline
//!
//! Collaborators and orchestration for the mend remediation run:
//!
//! - Audit runner: drives the headless-browser audit subprocess
//! - LLM transport: blocking HTTP client with bounded retries, plus prompts
//! - Routes: source file to audit URL resolution
//! - Publisher: git branch/commit/push for review
//! - Orchestrator: one page's remediation cycle
//! - Driver: sequential run over all pages, consolidated reporting
//!
//! Everything here is synchronous and strictly sequential; the only shared
//! mutable state is the consolidated-report accumulator owned by the driver.

pub mod audit;
pub mod driver;
pub mod llm;
pub mod orchestrator;
pub mod publish;
pub mod routes;

pub use audit::AuditRunner;
pub use driver::{PageOutcome, PageResult, RunDriver, RunSummary};
pub use llm::{CompletionRequest, HttpLlmClient, LlmClient};
pub use orchestrator::FixOrchestrator;
pub use publish::GitPublisher;
pub use routes::RouteMap;
