//! Error types for the mend pipeline.
//!
//! Each collaborator gets its own error enum; `MendError` is the top-level
//! type every fallible operation returns through `MendResult`.

mod audit_error;
mod llm_error;
mod publish_error;

pub use audit_error::AuditError;
pub use llm_error::LlmError;
pub use publish_error::PublishError;

use std::path::{Path, PathBuf};

/// Result alias used throughout the workspace.
pub type MendResult<T> = Result<T, MendError>;

/// Top-level error for the remediation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum MendError {
    #[error("audit: {0}")]
    Audit(#[from] AuditError),

    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    #[error("publish: {0}")]
    Publish(#[from] PublishError),

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("required file missing: {path}")]
    MissingFile { path: PathBuf },
}

impl MendError {
    /// Wrap an io error with the path it occurred at.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
