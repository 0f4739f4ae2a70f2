use std::path::PathBuf;

/// Audit subprocess errors. A subprocess that fails to run is treated as
/// "no report", so the only hard error is a report that cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("audit report at {path} is not valid JSON: {reason}")]
    MalformedReport { path: PathBuf, reason: String },
}
