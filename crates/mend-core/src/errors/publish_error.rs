/// Version-control publication errors.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("git {command} failed: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("git {command} exited with status {status}")]
    NonZeroExit { command: String, status: String },
}
