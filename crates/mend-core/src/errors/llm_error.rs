/// LLM transport errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("transport error: {reason}")]
    Transport { reason: String },

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("malformed completion response: {reason}")]
    MalformedResponse { reason: String },

    #[error("retries exhausted after {attempts} attempts: {reason}")]
    RetriesExhausted { attempts: u32, reason: String },
}
