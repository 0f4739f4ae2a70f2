//! LLM collaborator: a synchronous text-completion call behind a trait seam.

pub mod prompts;

use std::time::Duration;

use mend_core::errors::{LlmError, MendResult};
use mend_core::LlmConfig;
use serde::{Deserialize, Serialize};

/// One completion request with its sampling parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// The seam the orchestrator talks through; tests substitute a mock.
pub trait LlmClient {
    /// Send a prompt, return the completion text.
    fn complete(&self, request: &CompletionRequest) -> MendResult<String>;
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    stop_sequences: [&'a str; 1],
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Blocking HTTP client for a conversational completion endpoint, with
/// connect/read timeouts and bounded retry with backoff for transient
/// failures. The audit and git collaborators deliberately have no retry
/// policy; only this transport does.
pub struct HttpLlmClient {
    http: reqwest::blocking::Client,
    config: LlmConfig,
}

impl HttpLlmClient {
    pub fn new(config: LlmConfig) -> MendResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.read_timeout_secs))
            .build()
            .map_err(|e| LlmError::Transport {
                reason: e.to_string(),
            })?;
        Ok(Self { http, config })
    }

    fn send_once(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            stop_sequences: [self.config.stop_sequence.as_str()],
            messages: [Message {
                role: "user",
                content: &request.prompt,
            }],
        };

        let mut builder = self
            .http
            .post(&self.config.endpoint)
            .header("x-request-id", &request_id)
            .json(&body);
        if let Some(ref key) = self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        tracing::debug!(%request_id, "llm: sending completion request");
        let response = builder.send().map_err(|e| LlmError::Transport {
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
            });
        }

        let parsed: MessagesResponse = response.json().map_err(|e| LlmError::MalformedResponse {
            reason: e.to_string(),
        })?;
        let text = parsed
            .content
            .first()
            .map(|block| block.text.trim().to_string())
            .unwrap_or_default();
        Ok(text)
    }
}

impl LlmClient for HttpLlmClient {
    fn complete(&self, request: &CompletionRequest) -> MendResult<String> {
        let attempts = self.config.max_attempts.max(1);
        let mut last_error = None;
        for attempt in 1..=attempts {
            match self.send_once(request) {
                Ok(text) => return Ok(text),
                Err(e) if is_transient(&e) && attempt < attempts => {
                    let backoff = Duration::from_millis(500 * 2u64.pow(attempt - 1));
                    tracing::warn!(
                        attempt,
                        "llm: transient failure, retrying in {backoff:?}: {e}"
                    );
                    std::thread::sleep(backoff);
                    last_error = Some(e);
                }
                Err(e) if is_transient(&e) => {
                    return Err(LlmError::RetriesExhausted {
                        attempts,
                        reason: e.to_string(),
                    }
                    .into());
                }
                Err(e) => return Err(e.into()),
            }
        }
        // Unreachable with attempts >= 1; keep the compiler honest.
        Err(LlmError::RetriesExhausted {
            attempts,
            reason: last_error.map(|e| e.to_string()).unwrap_or_default(),
        }
        .into())
    }
}

/// Transport failures and throttling/server statuses are worth retrying;
/// client errors and malformed bodies are not.
fn is_transient(error: &LlmError) -> bool {
    match error {
        LlmError::Transport { .. } => true,
        LlmError::Status { status } => *status == 429 || *status >= 500,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(is_transient(&LlmError::Transport {
            reason: "timeout".into()
        }));
        assert!(is_transient(&LlmError::Status { status: 429 }));
        assert!(is_transient(&LlmError::Status { status: 503 }));
        assert!(!is_transient(&LlmError::Status { status: 401 }));
        assert!(!is_transient(&LlmError::MalformedResponse {
            reason: "no content".into()
        }));
    }
}
