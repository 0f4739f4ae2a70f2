//! Run configuration, resolved from the environment with sane defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// LLM transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Messages endpoint of the completion service.
    pub endpoint: String,
    /// Model identifier passed through in the request body.
    pub model: String,
    /// Bearer token; omitted from the request when `None`.
    pub api_key: Option<String>,
    /// Stop sequence terminating a completion.
    pub stop_sequence: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    /// Bounded retry count for transient transport failures.
    pub max_attempts: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-3-5-sonnet-20240620".to_string(),
            api_key: None,
            stop_sequence: "\n\nHuman:".to_string(),
            connect_timeout_secs: 60,
            read_timeout_secs: 600,
            max_attempts: 3,
        }
    }
}

/// Top-level configuration for a remediation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MendConfig {
    /// Base URL the audited pages are served from.
    pub base_url: String,
    /// Root directory scanned for page source files.
    pub pages_root: PathBuf,
    /// Root directory for per-page artifacts (backups, fragments, reports).
    pub backup_root: PathBuf,
    /// Optional JSON route map: relative source path -> route or absolute URL.
    pub route_map_path: PathBuf,
    /// Where the audit check script is materialized.
    pub check_script_path: PathBuf,
    /// Consolidated end-of-run report path.
    pub report_path: PathBuf,
    pub llm: LlmConfig,
}

impl Default for MendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8989".to_string(),
            pages_root: PathBuf::from("src/page"),
            backup_root: PathBuf::from("a11y_backups"),
            route_map_path: PathBuf::from("route-map.json"),
            check_script_path: PathBuf::from("accessibility-check.js"),
            report_path: PathBuf::from("accessibility-report.json"),
            llm: LlmConfig::default(),
        }
    }
}

impl MendConfig {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(v) = std::env::var("MEND_BASE_URL") {
            config.base_url = v;
        }
        if let Ok(v) = std::env::var("MEND_PAGES_ROOT") {
            config.pages_root = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("MEND_BACKUP_ROOT") {
            config.backup_root = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("MEND_LLM_ENDPOINT") {
            config.llm.endpoint = v;
        }
        if let Ok(v) = std::env::var("MEND_LLM_MODEL") {
            config.llm.model = v;
        }
        if let Ok(v) = std::env::var("MEND_LLM_API_KEY") {
            config.llm.api_key = Some(v);
        }
        if config.llm.api_key.is_none() {
            tracing::warn!("config: MEND_LLM_API_KEY not set, LLM requests will be unauthenticated");
        }
        tracing::debug!(
            "config: base_url={}, pages_root={}, endpoint={}",
            config.base_url,
            config.pages_root.display(),
            config.llm.endpoint
        );
        config
    }
}
