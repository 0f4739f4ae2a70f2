use mend_core::MendConfig;

#[test]
fn defaults_match_documented_values() {
    let config = MendConfig::default();
    assert_eq!(config.base_url, "http://localhost:8989");
    assert_eq!(config.pages_root.to_str(), Some("src/page"));
    assert_eq!(config.backup_root.to_str(), Some("a11y_backups"));
    assert_eq!(config.llm.connect_timeout_secs, 60);
    assert_eq!(config.llm.read_timeout_secs, 600);
    assert_eq!(config.llm.max_attempts, 3);
    assert!(config.llm.api_key.is_none());
}

#[test]
fn env_overrides_are_applied() {
    // Single test owns all MEND_* variables so nothing races on the process
    // environment.
    std::env::set_var("MEND_BASE_URL", "http://staging:3000");
    std::env::set_var("MEND_PAGES_ROOT", "web/src/pages");
    std::env::set_var("MEND_LLM_API_KEY", "test-key");

    let config = MendConfig::from_env();

    std::env::remove_var("MEND_BASE_URL");
    std::env::remove_var("MEND_PAGES_ROOT");
    std::env::remove_var("MEND_LLM_API_KEY");

    assert_eq!(config.base_url, "http://staging:3000");
    assert_eq!(config.pages_root.to_str(), Some("web/src/pages"));
    assert_eq!(config.llm.api_key.as_deref(), Some("test-key"));
    // Untouched fields keep their defaults.
    assert_eq!(config.backup_root.to_str(), Some("a11y_backups"));
}
