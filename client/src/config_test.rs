use super::*;

#[test]
fn defaults_when_nothing_is_set() {
    let config = ClientConfig::from_raw(None, None, None);
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.session_ttl, Duration::from_secs(3599));
    assert_eq!(config.expiry_check_interval, Duration::from_secs(1));
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let config = ClientConfig::from_raw(Some("https://erp.example.com/api/"), None, None);
    assert_eq!(config.api_base, "https://erp.example.com/api");
}

#[test]
fn blank_api_base_falls_back_to_default() {
    let config = ClientConfig::from_raw(Some("   "), None, None);
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn numeric_overrides_are_applied() {
    let config = ClientConfig::from_raw(None, Some("600"), Some("250"));
    assert_eq!(config.session_ttl, Duration::from_secs(600));
    assert_eq!(config.expiry_check_interval, Duration::from_millis(250));
}

#[test]
fn invalid_or_zero_numbers_fall_back_to_defaults() {
    let config = ClientConfig::from_raw(None, Some("soon"), Some("0"));
    assert_eq!(config.session_ttl, Duration::from_secs(DEFAULT_SESSION_TTL_SECS));
    assert_eq!(config.expiry_check_interval, Duration::from_millis(DEFAULT_EXPIRY_CHECK_MS));
}
