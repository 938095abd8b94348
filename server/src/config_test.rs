use std::collections::HashMap;

use super::*;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_optional_vars_missing() {
    let config = ServerConfig::from_vars(vars(&[("API_BACKEND_URL", "http://backend:8080/api")])).unwrap();
    assert_eq!(config, ServerConfig {
        port: 3000,
        backend_url: "http://backend:8080/api".into(),
        proxy_timeout_secs: 10,
    });
}

#[test]
fn backend_url_trailing_slashes_are_trimmed() {
    let config = ServerConfig::from_vars(vars(&[("API_BACKEND_URL", " http://backend/api// ")])).unwrap();
    assert_eq!(config.backend_url, "http://backend/api");
}

#[test]
fn backend_url_is_required() {
    assert_eq!(ServerConfig::from_vars(vars(&[])), Err(ConfigError::Missing("API_BACKEND_URL")));
    assert_eq!(ServerConfig::from_vars(vars(&[("API_BACKEND_URL", "  ")])), Err(ConfigError::Missing("API_BACKEND_URL")));
}

#[test]
fn numeric_overrides_are_parsed() {
    let config = ServerConfig::from_vars(vars(&[
        ("API_BACKEND_URL", "http://b"),
        ("PORT", "8081"),
        ("API_PROXY_TIMEOUT_SECS", "30"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8081);
    assert_eq!(config.proxy_timeout_secs, 30);
}

#[test]
fn invalid_port_is_reported() {
    let err = ServerConfig::from_vars(vars(&[("API_BACKEND_URL", "http://b"), ("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert_eq!(err.to_string(), "invalid value for PORT: \"eighty\"");
}

#[test]
fn from_env_reads_process_environment() {
    // Only this test touches API_BACKEND_URL.
    unsafe { std::env::set_var("API_BACKEND_URL", "http://env-backend/api/") };
    let config = ServerConfig::from_env();
    unsafe { std::env::remove_var("API_BACKEND_URL") };
    assert_eq!(config.map(|c| c.backend_url), Ok("http://env-backend/api".to_owned()));
}
