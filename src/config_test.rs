use std::collections::HashMap;

use super::*;

fn config(vars: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = config(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1");
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.api_body_limit, DEFAULT_API_BODY_LIMIT_BYTES);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn reads_every_variable() {
    let cfg = config(&[
        ("PORT", "3000"),
        ("BIND_ADDR", "0.0.0.0"),
        ("BACKEND_URL", "https://api.example.org/"),
        ("API_BODY_LIMIT_BYTES", "1024"),
    ])
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.backend_url, "https://api.example.org");
    assert_eq!(cfg.api_body_limit, 1024);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config(&[("PORT", "  "), ("BACKEND_URL", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn invalid_port_is_an_error() {
    assert_eq!(
        config(&[("PORT", "eighty")]),
        Err(ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() })
    );
    assert!(config(&[("PORT", "70000")]).is_err());
}

#[test]
fn invalid_bind_addr_is_an_error() {
    assert!(matches!(
        config(&[("BIND_ADDR", "localhost")]),
        Err(ConfigError::Invalid { var: "BIND_ADDR", .. })
    ));
}

#[test]
fn backend_url_requires_http_scheme() {
    assert!(matches!(
        config(&[("BACKEND_URL", "localhost:8000")]),
        Err(ConfigError::Invalid { var: "BACKEND_URL", .. })
    ));
}

#[test]
fn backend_url_trailing_slashes_trimmed() {
    let cfg = config(&[("BACKEND_URL", "http://10.0.0.5:9000//")]).unwrap();
    assert_eq!(cfg.backend_url, "http://10.0.0.5:9000");
}

#[test]
fn error_message_names_the_variable() {
    let err = config(&[("API_BODY_LIMIT_BYTES", "-1")]).unwrap_err();
    assert_eq!(err.to_string(), "invalid API_BODY_LIMIT_BYTES: \"-1\"");
}
