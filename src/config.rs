//! Host server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost";
pub const DEFAULT_API_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Data backend base URL, no trailing slash.
    pub backend_url: String,
    /// Largest request body forwarded to the backend.
    pub api_body_limit: usize,
}

impl HostConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8080
    /// - `BIND_ADDR`: default `127.0.0.1`
    /// - `BACKEND_URL`: default `http://localhost`
    /// - `API_BODY_LIMIT_BYTES`: default 10 MiB
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), IpAddr::from([127, 0, 0, 1]))?;
        let api_body_limit = parse_or(
            "API_BODY_LIMIT_BYTES",
            lookup("API_BODY_LIMIT_BYTES"),
            DEFAULT_API_BODY_LIMIT_BYTES,
        )?;
        let backend_url = normalize_backend_url(lookup("BACKEND_URL").as_deref())?;

        Ok(Self { bind_addr, port, backend_url, api_body_limit })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn normalize_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::Invalid { var: "BACKEND_URL", value: value.to_owned() });
    }
    Ok(value.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
