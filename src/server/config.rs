use std::{net::SocketAddr, str::FromStr};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_IDLE_MINUTES: i64 = 60;
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    /// Base URL of the backend API, always ending in `/`.
    pub api_base_url: Url,
    pub bind_addr: SocketAddr,

    pub session_idle_minutes: i64,
    pub session_secure_cookie: bool,

    pub api_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_base_url = lookup("API_BASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("API_BASE_URL".to_string()))?;

        Ok(Self {
            api_base_url: parse_base_url(&raw_base_url)?,
            bind_addr: parse_or("BIND_ADDR", &lookup, DEFAULT_BIND_ADDR.parse().ok())?,
            session_idle_minutes: parse_or(
                "SESSION_IDLE_MINUTES",
                &lookup,
                Some(DEFAULT_SESSION_IDLE_MINUTES),
            )?,
            session_secure_cookie: parse_or("SESSION_SECURE_COOKIE", &lookup, Some(true))?,
            api_timeout_secs: parse_or("API_TIMEOUT_SECS", &lookup, Some(DEFAULT_API_TIMEOUT_SECS))?,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    // Url::join drops the last path segment unless the base ends with a slash
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };

    let url = Url::parse(&normalized).map_err(|e| ConfigError::InvalidEnvVar {
        name: "API_BASE_URL".to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar {
            name: "API_BASE_URL".to_string(),
            value: raw.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }

    Ok(url)
}

fn parse_or<T, F>(name: &str, lookup: &F, default: Option<T>) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        }),
        None => default.ok_or_else(|| ConfigError::MissingEnvVar(name.to_string())),
    }
}
