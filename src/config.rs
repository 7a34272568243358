//! Client configuration read from the environment.

use std::{env, time::Duration};

use thiserror::Error;
use tracing::{info, warn};
use url::Url;

pub const DEFAULT_CANDIDATES: [&str; 4] = [
    "http://localhost:8001",
    "http://localhost:8000",
    "http://127.0.0.1:8001",
    "http://127.0.0.1:8000",
];
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const ORIGIN_VAR: &str = "AXIVAI_API_ORIGIN";
const CANDIDATES_VAR: &str = "AXIVAI_API_CANDIDATES";
const TIMEOUT_VAR: &str = "AXIVAI_REQUEST_TIMEOUT_SECS";
const DEMO_MODE_VAR: &str = "AXIVAI_DEMO_MODE";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {value}")]
    InvalidUrl { key: &'static str, value: String },
    #[error("{key} must be a whole number of seconds greater than zero, got {value:?}")]
    InvalidTimeout { key: &'static str, value: String },
    #[error("{key} must be true/false, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base for the same-origin candidate. Without one that candidate
    /// always fails.
    pub origin: Option<Url>,
    /// Explicit candidates tried after the same-origin one, in order.
    pub candidates: Vec<String>,
    pub request_timeout: Duration,
    pub demo_mode: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: None,
            candidates: DEFAULT_CANDIDATES.iter().map(|c| c.to_string()).collect(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            demo_mode: true,
        }
    }
}

impl ClientConfig {
    /// Loads the configuration, keeping the default for any malformed value.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ORIGIN_VAR) {
            match parse_origin(&raw) {
                Ok(origin) => config.origin = origin,
                Err(err) => warn!("{err}; same-origin candidate disabled"),
            }
        }

        if let Some(raw) = lookup(CANDIDATES_VAR) {
            let candidates = parse_candidates(&raw);
            if candidates.is_empty() {
                warn!("{CANDIDATES_VAR} is empty, keeping default candidates");
            } else {
                config.candidates = candidates;
            }
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match parse_timeout(&raw) {
                Ok(timeout) => config.request_timeout = timeout,
                Err(err) => warn!(
                    "{err}; using default of {}s",
                    DEFAULT_REQUEST_TIMEOUT.as_secs()
                ),
            }
        }

        if let Some(raw) = lookup(DEMO_MODE_VAR) {
            match parse_flag(DEMO_MODE_VAR, &raw) {
                Ok(flag) => config.demo_mode = flag,
                Err(err) => warn!("{err}; demo mode stays enabled"),
            }
        }

        info!(
            origin = config.origin.as_ref().map(Url::as_str).unwrap_or("<none>"),
            candidates = config.candidates.len(),
            timeout_secs = config.request_timeout.as_secs(),
            demo_mode = config.demo_mode,
            "client configuration loaded"
        );
        config
    }
}

fn parse_origin(raw: &str) -> Result<Option<Url>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Url::parse(trimmed)
        .ok()
        .filter(|url| !url.cannot_be_a_base())
        .map(Some)
        .ok_or_else(|| ConfigError::InvalidUrl {
            key: ORIGIN_VAR,
            value: raw.to_string(),
        })
}

fn parse_candidates(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|entry| entry.trim().trim_end_matches('/'))
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidTimeout {
            key: TIMEOUT_VAR,
            value: raw.to_string(),
        })
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_with(&[]);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.candidates[0], "http://localhost:8001");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(config.demo_mode);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_with(&[
            (ORIGIN_VAR, "https://app.axivai.test"),
            (CANDIDATES_VAR, " http://a:1/, ,http://b:2 "),
            (TIMEOUT_VAR, "12"),
            (DEMO_MODE_VAR, "false"),
        ]);
        assert_eq!(
            config.origin.as_ref().map(Url::as_str),
            Some("https://app.axivai.test/")
        );
        assert_eq!(config.candidates, vec!["http://a:1", "http://b:2"]);
        assert_eq!(config.request_timeout, Duration::from_secs(12));
        assert!(!config.demo_mode);
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let config = config_with(&[
            (ORIGIN_VAR, "not a url"),
            (CANDIDATES_VAR, ","),
            (TIMEOUT_VAR, "0"),
            (DEMO_MODE_VAR, "maybe"),
        ]);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn parse_errors_name_the_variable() {
        let err = parse_timeout("soon").unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_VAR));
        assert_eq!(
            parse_flag(DEMO_MODE_VAR, "2"),
            Err(ConfigError::InvalidFlag {
                key: DEMO_MODE_VAR,
                value: "2".into()
            })
        );
    }
}
