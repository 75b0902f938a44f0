use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use thiserror::Error;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything the relay reads from the environment, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webhook_url: Url,
    pub bind_addr: SocketAddr,
    pub webhook_timeout: Duration,
    /// CORS origin of the site. Any origin is allowed when unset.
    pub frontend_origin: Option<HeaderValue>,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let raw_url = get("WEBHOOK_URL").ok_or(ConfigError::Missing("WEBHOOK_URL"))?;
        let webhook_url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidUrl {
            name: "WEBHOOK_URL",
            source,
        })?;
        if !matches!(webhook_url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                name: "WEBHOOK_URL",
                value: raw_url,
            });
        }

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let webhook_timeout = match get("WEBHOOK_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "WEBHOOK_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_WEBHOOK_TIMEOUT_SECS),
        };

        let frontend_origin = match get("FRONTEND_URL") {
            Some(raw) => Some(HeaderValue::from_str(raw.trim_end_matches('/')).map_err(|_| {
                ConfigError::Invalid {
                    name: "FRONTEND_URL",
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            webhook_url,
            bind_addr,
            webhook_timeout,
            frontend_origin,
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_webhook_is_set() {
        let config = config_from(&[("WEBHOOK_URL", "https://hooks.example.com/webhook/abc")]).unwrap();
        assert_eq!(config.webhook_url.as_str(), "https://hooks.example.com/webhook/abc");
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.webhook_timeout, Duration::from_secs(15));
        assert!(config.frontend_origin.is_none());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn webhook_url_is_required() {
        assert!(matches!(config_from(&[]), Err(ConfigError::Missing("WEBHOOK_URL"))));
        assert!(matches!(
            config_from(&[("WEBHOOK_URL", "   ")]),
            Err(ConfigError::Missing("WEBHOOK_URL"))
        ));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[("WEBHOOK_URL", "not a url")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            config_from(&[("WEBHOOK_URL", "ftp://example.com/x")]),
            Err(ConfigError::Invalid { name: "WEBHOOK_URL", .. })
        ));
        assert!(matches!(
            config_from(&[("WEBHOOK_URL", "https://example.com"), ("WEBHOOK_TIMEOUT_SECS", "0")]),
            Err(ConfigError::Invalid { name: "WEBHOOK_TIMEOUT_SECS", .. })
        ));
        assert!(matches!(
            config_from(&[("WEBHOOK_URL", "https://example.com"), ("BIND_ADDR", "localhost")]),
            Err(ConfigError::Invalid { name: "BIND_ADDR", .. })
        ));
    }

    #[test]
    fn reads_optional_settings() {
        let config = config_from(&[
            ("WEBHOOK_URL", "http://localhost:5678/webhook/join"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("WEBHOOK_TIMEOUT_SECS", "5"),
            ("FRONTEND_URL", "https://tenacity.example/"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.webhook_timeout, Duration::from_secs(5));
        assert_eq!(config.frontend_origin.unwrap(), "https://tenacity.example");
        assert_eq!(config.sentry_dsn.as_deref(), Some("https://key@sentry.example/1"));
    }
}
