/// Relay configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// API base URL without a trailing slash.
    pub api_url: String,
    /// Per-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Treat non-2xx responses as failures (default: `true`).
    pub strict_status: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got `{value}`")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            strict_status: true,
        }
    }
}

impl RelayConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                          | Default                 |
    /// |----------------------------------|-------------------------|
    /// | `FORMRELAY_API_URL`              | `http://localhost:3000` |
    /// | `FORMRELAY_REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `FORMRELAY_STRICT_STATUS`        | `true`                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("FORMRELAY_API_URL")
            .map(|url| normalize_api_url(&url))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout_secs = match lookup("FORMRELAY_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: "FORMRELAY_REQUEST_TIMEOUT_SECS",
                    expected: "a positive whole number of seconds",
                    value: raw.clone(),
                })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let strict_status = match lookup("FORMRELAY_STRICT_STATUS") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "FORMRELAY_STRICT_STATUS",
                expected: "true or false",
                value: raw.clone(),
            })?,
            None => true,
        };

        Ok(Self {
            api_url,
            request_timeout_secs,
            strict_status,
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

/// Strip surrounding whitespace and trailing slashes.
pub fn normalize_api_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = RelayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RelayConfig::default());
    }

    #[test]
    fn trims_trailing_slash_from_api_url() {
        let config =
            RelayConfig::from_lookup(lookup(&[("FORMRELAY_API_URL", "https://api.test/ ")]))
                .unwrap();
        assert_eq!(config.api_url, "https://api.test");
        assert_eq!(
            config.endpoint("/api/v1/flow/1111"),
            "https://api.test/api/v1/flow/1111"
        );
    }

    #[test]
    fn parses_timeout_and_lenient_status() {
        let config = RelayConfig::from_lookup(lookup(&[
            ("FORMRELAY_REQUEST_TIMEOUT_SECS", "5"),
            ("FORMRELAY_STRICT_STATUS", "False"),
        ]))
        .unwrap();
        assert_eq!(config.request_timeout_secs, 5);
        assert!(!config.strict_status);
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = RelayConfig::from_lookup(lookup(&[("FORMRELAY_REQUEST_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "FORMRELAY_REQUEST_TIMEOUT_SECS must be a positive whole number of seconds, got `soon`"
        );
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = RelayConfig::from_lookup(lookup(&[("FORMRELAY_REQUEST_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "FORMRELAY_REQUEST_TIMEOUT_SECS",
                expected: "a positive whole number of seconds",
                value: "0".to_string(),
            }
        );
    }

    #[test]
    fn rejects_bad_bool() {
        let result = RelayConfig::from_lookup(lookup(&[("FORMRELAY_STRICT_STATUS", "maybe")]));
        assert!(result.is_err());
    }
}
