use anyhow::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const API_URL_VAR: &str = "INTELLIQUERY_API_URL";
pub const TIMEOUT_VAR: &str = "INTELLIQUERY_TIMEOUT_SECS";
pub const API_URL_FLAG: &str = "--api-url";
pub const TIMEOUT_FLAG: &str = "--timeout-secs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            request_timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Loads `.env` if present, then reads the client settings from the
    /// environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(&ConfigOverrides::default())
    }

    /// Like [`ClientConfig::from_env`], but each value set in `overrides`
    /// replaces its environment variable before validation, so an invalid
    /// variable is never read when a flag supplies the value.
    pub fn from_env_with(overrides: &ConfigOverrides) -> Result<Self> {
        dotenv::dotenv().ok();
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    fn resolve(
        overrides: &ConfigOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let api_url = pick(
            overrides.api_url.as_deref(),
            API_URL_FLAG,
            API_URL_VAR,
            &lookup,
        );
        let base_url = match api_url {
            Some((url, source)) if url.trim().is_empty() => {
                return Err(anyhow::anyhow!("{} is set but empty", source));
            }
            Some((url, _)) => normalize_base_url(&url),
            None => DEFAULT_API_URL.to_string(),
        };

        let timeout = pick(
            overrides.timeout_secs.as_deref(),
            TIMEOUT_FLAG,
            TIMEOUT_VAR,
            &lookup,
        );
        let request_timeout = match timeout {
            Some((raw, source)) => Some(parse_timeout_secs(&raw, source)?),
            None => None,
        };

        Ok(Self {
            base_url,
            request_timeout,
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Values taken from the command line ahead of the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub timeout_secs: Option<String>,
}

/// Override first, then the environment; returns the value with the name
/// of the source it came from.
fn pick(
    override_value: Option<&str>,
    flag: &'static str,
    var: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Option<(String, &'static str)> {
    match override_value {
        Some(value) => Some((value.to_string(), flag)),
        None => lookup(var).map(|value| (value, var)),
    }
}

/// `source` names the flag or variable the value came from in errors.
pub fn parse_timeout_secs(raw: &str, source: &str) -> Result<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        anyhow::anyhow!(
            "{} must be a whole number of seconds, got {:?}",
            source,
            raw
        )
    })?;
    if secs == 0 {
        return Err(anyhow::anyhow!("{} must be greater than zero", source));
    }
    Ok(Duration::from_secs(secs))
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let none = ConfigOverrides::default();
        let config = ClientConfig::resolve(&none, lookup_from(&[]))
            .unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn trims_trailing_slash_and_reads_timeout() {
        let none = ConfigOverrides::default();
        let config = ClientConfig::resolve(&none, lookup_from(&[
            (API_URL_VAR, "https://policy.example.com/api/"),
            (TIMEOUT_VAR, "30"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://policy.example.com/api");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(
            config.endpoint("/upload_document/"),
            "https://policy.example.com/api/upload_document/"
        );
    }

    #[test]
    fn rejects_bad_values() {
        let none = ConfigOverrides::default();
        assert!(ClientConfig::resolve(&none, lookup_from(&[(API_URL_VAR, "  ")])).is_err());
        assert!(ClientConfig::resolve(&none, lookup_from(&[(TIMEOUT_VAR, "soon")])).is_err());
        assert!(ClientConfig::resolve(&none, lookup_from(&[(TIMEOUT_VAR, "0")])).is_err());
    }

    #[test]
    fn flags_take_precedence_over_environment() {
        let overrides = ConfigOverrides {
            api_url: Some("http://10.0.0.5:8000/".to_string()),
            timeout_secs: Some("30".to_string()),
        };
        let config = ClientConfig::resolve(
            &overrides,
            lookup_from(&[(API_URL_VAR, ""), (TIMEOUT_VAR, "soon")]),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn unset_flag_falls_back_to_environment() {
        let overrides = ConfigOverrides {
            api_url: Some("http://10.0.0.5:8000".to_string()),
            timeout_secs: None,
        };
        let config =
            ClientConfig::resolve(&overrides, lookup_from(&[(TIMEOUT_VAR, "12")])).unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_secs(12)));
    }

    #[test]
    fn invalid_flags_are_rejected_and_named() {
        let empty_url = ConfigOverrides {
            api_url: Some("  ".to_string()),
            timeout_secs: None,
        };
        let err = ClientConfig::resolve(&empty_url, lookup_from(&[])).unwrap_err();
        assert_eq!(err.to_string(), "--api-url is set but empty");

        let bad_timeout = ConfigOverrides {
            api_url: None,
            timeout_secs: Some("abc".to_string()),
        };
        let err = ClientConfig::resolve(&bad_timeout, lookup_from(&[(TIMEOUT_VAR, "30")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "--timeout-secs must be a whole number of seconds, got \"abc\""
        );
    }

    #[test]
    fn environment_errors_name_the_variable() {
        let err = ClientConfig::resolve(
            &ConfigOverrides::default(),
            lookup_from(&[(TIMEOUT_VAR, "0")]),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "INTELLIQUERY_TIMEOUT_SECS must be greater than zero"
        );
    }
}
